use clap::Parser;
use colored::*;
use std::process;

use hookchat::api::Dispatcher;
use hookchat::cli::Args;
use hookchat::config::{Config, FileConfig};
use hookchat::repl;
use hookchat::session::Session;
use hookchat::ui::{format_banner, format_status_panel, MarkdownRenderer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.config_init {
        init_config();
        return Ok(());
    }

    let one_shot = match args.one_shot_query() {
        Ok(query) => query,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let dispatcher = match Dispatcher::from_config(&config) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let renderer = MarkdownRenderer::new();
    let mut session = Session::new();

    if config.verbose {
        eprintln!(
            "{}",
            format!(
                "[session {}] started {}",
                session.session_id,
                session.started_at.format("%Y-%m-%d %H:%M:%S")
            )
            .dimmed()
        );
        eprintln!(
            "{}",
            format!(
                "[config] webhook {} (timeout {}s)",
                dispatcher.endpoint(),
                config.timeout_secs
            )
            .dimmed()
        );
    }

    if let Some(query) = one_shot {
        let reply = repl::run_turn(&dispatcher, &mut session, &renderer, &query).await;
        if reply.is_error() {
            process::exit(1);
        }
        return Ok(());
    }

    print!("{}", format_banner(&config.display));
    println!();
    print!("{}", format_status_panel(&config));
    println!();

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    repl::run(stdin, &config, &dispatcher, &mut session, &renderer).await?;

    Ok(())
}

fn init_config() {
    let path = match FileConfig::user_config_dir() {
        Some(dir) => dir.join("hookchat.yaml"),
        None => {
            eprintln!("{} could not determine home directory", "Error:".red());
            process::exit(1);
        }
    };

    match FileConfig::write_example(&path) {
        Ok(()) => println!(
            "{}",
            format!("Wrote example config to {}", path.display()).green()
        ),
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    }
}
