use colored::*;
use hookchat::config::DEFAULT_WEBHOOK_URL;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::{json, Value};
use std::env;
use std::time::{Duration, Instant};

/// Send one query to the webhook and dump exactly what comes back, for
/// debugging workflows whose answers the chat client cannot parse.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <query> [webhook-url]", args[0]);
        std::process::exit(1);
    }

    let query = &args[1];
    let url = args
        .get(2)
        .cloned()
        .or_else(|| env::var("HOOKCHAT_WEBHOOK_URL").ok())
        .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string());

    println!("{}", format!("Webhook: {}", url).green());
    println!("{}", format!("Query: {}", query).cyan());
    println!("{}", "-".repeat(80).dimmed());

    let request_body = json!({ "query": query });
    println!("{}", "Request payload:".bold());
    println!("{}", serde_json::to_string_pretty(&request_body)?);
    println!("{}", "-".repeat(80).dimmed());

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(120))
        .build()?;

    let started = Instant::now();
    let response = client.post(&url).json(&request_body).send().await?;
    let elapsed = started.elapsed();

    println!(
        "{}",
        format!("Status: {} ({} ms)", response.status(), elapsed.as_millis()).bold()
    );
    for (name, value) in response.headers() {
        println!(
            "{}",
            format!("{}: {}", name, value.to_str().unwrap_or("<binary>")).dimmed()
        );
    }
    println!("{}", "-".repeat(80).dimmed());

    let body = response.text().await?;
    println!("{}", "Raw body:".bold());
    println!("{}", body);
    println!("{}", "-".repeat(80).dimmed());

    match serde_json::from_str::<Value>(&body) {
        Ok(data) => {
            println!("{}", "Parsed JSON:".green());
            println!("{}", serde_json::to_string_pretty(&data)?);
            match data.get("text") {
                Some(text) => println!("{}: {}", "text".yellow(), text),
                None => println!("{}", "No `text` field in response".yellow()),
            }
        }
        Err(e) => {
            eprintln!("{}", format!("JSON parse error: {}", e).red());
        }
    }

    Ok(())
}
