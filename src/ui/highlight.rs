use colored::*;
use regex::Regex;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::{as_24_bit_terminal_escaped, LinesWithEndings};

const THEME: &str = "Solarized (dark)";
const MIN_RULE_WIDTH: usize = 20;
const MAX_RULE_WIDTH: usize = 80;

/// Renders a finished assistant reply for the terminal.
///
/// Handles the subset of Markdown workflow answers actually use: fenced code
/// blocks (boxed and syntax highlighted), `#` headings, bullets and `**bold**`.
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    bold_re: Option<Regex>,
    width: usize,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let width = terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), _)| w as usize)
            .unwrap_or(MAX_RULE_WIDTH);
        Self::with_width(width)
    }

    pub fn with_width(width: usize) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            bold_re: Regex::new(r"\*\*([^*]+)\*\*").ok(),
            width: width.clamp(MIN_RULE_WIDTH, MAX_RULE_WIDTH),
        }
    }

    pub fn render(&self, text: &str) -> String {
        let mut output = String::new();
        let mut in_code_block = false;
        let mut code_block_lang: Option<String> = None;
        let mut code_block_content = String::new();

        for line in text.lines() {
            if let Some(fence) = line.trim_start().strip_prefix("```") {
                if in_code_block {
                    output.push_str(
                        &self.highlight_code(&code_block_content, code_block_lang.as_deref()),
                    );
                    output.push_str(&self.footer());
                    code_block_content.clear();
                    code_block_lang = None;
                    in_code_block = false;
                } else {
                    let lang = fence.trim();
                    code_block_lang = (!lang.is_empty()).then(|| lang.to_string());
                    output.push_str(&self.header(code_block_lang.as_deref().unwrap_or("code")));
                    in_code_block = true;
                }
                continue;
            }

            if in_code_block {
                code_block_content.push_str(line);
                code_block_content.push('\n');
            } else {
                output.push_str(&self.render_line(line));
                output.push('\n');
            }
        }

        // Unterminated fence: show what we have and close the box anyway.
        if in_code_block {
            output.push_str(&self.highlight_code(&code_block_content, code_block_lang.as_deref()));
            output.push_str(&self.footer());
        }

        output
    }

    fn render_line(&self, line: &str) -> String {
        let trimmed = line.trim_start();

        if let Some(heading) = heading_text(trimmed) {
            return self.render_inline(heading).bold().underline().to_string();
        }

        for bullet in ["- ", "* "] {
            if let Some(item) = trimmed.strip_prefix(bullet) {
                let indent = &line[..line.len() - trimmed.len()];
                return format!("{}  • {}", indent, self.render_inline(item));
            }
        }

        self.render_inline(line)
    }

    fn render_inline(&self, text: &str) -> String {
        match &self.bold_re {
            Some(re) => re
                .replace_all(text, |caps: &regex::Captures| caps[1].bold().to_string())
                .into_owned(),
            None => text.to_string(),
        }
    }

    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let theme = match self.theme_set.themes.get(THEME) {
            Some(theme) => theme,
            None => return code.to_string(),
        };

        let syntax = lang
            .and_then(|lang| {
                self.syntax_set
                    .find_syntax_by_token(lang)
                    .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            })
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut output = String::new();

        for line in LinesWithEndings::from(code) {
            match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => {
                    let ranges: Vec<(Style, &str)> = ranges;
                    output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
                }
                Err(_) => output.push_str(line),
            }
        }

        if !output.is_empty() {
            output.push_str("\x1b[0m");
        }
        output
    }

    fn header(&self, label: &str) -> String {
        let used = label.chars().count() + 4;
        let fill = "─".repeat(self.width.saturating_sub(used));
        format!("{}[{}]{}\n", "┌─".dimmed(), label.cyan(), fill.dimmed())
    }

    fn footer(&self) -> String {
        format!("{}\n", format!("└{}", "─".repeat(self.width - 1)).dimmed())
    }
}

/// ATX heading text: 1-6 `#` followed by whitespace or end of line.
fn heading_text(line: &str) -> Option<&str> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> MarkdownRenderer {
        colored::control::set_override(false);
        MarkdownRenderer::with_width(40)
    }

    #[test]
    fn test_plain_text_passes_through() {
        let out = plain().render("Revenue grew 12%\nin Q3.");
        assert_eq!(out, "Revenue grew 12%\nin Q3.\n");
    }

    #[test]
    fn test_bold_markers_are_removed() {
        let out = plain().render("The **leader** is Acme.");
        assert_eq!(out, "The leader is Acme.\n");
    }

    #[test]
    fn test_headings_and_bullets() {
        let out = plain().render("## Competitors\n- Acme\n  * Globex");
        assert_eq!(out, "Competitors\n  • Acme\n    • Globex\n");
    }

    fn strip_ansi(text: &str) -> String {
        Regex::new(r"\x1b\[[0-9;]*m")
            .unwrap()
            .replace_all(text, "")
            .into_owned()
    }

    #[test]
    fn test_hash_without_space_is_not_a_heading() {
        let out = plain().render("#1 brand is Acme\n#AI trends");
        assert_eq!(out, "#1 brand is Acme\n#AI trends\n");
    }

    #[test]
    fn test_heading_levels() {
        let out = plain().render("###### Six\n####### Seven\n#");
        assert_eq!(out, "Six\n####### Seven\n\n");
    }

    #[test]
    fn test_code_block_is_boxed() {
        let out = strip_ansi(&plain().render("Query:\n```sql\nSELECT 1;\n```\ndone"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Query:");
        assert!(lines[1].starts_with("┌─[sql]"));
        assert_eq!(lines[1].chars().count(), 40);
        assert!(lines[2].contains("SELECT 1;"));
        assert!(lines[3].starts_with('└'));
        assert_eq!(lines[4], "done");
    }

    #[test]
    fn test_unterminated_code_block_is_closed() {
        let out = strip_ansi(&plain().render("```\nlet x = 1;"));
        assert!(out.starts_with("┌─[code]"));
        assert!(out.contains("let x = 1;"));
        assert!(out.trim_end().ends_with('─'));
    }

    #[test]
    fn test_width_is_clamped() {
        assert_eq!(MarkdownRenderer::with_width(500).width, MAX_RULE_WIDTH);
        assert_eq!(MarkdownRenderer::with_width(3).width, MIN_RULE_WIDTH);
    }
}
