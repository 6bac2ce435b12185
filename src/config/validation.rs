use regex::Regex;
use reqwest::Url;

/// Expand `${VAR_NAME}` references using `lookup`. Unknown variables are
/// left in place so the resulting URL error points at them.
pub fn expand_env_var_in_string<F>(value: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let re = match Regex::new(r"\$\{([^}]+)\}") {
        Ok(re) => re,
        Err(_) => return value.to_string(),
    };

    re.replace_all(value, |caps: &regex::Captures| {
        let var_name = &caps[1];
        lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
    })
    .into_owned()
}

/// An empty URL means "not configured" and is accepted; anything else must
/// be an absolute http(s) URL.
pub fn validate_webhook_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Ok(());
    }

    let parsed = Url::parse(url).map_err(|e| format!("invalid webhook URL '{}': {}", url, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!(
            "invalid webhook URL '{}': unsupported scheme '{}'",
            url, other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_known_variable() {
        let out = expand_env_var_in_string("http://${HOST}:5678/webhook/chat", |k| {
            (k == "HOST").then(|| "10.0.0.2".to_string())
        });
        assert_eq!(out, "http://10.0.0.2:5678/webhook/chat");
    }

    #[test]
    fn test_expand_unknown_variable_is_kept() {
        let out = expand_env_var_in_string("http://${NOPE}/chat", |_| None);
        assert_eq!(out, "http://${NOPE}/chat");
    }

    #[test]
    fn test_validate_accepts_http_and_empty() {
        assert!(validate_webhook_url("http://127.0.0.1:5678/webhook-test/chat").is_ok());
        assert!(validate_webhook_url("https://n8n.example.com/webhook/chat").is_ok());
        assert!(validate_webhook_url("").is_ok());
    }

    #[test]
    fn test_validate_rejects_relative_and_other_schemes() {
        assert!(validate_webhook_url("/webhook/chat").is_err());
        assert!(validate_webhook_url("ftp://example.com/chat").is_err());
    }
}
