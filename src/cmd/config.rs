use crate::config::AppConfig;
use crate::error::AppResult;

/// Prints the resolved configuration, webhook token masked.
pub fn run() -> AppResult<()> {
    let cfg = AppConfig::load()?;

    println!("P4 executable: {}", cfg.perforce.binary.display());
    println!("P4PORT: {}", cfg.perforce.port);
    println!("P4USER: {}", cfg.perforce.user);
    println!("P4CLIENT: {}", cfg.perforce.client);
    println!(
        "P4TICKETS: {}",
        display_value(&cfg.perforce.tickets.as_ref().map(|p| p.display().to_string()))
    );
    println!("Discord webhook: {}", mask_webhook(&cfg.webhook_url));
    println!("Poll interval: {}s", cfg.poll_interval.as_secs());

    Ok(())
}

fn display_value(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "<not set>".to_string())
}

/// Webhook URLs end in a secret token; keep everything before it.
fn mask_webhook(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(url) if !url.is_empty() => match url.trim_end_matches('/').rsplit_once('/') {
            Some((base, token)) if token.chars().count() > 6 => {
                let prefix: String = token.chars().take(3).collect();
                format!("{base}/{prefix}***")
            }
            Some((base, _)) => format!("{base}/***"),
            None => "***".to_string(),
        },
        _ => "<not set>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_webhook_token() {
        let url = Some("https://discord.com/api/webhooks/123/abcdefghijkl".to_string());
        assert_eq!(mask_webhook(&url), "https://discord.com/api/webhooks/123/abc***");
        assert_eq!(mask_webhook(&Some("https://x/abc".to_string())), "https://x/***");
        assert_eq!(mask_webhook(&None), "<not set>");
    }

    #[test]
    fn shows_unset_values() {
        assert_eq!(display_value(&None), "<not set>");
        assert_eq!(display_value(&Some(String::new())), "<not set>");
        assert_eq!(display_value(&Some("/tmp/t".to_string())), "/tmp/t");
    }
}
