use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const DEFAULT_P4_PORT: &str = "127.0.0.1:1666";
pub const DEFAULT_P4_USER: &str = "svc_bot_p4";
pub const DEFAULT_P4_CLIENT: &str = "bot_client";
pub const DEFAULT_P4_BIN: &str = "p4";
pub const DEFAULT_INTERVAL_SECS: u64 = 30;
pub const MAX_INTERVAL_SECS: u64 = 86_400;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub perforce: PerforceConfig,
    pub webhook_url: Option<String>,
    pub poll_interval: Duration,
}

/// Environment handed to every `p4` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerforceConfig {
    pub binary: PathBuf,
    pub port: String,
    pub user: String,
    pub client: String,
    pub tickets: Option<PathBuf>,
}

impl PerforceConfig {
    pub fn env_vars(&self) -> Vec<(&'static str, String)> {
        let mut vars = vec![
            ("P4PORT", self.port.clone()),
            ("P4USER", self.user.clone()),
            ("P4CLIENT", self.client.clone()),
        ];
        if let Some(tickets) = &self.tickets {
            vars.push(("P4TICKETS", tickets.display().to_string()));
        }
        vars
    }
}

impl AppConfig {
    pub fn load() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let poll_interval = match value("P4NOTIFY_INTERVAL_SECS") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|err| {
                    AppError::Configuration(format!("invalid P4NOTIFY_INTERVAL_SECS '{raw}': {err}"))
                })?;
                if secs == 0 || secs > MAX_INTERVAL_SECS {
                    return Err(AppError::Configuration(format!(
                        "P4NOTIFY_INTERVAL_SECS must be between 1 and {MAX_INTERVAL_SECS}"
                    )));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_INTERVAL_SECS),
        };

        Ok(Self {
            perforce: PerforceConfig {
                binary: PathBuf::from(
                    value("P4NOTIFY_P4_BIN").unwrap_or_else(|| DEFAULT_P4_BIN.to_string()),
                ),
                port: value("P4PORT").unwrap_or_else(|| DEFAULT_P4_PORT.to_string()),
                user: value("P4USER").unwrap_or_else(|| DEFAULT_P4_USER.to_string()),
                client: value("P4CLIENT").unwrap_or_else(|| DEFAULT_P4_CLIENT.to_string()),
                tickets: value("P4TICKETS").map(PathBuf::from),
            },
            webhook_url: value("DISCORD_WEBHOOK_URL"),
            poll_interval,
        })
    }

    pub fn require_webhook_url(&self) -> AppResult<&str> {
        self.webhook_url
            .as_deref()
            .ok_or_else(|| AppError::Configuration("DISCORD_WEBHOOK_URL not configured".to_string()))
    }
}
