use async_trait::async_trait;
use chrono::Local;
use reqwest::Client;
use serde::Serialize;

use crate::domain::change::ChangeRecord;
use crate::error::{AppError, AppResult};
use crate::services::NotifierService;

pub const EMBED_TITLE: &str = "Perforce Commit";
pub const EMBED_AUTHOR: &str = "Perforce Server";
pub const EMBED_COLOR: u32 = 0xc8702a;
pub const EMBED_FOOTER: &str = "RickshawStudios/perforce-commit-discord-bot";

/// Discord rejects embeds whose description is longer than this.
const DESCRIPTION_LIMIT: usize = 4096;

pub struct DiscordWebhook {
    http: Client,
    url: String,
}

impl DiscordWebhook {
    pub fn new(url: String) -> Self {
        Self {
            http: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl NotifierService for DiscordWebhook {
    async fn notify(&self, record: &ChangeRecord) -> AppResult<()> {
        let payload = WebhookPayload::for_change(record);

        let response = self
            .http
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| AppError::Delivery(format!("failed to call Discord: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::Delivery(format!(
                "Discord responded with {status}: {body}"
            )));
        }

        log::info!(
            "Sent notification @{}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct WebhookPayload {
    pub embeds: Vec<DiscordEmbed>,
}

impl WebhookPayload {
    pub fn for_change(record: &ChangeRecord) -> Self {
        Self {
            embeds: vec![DiscordEmbed {
                title: EMBED_TITLE.to_string(),
                description: code_span(record.as_str()),
                color: EMBED_COLOR,
                author: DiscordAuthor {
                    name: EMBED_AUTHOR.to_string(),
                },
                footer: DiscordFooter {
                    text: EMBED_FOOTER.to_string(),
                },
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DiscordEmbed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub author: DiscordAuthor,
    pub footer: DiscordFooter,
}

#[derive(Debug, Serialize)]
pub struct DiscordAuthor {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct DiscordFooter {
    pub text: String,
}

fn code_span(text: &str) -> String {
    // two backticks plus the ellipsis
    let budget = DESCRIPTION_LIMIT - 3;
    if text.chars().count() <= budget + 1 {
        return format!("`{text}`");
    }
    let truncated: String = text.chars().take(budget).collect();
    format!("`{truncated}…`")
}
