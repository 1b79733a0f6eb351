use std::collections::BTreeSet;
use std::time::Duration;
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::{Client, ClientBuilder, StatusCode};
use tracing::debug;
use crate::models::error::ScrapeOutcome;

pub const SCRAPE_TIMEOUT: Duration = Duration::from_secs(5);
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Substrings that mark a match as a placeholder or an asset filename.
const EMAIL_DENYLIST: [&str; 7] = ["example", ".png", ".jpg", ".jpeg", ".svg", ".css", ".js"];

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"\b[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b").unwrap();
}

/// Website contact lookup. Implementations never fail the caller.
#[async_trait]
pub trait EmailSource: Send + Sync {
    async fn scrape(&self, url: &str, max_emails: usize) -> ScrapeOutcome;
}

pub struct EmailScraper {
    client: Client,
}

impl EmailScraper {
    pub fn new() -> anyhow::Result<Self> {
        let client = scraper_client_builder().build()?;
        Ok(Self { client })
    }

    async fn fetch_text(&self, url: &str) -> Result<Option<String>, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        if response.status() != StatusCode::OK {
            debug!("Skipping {}: HTTP {}", url, response.status());
            return Ok(None);
        }

        let text = response.text().await?;
        Ok(Some(text).filter(|t| !t.is_empty()))
    }
}

fn scraper_client_builder() -> ClientBuilder {
    Client::builder()
        .timeout(SCRAPE_TIMEOUT)
        .user_agent(BROWSER_USER_AGENT)
}

#[async_trait]
impl EmailSource for EmailScraper {
    async fn scrape(&self, url: &str, max_emails: usize) -> ScrapeOutcome {
        match self.fetch_text(url).await {
            Ok(Some(text)) => match extract_emails(&text, max_emails) {
                Some(emails) => ScrapeOutcome::Found(emails),
                None => ScrapeOutcome::Empty,
            },
            Ok(None) => ScrapeOutcome::Empty,
            Err(e) => {
                debug!("Failed to scrape {}: {}", url, e);
                ScrapeOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Pulls addresses out of raw page text. Matches are lowercased and
/// de-duplicated, denylisted ones dropped, the rest sorted, capped at
/// `max_emails` and joined with ", ".
pub fn extract_emails(text: &str, max_emails: usize) -> Option<String> {
    let unique: BTreeSet<String> = EMAIL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(|email| !EMAIL_DENYLIST.iter().any(|bad| email.contains(bad)))
        .collect();

    let kept: Vec<String> = unique.into_iter().take(max_emails).collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join(", "))
    }
}
