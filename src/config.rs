use clap::{ArgAction, Parser};
use crate::models::search_request::{ApiKey, SearchRequest};

pub const DEFAULT_PLACES_API_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Search Google Places with rating/price filters and optional email scraping.
#[derive(Parser, Clone, Debug)]
#[clap(version, about)]
pub struct Config {
    /// Google Places search query (e.g. "catering services near Paris").
    #[clap(env, long)]
    pub query: String,

    /// Maximum number of results to retrieve (up to 60).
    #[clap(env, long, default_value_t = 20)]
    pub max_results: u32,

    /// Minimum rating to include (e.g. 4.0).
    #[clap(env, long, default_value_t = 0.0)]
    pub min_rating: f64,

    /// Maximum acceptable price level (0=free, 4=very expensive).
    #[clap(env, long, default_value_t = 4)]
    pub max_price_level: i64,

    /// Scrape business websites for email addresses.
    #[clap(env, long, default_value_t = true, action = ArgAction::Set)]
    pub scrape_emails: bool,

    /// Maximum number of emails to extract per website.
    #[clap(env, long, default_value_t = 3)]
    pub max_emails: usize,

    #[clap(env = "GOOGLE_PLACES_API_KEY", long, hide_env_values = true)]
    pub api_key: ApiKey,

    /// Base URL of the Places web service.
    #[clap(env, long, default_value = DEFAULT_PLACES_API_URL)]
    pub places_api_url: String,
}

impl Config {
    pub fn search_request(&self) -> SearchRequest {
        SearchRequest {
            query: self.query.clone(),
            max_results: self.max_results,
            min_rating: self.min_rating,
            max_price_level: self.max_price_level,
            scrape_emails: self.scrape_emails,
            max_emails: self.max_emails,
            api_key: self.api_key.clone(),
        }
    }
}
