use std::fmt;

/// Hard ceiling of the text-search endpoint: three pages of twenty.
pub const MAX_RESULTS_CEILING: usize = 60;
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Upstream credential. Never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Parameters of one search run.
#[derive(Clone, Debug)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: u32,
    pub min_rating: f64,
    pub max_price_level: i64,
    pub scrape_emails: bool,
    pub max_emails: usize,
    pub api_key: ApiKey,
}

impl SearchRequest {
    /// Number of rows the run may produce. Zero falls back to the default.
    pub fn result_cap(&self) -> usize {
        let requested = match self.max_results {
            0 => DEFAULT_MAX_RESULTS,
            n => n as usize,
        };
        requested.min(MAX_RESULTS_CEILING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(max_results: u32) -> SearchRequest {
        SearchRequest {
            query: "coffee".to_string(),
            max_results,
            min_rating: 0.0,
            max_price_level: 4,
            scrape_emails: false,
            max_emails: 3,
            api_key: ApiKey::new("key"),
        }
    }

    #[test]
    fn result_cap_is_clamped_to_sixty() {
        assert_eq!(request(20).result_cap(), 20);
        assert_eq!(request(60).result_cap(), 60);
        assert_eq!(request(500).result_cap(), 60);
    }

    #[test]
    fn zero_max_results_uses_default() {
        assert_eq!(request(0).result_cap(), DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn api_key_is_redacted_in_debug() {
        let rendered = format!("{:?}", request(1));
        assert!(!rendered.contains("\"key\""));
        assert!(rendered.contains("ApiKey(***)"));
    }
}
