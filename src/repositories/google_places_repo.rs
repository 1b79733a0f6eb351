use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use crate::models::error::PlacesError;
use crate::models::place::{PageCursor, RawPlace, SearchPage};
use crate::models::place_detail::{PlaceDetail, DETAIL_FIELDS};
use crate::models::search_request::ApiKey;

pub const TEXT_SEARCH_ENDPOINT: &str = "textsearch";
pub const DETAILS_ENDPOINT: &str = "details";

/// Upstream place search. `text_search` failures are fatal for a run, except
/// a non-OK API status on a follow-up page, which reads as an empty page.
/// `place_details` failures are absorbed by [`fetch_detail_or_empty`].
#[async_trait]
pub trait PlacesApi: Send + Sync {
    async fn text_search(
        &self,
        query: &str,
        cursor: Option<&PageCursor>,
    ) -> Result<SearchPage, PlacesError>;

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetail, PlacesError>;
}

pub struct GooglePlacesRepo {
    client: Client,
    base_url: String,
    api_key: ApiKey,
}

impl GooglePlacesRepo {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        api_key: ApiKey,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}/json", self.base_url, endpoint)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&str, &str)],
    ) -> Result<T, PlacesError> {
        let response = self
            .client
            .get(self.endpoint_url(endpoint))
            .query(params)
            .send()
            .await
            .map_err(|e| PlacesError::transport(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::RequestFailure {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PlacesError::transport(endpoint, e))?;

        serde_json::from_slice(&body).map_err(|source| PlacesError::Decode { endpoint, source })
    }
}

#[async_trait]
impl PlacesApi for GooglePlacesRepo {
    async fn text_search(
        &self,
        query: &str,
        cursor: Option<&PageCursor>,
    ) -> Result<SearchPage, PlacesError> {
        let params = text_search_params(query, self.api_key.expose(), cursor);
        let response: TextSearchResponse = self.get_json(TEXT_SEARCH_ENDPOINT, &params).await?;
        if let Err(e) = check_api_status(TEXT_SEARCH_ENDPOINT, &response.status, response.error_message) {
            // A rejected page token ends pagination; only the first page is fatal.
            if cursor.is_some() {
                warn!("Stopping pagination: {}", e);
                return Ok(SearchPage::default());
            }
            return Err(e);
        }

        debug!(
            "Text search returned {} places, more pages: {}",
            response.results.len(),
            response.next_page_token.is_some()
        );

        Ok(SearchPage {
            places: response.results,
            next_page_token: response
                .next_page_token
                .filter(|token| !token.is_empty())
                .map(PageCursor),
        })
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetail, PlacesError> {
        let params = [
            ("place_id", place_id),
            ("fields", DETAIL_FIELDS),
            ("key", self.api_key.expose()),
        ];
        let response: DetailsResponse = self.get_json(DETAILS_ENDPOINT, &params).await?;
        check_api_status(DETAILS_ENDPOINT, &response.status, response.error_message)?;

        Ok(response.result.unwrap_or_default())
    }
}

/// Best-effort enrichment: any detail failure is logged and turned into an
/// empty detail so the search carries on.
pub async fn fetch_detail_or_empty(
    api: &dyn PlacesApi,
    place_id: Option<&str>,
) -> PlaceDetail {
    let place_id = match place_id {
        Some(id) if !id.is_empty() => id,
        _ => return PlaceDetail::default(),
    };

    match api.place_details(place_id).await {
        Ok(detail) => detail,
        Err(e) => {
            warn!("Error fetching details for {}: {}", place_id, e);
            PlaceDetail::default()
        }
    }
}

/// Follow-up pages are addressed by token alone; the query must not be resent.
pub fn text_search_params<'a>(
    query: &'a str,
    api_key: &'a str,
    cursor: Option<&'a PageCursor>,
) -> Vec<(&'static str, &'a str)> {
    match cursor {
        Some(token) => vec![("pagetoken", token.as_str()), ("key", api_key)],
        None => vec![("query", query), ("key", api_key)],
    }
}

fn check_api_status(
    endpoint: &'static str,
    status: &str,
    message: Option<String>,
) -> Result<(), PlacesError> {
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        other => Err(PlacesError::ApiStatus {
            endpoint,
            status: other.to_string(),
            message,
        }),
    }
}

#[derive(Deserialize, Debug)]
struct TextSearchResponse {
    #[serde(default)]
    results: Vec<RawPlace>,
    next_page_token: Option<String>,
    #[serde(default = "ok_status")]
    status: String,
    error_message: Option<String>,
}

#[derive(Deserialize, Debug)]
struct DetailsResponse {
    result: Option<PlaceDetail>,
    #[serde(default = "ok_status")]
    status: String,
    error_message: Option<String>,
}

fn ok_status() -> String {
    "OK".to_string()
}
