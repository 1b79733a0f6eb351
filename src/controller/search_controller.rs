use std::time::Duration;
use tracing::{debug, info, warn};
use crate::helpers::email_scraper::EmailSource;
use crate::helpers::result_assembler::{assemble_row, passes_filters};
use crate::models::error::PlacesError;
use crate::models::place::PageCursor;
use crate::models::result_row::{ResultRow, SearchOutcome};
use crate::models::search_request::SearchRequest;
use crate::repositories::google_places_repo::{fetch_detail_or_empty, PlacesApi};

/// A fresh `next_page_token` is rejected by the API until this has passed.
pub const PAGE_TOKEN_DELAY: Duration = Duration::from_secs(2);

/// Runs one search end to end. Never fails: an empty run yields the
/// "no results" table and a fatal error yields a one-row error table.
pub async fn run_search(
    places_api: &dyn PlacesApi,
    email_source: &dyn EmailSource,
    request: &SearchRequest,
) -> SearchOutcome {
    match collect_rows(places_api, email_source, request).await {
        Ok(rows) => {
            info!("Search for {:?} produced {} rows", request.query, rows.len());
            SearchOutcome::rows(rows)
        }
        Err(e) => {
            warn!("Search for {:?} failed: {:?}", request.query, e);
            SearchOutcome::failed(e.to_string())
        }
    }
}

async fn collect_rows(
    places_api: &dyn PlacesApi,
    email_source: &dyn EmailSource,
    request: &SearchRequest,
) -> Result<Vec<ResultRow>, PlacesError> {
    let cap = request.result_cap();
    let mut rows: Vec<ResultRow> = Vec::new();
    let mut cursor: Option<PageCursor> = None;

    while rows.len() < cap {
        let page = places_api.text_search(&request.query, cursor.as_ref()).await?;
        if page.places.is_empty() {
            break;
        }
        debug!("Processing page of {} places", page.places.len());

        for place in page.places {
            if !passes_filters(&place, request) {
                continue;
            }

            let detail = fetch_detail_or_empty(places_api, place.place_id.as_deref()).await;
            let emails = match detail.website() {
                Some(website) if request.scrape_emails => email_source
                    .scrape(website, request.max_emails)
                    .await
                    .into_emails(),
                _ => None,
            };

            rows.push(assemble_row(place, detail, emails));
            if rows.len() >= cap {
                break;
            }
        }

        match page.next_page_token {
            Some(next) if rows.len() < cap => {
                tokio::time::sleep(PAGE_TOKEN_DELAY).await;
                cursor = Some(next);
            }
            _ => break,
        }
    }

    Ok(rows)
}
