use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use places_lead_search::config::Config;
use places_lead_search::helpers::email_scraper::EmailScraper;
use places_lead_search::repositories::google_places_repo::GooglePlacesRepo;
use places_lead_search::run_search;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    let request = config.search_request();

    let places_repo = GooglePlacesRepo::new(
        reqwest::Client::new(),
        config.places_api_url.as_str(),
        request.api_key.clone(),
    );
    let email_scraper = EmailScraper::new().context("Error building the website scraper client")?;

    let outcome = run_search(&places_repo, &email_scraper, &request).await;
    if let Some(status) = &outcome.status {
        info!("{}", status);
    }

    let table = serde_json::to_string_pretty(&outcome.table)
        .context("Error serializing the result table")?;
    println!("{}", table);
    Ok(())
}
