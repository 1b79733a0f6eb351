pub mod config;
pub mod controller;
pub mod helpers;
pub mod models;
pub mod repositories;

pub use controller::search_controller::run_search;
pub use models::result_row::{ResultRow, ResultTable, SearchOutcome};
pub use models::search_request::SearchRequest;
