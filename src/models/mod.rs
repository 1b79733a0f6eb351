pub mod error;
pub mod place;
pub mod place_detail;
pub mod result_row;
pub mod search_request;
