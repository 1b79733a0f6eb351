#[cfg(test)]
pub mod canned_http;
pub mod email_scraper;
pub mod result_assembler;
