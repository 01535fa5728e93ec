//! HTTP protocol layer module
//!
//! Response building decoupled from page content.

pub mod response;

pub use response::build_html_response;
