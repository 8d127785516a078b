//! Dashboard web layer.
//!
//! - `handlers`: axum handlers for the page, the edit forms, and the JSON view
//! - `page`: HTML rendering of the dashboard
//! - `cookie`: session cookie parsing and formatting
//! - `error`: mapping of `FundError` to HTTP responses

pub mod cookie;
pub mod error;
pub mod handlers;
pub mod page;
