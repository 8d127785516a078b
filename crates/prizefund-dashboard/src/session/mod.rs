//! Per-session dashboard state.
//!
//! A session holds the scores a visitor has edited and whether editing is
//! switched on. It is created on the first request without a known cookie,
//! and ends on an explicit reset or after the configured idle time.

pub mod store;

pub use store::{SessionMarks, SessionStore};
