//! prizefund dashboard library entry.
//!
//! This crate wires config, the session store, and the web layer around the
//! reward core into a single-page dashboard. It is intended to be consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod session;
pub mod web;
