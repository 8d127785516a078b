//! prizefund core: the reward arithmetic and the error surface.
//!
//! This crate owns the proportional reward allocator, the annual fund split,
//! and the reward tables built from them. It carries no HTTP or runtime
//! dependencies so the arithmetic can be reused and tested on its own.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All arithmetic is done on unsigned integers with 128-bit intermediates, so
//! no input within the type ranges can overflow or divide by zero.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod reward;

/// Shared result type.
pub use error::{FundError, Result};
