//! Top-level facade crate for prizefund.
//!
//! Re-exports the reward core and the dashboard library so users can depend on a single crate.

pub mod core {
    pub use prizefund_core::*;
}

pub mod dashboard {
    pub use prizefund_dashboard::*;
}
