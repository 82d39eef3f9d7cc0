//! Error types for examdesk.
//!
//! | Type | Raised by | Handling |
//! |------|-----------|----------|
//! | [`FetchError`] | dashboard data requests | logged, turned into an error toast |
//! | [`ConfigError`] | CLI parsing and config validation | reported before the TUI starts |
//!
//! Trait-boundary errors ([`crate::traits::HttpError`],
//! [`crate::traits::SessionError`]) live next to their traits.

mod config;
mod fetch;

pub use config::ConfigError;
pub use fetch::FetchError;
