//! Concrete implementations of the traits in `crate::traits`.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileSessionStore`] - JSON file session storage
//! - [`ChannelNotifier`] - Forwards notifications to the event loop
//!
//! Test doubles live in [`mock`].

pub mod channel_notifier;
pub mod file_session;
pub mod mock;
pub mod reqwest_http;

pub use channel_notifier::ChannelNotifier;
pub use file_session::{FileSessionStore, Session, SESSION_TOKEN_KEY};
pub use mock::{InMemorySession, MockHttpClient, MockResponse, RecordingNotifier};
pub use reqwest_http::ReqwestHttpClient;
