//! Test doubles for the trait abstractions.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemorySession`] - In-memory session token storage
//! - [`RecordingNotifier`] - Records notification events in order

pub mod http;
pub mod notifier;
pub mod session;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use notifier::RecordingNotifier;
pub use session::InMemorySession;
