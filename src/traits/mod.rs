//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET operations
//! - [`SessionStore`] - Session token storage
//! - [`Notifier`] - Loading/success/error status notifications

pub mod http;
pub mod notifier;
pub mod session;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use notifier::Notifier;
pub use session::{SessionError, SessionStore};
