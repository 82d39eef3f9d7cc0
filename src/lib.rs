//! examdesk - a terminal dashboard for university exam administration
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod notifications;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
