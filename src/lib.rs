//! IlmAI chat front end.
//!
//! A server-rendered chat UI for an Islamic studies assistant. The browser
//! talks to this process over plain HTML forms, progressively enhanced with
//! HTMX; this process forwards each message to an external reply service
//! and renders the conversation.
//!
//! # Architecture
//!
//! - **Server**: Axum router, cookie-backed sessions, HTMX fragment swaps
//! - **Chat**: session controller, assistant modes, reply service client
//! - **UI**: views as plain functions rendering HTML strings
//!
//! # Modules
//!
//! - [`chat`]: Chat session controller and reply service client
//! - [`config`]: Layered configuration
//! - [`server`]: HTTP routes and handlers
//! - [`ui`]: Pages and components

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod chat;
pub mod config;
pub mod error;
pub mod server;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use crate::chat::SessionStore;
use crate::config::AppConfig;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Session store for conversation management.
    pub sessions: SessionStore,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}
