//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Settings, Messages)
//! - `controllers/` - Orchestration (FormController)
//! - `services/` - Business operations (shortener, theme store)
//! - `infrastructure/` - External integrations (config, clipboard, logging, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::form::{FormController, FormState, Notifier, SubmitTicket};
pub use domain::{AppSettings, Message, ThemeMode};
pub use infrastructure::config::ApiConfig;
pub use infrastructure::error::{AppError, ShortenError};
pub use services::shortener::{RapidApiShortener, Shortener};
pub use services::theme_store::{JsonFileStorage, MemoryStorage, PreferenceStorage, ThemeStore};
