//! Domain layer - core data structures and types.
//!
//! - Application settings (the persisted theme preference)
//! - Message types for the event system

pub mod messages;
pub mod settings;

pub use messages::Message;
pub use settings::{AppSettings, ThemeMode};
