//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Environment configuration
//! - System clipboard
//! - Logging setup
//! - Error types

pub mod clipboard;
pub mod config;
pub mod error;
pub mod logging;
