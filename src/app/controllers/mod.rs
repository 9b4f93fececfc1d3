//! Controllers layer - orchestration and coordination.
//!
//! The form controller coordinates the shortening service, the clipboard
//! and user notifications.

pub mod form;
