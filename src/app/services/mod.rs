//! Services layer - business operations.
//!
//! - Shortening API client
//! - Theme preference persistence

pub mod shortener;
pub mod theme_store;
