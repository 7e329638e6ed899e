//! Roadkill Common - Shared types and utilities
//!
//! This crate provides the foundational types used across all Roadkill components:
//! - Error types (`RoadkillError`)
//! - Connection-string redaction and validation helpers
//! - Common constants

pub mod error;
pub mod utils;

// Re-exports for convenience
pub use error::RoadkillError;
pub use utils::{is_valid_email, redact_connection_string};

/// Fixed identifier of the singleton site-settings document.
///
/// Exactly one settings record exists per installation and it is always
/// stored under this key.
pub const SITE_SETTINGS_ID: &str = "b960e8e5-529f-4f7c-aee4-28eb23e13dbd";

/// URL path prefix of the install surface.
pub const INSTALL_PATH: &str = "/install";

/// Header carrying the authenticated user name set by upstream auth.
pub const FORWARDED_USER_HEADER: &str = "x-roadkill-user";
