// Main library module for the Roadkill server - first-run installation and
// site configuration service for the wiki.

// Module declarations
pub mod api; // HTTP handlers and routes
pub mod middleware; // HTTP middleware
pub mod model; // Data models and application state
pub mod service; // Business services
pub mod startup; // Application startup utilities

// Re-export common types from roadkill-common to keep call sites short
pub use roadkill_common::RoadkillError;
