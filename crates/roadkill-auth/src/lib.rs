//! Roadkill Auth - User accounts and password handling
//!
//! This crate provides the user service functions the install workflow and
//! the web layer use: bcrypt password hashing and verification, bootstrap
//! admin creation, and account lookups. Persistence is reached through the
//! traits in `roadkill-persistence`; plaintext passwords never cross that
//! boundary.

pub mod model;
pub mod service;

pub use model::UserInfo;
