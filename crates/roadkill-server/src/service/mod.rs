//! Business services

pub mod install;
pub mod settings;

pub use install::{InstallOutcome, InstallService};
