//! Roster configuration for the payroll engine.
//!
//! This module loads an organization's staff from YAML roster files. The same
//! types describe the staff submitted to the HTTP API.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::RosterLoader;
//!
//! let loader = RosterLoader::load("./config/sample_roster.yaml").unwrap();
//! println!("Loaded roster: {}", loader.roster().organization);
//! ```

mod loader;
mod types;

pub use loader::RosterLoader;
pub use types::{RoleConfig, RosterConfig, StaffConfig};
