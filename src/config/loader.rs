//! Roster loading functionality.
//!
//! This module provides the [`RosterLoader`] type for loading rosters from
//! YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::organization::Organization;

use super::types::RosterConfig;

/// Loads and provides access to a roster.
///
/// # File Format
///
/// ```text
/// organization: InnoTech
/// staff:
///   - kind: developer
///     name: Maxim Kuznetsov
///     department: Engineering
///     base_pay: 5000
///     level: senior
///     skills: [Rust, Axum]
///   - kind: manager
///     name: Olga Ivanova
///     base_pay: 8000
///     fixed_bonus: 2000
///   - kind: sales_person
///     name: Sergey Petrov
///     base_pay: 3000
///     commission_rate: 0.15
///     sales: [5000]
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::RosterLoader;
///
/// let loader = RosterLoader::load("./config/sample_roster.yaml")?;
/// let organization = loader.build_organization()?;
/// println!("{}", organization.report()?);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RosterLoader {
    roster: RosterConfig,
}

impl RosterLoader {
    /// Loads a roster from the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `RosterNotFound` if the file cannot be read and
    /// `RosterParseError` if it is not a valid roster.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::RosterNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content, &path_str)?;
        info!(
            path = %path_str,
            organization = %loader.roster.organization,
            staff = loader.roster.staff.len(),
            "Loaded roster"
        );
        Ok(loader)
    }

    /// Parses a roster from YAML text. `source` names the origin in errors.
    pub fn from_yaml_str(content: &str, source: &str) -> EngineResult<Self> {
        let roster = serde_yaml::from_str(content).map_err(|e| EngineError::RosterParseError {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { roster })
    }

    /// Wraps the built-in sample roster.
    pub fn sample() -> Self {
        Self::from(RosterConfig::sample())
    }

    /// Returns the underlying roster.
    pub fn roster(&self) -> &RosterConfig {
        &self.roster
    }

    /// Builds a fresh organization from the roster.
    pub fn build_organization(&self) -> EngineResult<Organization> {
        self.roster.build_organization()
    }
}

impl From<RosterConfig> for RosterLoader {
    fn from(roster: RosterConfig) -> Self {
        Self { roster }
    }
}
