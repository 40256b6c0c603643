//! Developer seniority levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// The seniority level of a developer.
///
/// Levels drive both the payroll multiplier and the level-based bonus rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Entry level. Also the fallback for unrecognized labels.
    #[default]
    Junior,
    /// Mid level.
    Middle,
    /// Senior level.
    Senior,
}

impl Level {
    /// Returns the lowercase label used in rosters and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Junior => "junior",
            Level::Middle => "middle",
            Level::Senior => "senior",
        }
    }

    /// Resolves a free-form label, falling back to [`Level::Junior`].
    ///
    /// Matching ignores case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Level;
    ///
    /// assert_eq!(Level::from_label("Senior"), Level::Senior);
    /// assert_eq!(Level::from_label("principal"), Level::Junior);
    /// ```
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            warn!(label = %label, "Unrecognized level, falling back to junior");
            Level::Junior
        })
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "junior" => Ok(Level::Junior),
            "middle" => Ok(Level::Middle),
            "senior" => Ok(Level::Senior),
            other => Err(format!("unknown level '{}'", other)),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
