//! Request types for the payroll API.
//!
//! This module defines the JSON request structure for the `/payroll` endpoint.

use serde::{Deserialize, Serialize};

use crate::config::{RosterConfig, StaffConfig};

/// Request body for the `/payroll` endpoint.
///
/// Staff entries use the same shape as roster files, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The organization title.
    pub organization: String,
    /// The staff to compute payroll for.
    #[serde(default)]
    pub staff: Vec<StaffConfig>,
    /// When true, the response carries a salary breakdown per employee.
    #[serde(default)]
    pub include_breakdown: bool,
}

impl From<PayrollRequest> for RosterConfig {
    fn from(request: PayrollRequest) -> Self {
        RosterConfig {
            organization: request.organization,
            staff: request.staff,
        }
    }
}
