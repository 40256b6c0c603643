//! Payroll report models.
//!
//! A [`PayrollReport`] is a point-in-time snapshot of an organization: one
//! [`StaffRecord`] per employee plus the aggregate [`PayrollStatistics`].

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::StaffCategory;

/// The serializable view of one staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    /// The store-assigned id.
    pub id: u32,
    /// The employee name.
    pub name: String,
    /// The department.
    pub department: String,
    /// The staff category.
    pub category: StaffCategory,
    /// Base pay before strategy and bonus.
    pub base_pay: Decimal,
    /// The full salary.
    pub total: Decimal,
}

/// Aggregate figures over an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollStatistics {
    /// Number of employees.
    pub headcount: usize,
    /// Sum of every full salary.
    pub total_payroll: Decimal,
    /// `total_payroll / headcount`, or zero for an empty organization.
    pub average_salary: Decimal,
}

/// A snapshot of an organization's payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// The organization title.
    pub organization: String,
    /// Employees in insertion order.
    pub employees: Vec<StaffRecord>,
    /// Aggregate figures.
    pub statistics: PayrollStatistics,
}

impl fmt::Display for StaffRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ID: {}) - ${:.2}",
            self.name,
            self.id,
            self.total.round_dp(2)
        )
    }
}

impl fmt::Display for PayrollReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Employees of {}:", self.organization)?;
        for record in &self.employees {
            writeln!(f, "- {}", record)?;
        }
        writeln!(f)?;
        writeln!(f, "Statistics:")?;
        writeln!(f, "Headcount: {}", self.statistics.headcount)?;
        writeln!(f, "Total payroll: ${:.2}", self.statistics.total_payroll.round_dp(2))?;
        write!(f, "Average salary: ${:.2}", self.statistics.average_salary.round_dp(2))
    }
}
