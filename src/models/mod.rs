//! Core data models for the payroll engine.
//!
//! This module contains the staff entities and the report and breakdown
//! types produced from them.

mod level;
mod report;
mod salary;
mod staff;

pub use level::Level;
pub use report::{PayrollReport, PayrollStatistics, StaffRecord};
pub use salary::{AuditStep, SalaryBreakdown};
pub use staff::{StaffCategory, StaffKind, StaffMember};
