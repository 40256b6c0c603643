//! Salary breakdown models.
//!
//! A [`SalaryBreakdown`] decomposes one employee's total into the payroll
//! strategy amount and the bonus amount, together with an ordered
//! [`AuditStep`] trail explaining each figure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied (e.g. "developer_payroll").
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The audited decomposition of an employee's full salary.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = SalaryBreakdown {
///     base_pay: Decimal::new(5000, 0),
///     strategy_amount: Decimal::new(10000, 0),
///     bonus_amount: Decimal::new(1000, 0),
///     total: Decimal::new(11000, 0),
///     audit_trail: vec![],
/// };
/// assert_eq!(breakdown.strategy_amount + breakdown.bonus_amount, breakdown.total);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The validated base pay the computation started from.
    pub base_pay: Decimal,
    /// The output of the payroll strategy.
    pub strategy_amount: Decimal,
    /// The output of the bonus policy, zero when no policy applies.
    pub bonus_amount: Decimal,
    /// `strategy_amount + bonus_amount`.
    pub total: Decimal,
    /// The steps that produced the figures above, in order.
    pub audit_trail: Vec<AuditStep>,
}
