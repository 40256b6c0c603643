//! Payroll strategies.
//!
//! A payroll strategy turns an employee's base pay into the base component
//! of their salary. There is one strategy per staff category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Level};

/// Returns the base pay multiplier for a developer level.
///
/// junior 1.0, middle 1.5, senior 2.0.
pub fn level_multiplier(level: Level) -> Decimal {
    match level {
        Level::Junior => Decimal::new(10, 1),
        Level::Middle => Decimal::new(15, 1),
        Level::Senior => Decimal::new(20, 1),
    }
}

/// Returns the commission rate applied when none is given (10%).
pub fn default_commission_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Category-specific inputs shared by strategies and bonus policies.
///
/// Each strategy reads only the fields relevant to it and ignores the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayParams {
    /// Developer level, used by the developer strategy and level-based bonus.
    pub level: Level,
    /// Manager fixed bonus added on top of base pay.
    pub fixed_bonus: Decimal,
    /// Salesperson commission rate.
    pub commission_rate: Decimal,
    /// Salesperson accumulated sales volume.
    pub sales_volume: Decimal,
}

impl Default for PayParams {
    fn default() -> Self {
        Self {
            level: Level::Junior,
            fixed_bonus: Decimal::ZERO,
            commission_rate: default_commission_rate(),
            sales_volume: Decimal::ZERO,
        }
    }
}

/// The result of applying a payroll strategy, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct StrategyResult {
    /// The base component of the salary.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The payroll strategy for a staff category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStrategy {
    /// `base × level_multiplier(level)`.
    Developer,
    /// `base + fixed_bonus`.
    Manager,
    /// `base + sales_volume × commission_rate`.
    Sales,
}

impl PayrollStrategy {
    /// Computes the base component of a salary.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] when the result does not fit
    /// in a `Decimal`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::calculation::{PayParams, PayrollStrategy};
    /// use payroll_engine::models::Level;
    /// use rust_decimal::Decimal;
    ///
    /// let params = PayParams { level: Level::Senior, ..PayParams::default() };
    /// let amount = PayrollStrategy::Developer.compute(Decimal::new(5000, 0), &params)?;
    /// assert_eq!(amount, Decimal::new(10000, 0));
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn compute(&self, base: Decimal, params: &PayParams) -> EngineResult<Decimal> {
        let amount = match self {
            PayrollStrategy::Developer => base.checked_mul(level_multiplier(params.level)),
            PayrollStrategy::Manager => base.checked_add(params.fixed_bonus),
            PayrollStrategy::Sales => params
                .sales_volume
                .checked_mul(params.commission_rate)
                .and_then(|commission| base.checked_add(commission)),
        };
        amount.ok_or_else(|| {
            EngineError::calculation(format!(
                "{} overflowed for base pay {}",
                self.rule_id(),
                base
            ))
        })
    }

    /// Computes the base component of a salary and records how it was derived.
    ///
    /// The audit step carries the strategy's inputs as JSON (base pay plus the
    /// level, fixed bonus or sales figures it read), the resulting amount, and
    /// a one-line human-readable derivation.
    ///
    /// # Arguments
    ///
    /// * `base` - The employee's validated base pay
    /// * `params` - Category-specific inputs; fields the strategy does not use are ignored
    /// * `step_number` - The step number for audit trail sequencing
    ///
    /// # Returns
    ///
    /// Returns a `StrategyResult` containing the amount and an audit step.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] when the amount overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::calculation::{PayParams, PayrollStrategy};
    /// use rust_decimal::Decimal;
    ///
    /// let params = PayParams { fixed_bonus: Decimal::new(2000, 0), ..PayParams::default() };
    /// let result = PayrollStrategy::Manager.compute_with_audit(Decimal::new(8000, 0), &params, 1)?;
    ///
    /// assert_eq!(result.amount, Decimal::new(10000, 0));
    /// assert_eq!(result.audit_step.rule_id, "manager_payroll");
    /// assert_eq!(result.audit_step.reasoning, "$8000 + $2000 fixed bonus = $10000");
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn compute_with_audit(
        &self,
        base: Decimal,
        params: &PayParams,
        step_number: u32,
    ) -> EngineResult<StrategyResult> {
        let amount = self.compute(base, params)?;

        let (input, reasoning) = match self {
            PayrollStrategy::Developer => {
                let multiplier = level_multiplier(params.level);
                (
                    serde_json::json!({
                        "base_pay": base.to_string(),
                        "level": params.level.as_str(),
                        "multiplier": multiplier.normalize().to_string()
                    }),
                    format!(
                        "${} x {} ({}) = ${}",
                        base.normalize(),
                        multiplier.normalize(),
                        params.level,
                        amount.normalize()
                    ),
                )
            }
            PayrollStrategy::Manager => (
                serde_json::json!({
                    "base_pay": base.to_string(),
                    "fixed_bonus": params.fixed_bonus.to_string()
                }),
                format!(
                    "${} + ${} fixed bonus = ${}",
                    base.normalize(),
                    params.fixed_bonus.normalize(),
                    amount.normalize()
                ),
            ),
            PayrollStrategy::Sales => (
                serde_json::json!({
                    "base_pay": base.to_string(),
                    "sales_volume": params.sales_volume.to_string(),
                    "commission_rate": params.commission_rate.to_string()
                }),
                format!(
                    "${} + ${} sales x {} commission = ${}",
                    base.normalize(),
                    params.sales_volume.normalize(),
                    params.commission_rate.normalize(),
                    amount.normalize()
                ),
            ),
        };

        let audit_step = AuditStep {
            step_number,
            rule_id: self.rule_id().to_string(),
            rule_name: self.rule_name().to_string(),
            input,
            output: serde_json::json!({ "amount": amount.normalize().to_string() }),
            reasoning,
        };

        Ok(StrategyResult { amount, audit_step })
    }

    /// Returns the audit rule id for this strategy.
    pub fn rule_id(&self) -> &'static str {
        match self {
            PayrollStrategy::Developer => "developer_payroll",
            PayrollStrategy::Manager => "manager_payroll",
            PayrollStrategy::Sales => "sales_payroll",
        }
    }

    fn rule_name(&self) -> &'static str {
        match self {
            PayrollStrategy::Developer => "Developer Payroll",
            PayrollStrategy::Manager => "Manager Payroll",
            PayrollStrategy::Sales => "Sales Payroll",
        }
    }
}
