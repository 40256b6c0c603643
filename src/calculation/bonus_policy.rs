//! Bonus policies.
//!
//! A bonus policy computes the supplemental part of a salary from base pay.
//! Policies are independent of the payroll strategy they are paired with.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayParams;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Level};

/// Returns the flat performance bonus rate (10%).
pub fn fixed_bonus_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Returns the bonus rate for a developer level.
///
/// junior 5%, middle 10%, senior 20%.
pub fn level_bonus_rate(level: Level) -> Decimal {
    match level {
        Level::Junior => Decimal::new(5, 2),
        Level::Middle => Decimal::new(10, 2),
        Level::Senior => Decimal::new(20, 2),
    }
}

/// The result of applying a bonus policy, including the bonus and audit step.
#[derive(Debug, Clone)]
pub struct BonusResult {
    /// The computed bonus.
    pub bonus: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// A bonus policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusPolicy {
    /// `base × 0.10` regardless of category.
    Fixed,
    /// `base × level_bonus_rate(level)`.
    LevelBased,
}

impl BonusPolicy {
    /// Computes the bonus for `base`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] when the bonus does not fit
    /// in a `Decimal`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::calculation::{BonusPolicy, PayParams};
    /// use rust_decimal::Decimal;
    ///
    /// let bonus = BonusPolicy::Fixed.compute_bonus(Decimal::new(8000, 0), &PayParams::default())?;
    /// assert_eq!(bonus, Decimal::new(800, 0));
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn compute_bonus(&self, base: Decimal, params: &PayParams) -> EngineResult<Decimal> {
        base.checked_mul(self.rate(params)).ok_or_else(|| {
            EngineError::calculation(format!(
                "{} overflowed for base pay {}",
                self.rule_id(),
                base
            ))
        })
    }

    /// Computes the bonus and records how it was derived.
    ///
    /// The fixed policy ignores `params`; the level-based policy reads only
    /// `params.level`. The audit output records both the bonus and the rate
    /// that produced it.
    ///
    /// # Arguments
    ///
    /// * `base` - The employee's validated base pay
    /// * `params` - Category-specific inputs
    /// * `step_number` - The step number for audit trail sequencing
    ///
    /// # Returns
    ///
    /// Returns a `BonusResult` containing the bonus and an audit step.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] when the bonus overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::calculation::{BonusPolicy, PayParams};
    /// use payroll_engine::models::Level;
    /// use rust_decimal::Decimal;
    ///
    /// let params = PayParams { level: Level::Senior, ..PayParams::default() };
    /// let result = BonusPolicy::LevelBased.compute_bonus_with_audit(Decimal::new(5000, 0), &params, 2)?;
    ///
    /// assert_eq!(result.bonus, Decimal::new(1000, 0));
    /// assert_eq!(result.audit_step.reasoning, "$5000 x 0.2 = $1000");
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn compute_bonus_with_audit(
        &self,
        base: Decimal,
        params: &PayParams,
        step_number: u32,
    ) -> EngineResult<BonusResult> {
        let rate = self.rate(params);
        let bonus = self.compute_bonus(base, params)?;

        let input = match self {
            BonusPolicy::Fixed => serde_json::json!({
                "base_pay": base.to_string()
            }),
            BonusPolicy::LevelBased => serde_json::json!({
                "base_pay": base.to_string(),
                "level": params.level.as_str()
            }),
        };

        let audit_step = AuditStep {
            step_number,
            rule_id: self.rule_id().to_string(),
            rule_name: self.rule_name().to_string(),
            input,
            output: serde_json::json!({
                "bonus": bonus.normalize().to_string(),
                "rate": rate.normalize().to_string()
            }),
            reasoning: format!(
                "${} x {} = ${}",
                base.normalize(),
                rate.normalize(),
                bonus.normalize()
            ),
        };

        Ok(BonusResult { bonus, audit_step })
    }

    /// Returns the audit rule id for this policy.
    pub fn rule_id(&self) -> &'static str {
        match self {
            BonusPolicy::Fixed => "fixed_bonus",
            BonusPolicy::LevelBased => "level_based_bonus",
        }
    }

    fn rule_name(&self) -> &'static str {
        match self {
            BonusPolicy::Fixed => "Fixed Performance Bonus",
            BonusPolicy::LevelBased => "Level-Based Bonus",
        }
    }

    fn rate(&self, params: &PayParams) -> Decimal {
        match self {
            BonusPolicy::Fixed => fixed_bonus_rate(),
            BonusPolicy::LevelBased => level_bonus_rate(params.level),
        }
    }
}
