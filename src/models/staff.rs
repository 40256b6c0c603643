//! Staff entities.
//!
//! A [`StaffMember`] couples identity and base pay with the payroll strategy
//! and bonus policy that decide its total. The category-specific data lives
//! in [`StaffKind`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{BonusPolicy, PayParams, PayrollStrategy};
use crate::error::{EngineError, EngineResult};
use crate::validation::{validate_non_empty, validate_non_negative};

use super::{Level, SalaryBreakdown, StaffRecord};

/// The category of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffCategory {
    /// A developer paid by level.
    Developer,
    /// A manager paid base plus a fixed bonus.
    Manager,
    /// A salesperson paid base plus commission.
    SalesPerson,
}

/// Category-specific data of a staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaffKind {
    /// Developer data.
    Developer {
        /// Seniority level.
        level: Level,
        /// Listed skills, informational only.
        skills: Vec<String>,
    },
    /// Manager data.
    Manager {
        /// Amount added to base pay by the manager strategy.
        fixed_bonus: Decimal,
    },
    /// Salesperson data.
    SalesPerson {
        /// Commission rate applied to accumulated sales.
        commission_rate: Decimal,
        /// Sum of every recorded sale.
        accumulated_sales: Decimal,
    },
}

/// A member of staff.
///
/// Instances are built through [`StaffMember::developer`],
/// [`StaffMember::manager`] or [`StaffMember::sales_person`], which validate
/// the name and base pay. The id starts at 0 (unassigned) until the
/// employee store assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffMember {
    id: u32,
    name: String,
    department: String,
    base_pay: Decimal,
    payroll_strategy: PayrollStrategy,
    bonus_policy: Option<BonusPolicy>,
    kind: StaffKind,
}

impl StaffMember {
    fn new(
        name: &str,
        department: &str,
        base_pay: Decimal,
        payroll_strategy: PayrollStrategy,
        bonus_policy: Option<BonusPolicy>,
        kind: StaffKind,
    ) -> EngineResult<Self> {
        Ok(Self {
            id: 0,
            name: validate_non_empty("name", name)?,
            department: department.to_string(),
            base_pay: validate_non_negative("base_pay", base_pay)?,
            payroll_strategy,
            bonus_policy,
            kind,
        })
    }

    /// Creates a developer paid by level with a level-based bonus.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Level, StaffMember};
    /// use rust_decimal::Decimal;
    ///
    /// let dev = StaffMember::developer(
    ///     "Maxim",
    ///     "Engineering",
    ///     Decimal::new(5000, 0),
    ///     Level::Senior,
    ///     vec!["Rust".to_string()],
    /// )
    /// .unwrap();
    /// assert_eq!(dev.full_salary().unwrap(), Decimal::new(11000, 0));
    /// ```
    pub fn developer(
        name: &str,
        department: &str,
        base_pay: Decimal,
        level: Level,
        skills: Vec<String>,
    ) -> EngineResult<Self> {
        Self::new(
            name,
            department,
            base_pay,
            PayrollStrategy::Developer,
            Some(BonusPolicy::LevelBased),
            StaffKind::Developer { level, skills },
        )
    }

    /// Creates a manager paid base plus `fixed_bonus`, with the fixed performance bonus.
    pub fn manager(
        name: &str,
        department: &str,
        base_pay: Decimal,
        fixed_bonus: Decimal,
    ) -> EngineResult<Self> {
        Self::new(
            name,
            department,
            base_pay,
            PayrollStrategy::Manager,
            Some(BonusPolicy::Fixed),
            StaffKind::Manager { fixed_bonus },
        )
    }

    /// Creates a salesperson paid base plus commission on recorded sales.
    ///
    /// Salespeople carry no bonus policy: their total is the strategy output alone.
    pub fn sales_person(
        name: &str,
        department: &str,
        base_pay: Decimal,
        commission_rate: Decimal,
    ) -> EngineResult<Self> {
        Self::new(
            name,
            department,
            base_pay,
            PayrollStrategy::Sales,
            None,
            StaffKind::SalesPerson {
                commission_rate,
                accumulated_sales: Decimal::ZERO,
            },
        )
    }

    /// Sets an explicit id before the first save, making the save an upsert.
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub(crate) fn assign_id(&mut self, id: u32) {
        self.id = id;
    }

    /// The store-assigned id, or 0 if the member has not been saved.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The trimmed name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The department.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// The validated base pay.
    pub fn base_pay(&self) -> Decimal {
        self.base_pay
    }

    /// Category-specific data.
    pub fn kind(&self) -> &StaffKind {
        &self.kind
    }

    /// The staff category.
    pub fn category(&self) -> StaffCategory {
        match self.kind {
            StaffKind::Developer { .. } => StaffCategory::Developer,
            StaffKind::Manager { .. } => StaffCategory::Manager,
            StaffKind::SalesPerson { .. } => StaffCategory::SalesPerson,
        }
    }

    /// The payroll strategy used for the base component.
    pub fn payroll_strategy(&self) -> PayrollStrategy {
        self.payroll_strategy
    }

    /// The bonus policy, if one contributes to the total.
    pub fn bonus_policy(&self) -> Option<BonusPolicy> {
        self.bonus_policy
    }

    /// Accumulated sales for a salesperson, `None` for other categories.
    pub fn accumulated_sales(&self) -> Option<Decimal> {
        match self.kind {
            StaffKind::SalesPerson {
                accumulated_sales, ..
            } => Some(accumulated_sales),
            _ => None,
        }
    }

    /// Builds the parameters the strategy and policy read for this member.
    pub fn pay_params(&self) -> PayParams {
        match &self.kind {
            StaffKind::Developer { level, .. } => PayParams {
                level: *level,
                ..PayParams::default()
            },
            StaffKind::Manager { fixed_bonus } => PayParams {
                fixed_bonus: *fixed_bonus,
                ..PayParams::default()
            },
            StaffKind::SalesPerson {
                commission_rate,
                accumulated_sales,
            } => PayParams {
                commission_rate: *commission_rate,
                sales_volume: *accumulated_sales,
                ..PayParams::default()
            },
        }
    }

    /// Adds a sale to a salesperson's accumulated sales.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative amount,
    /// [`EngineError::CalculationError`] when the running total would overflow,
    /// and [`EngineError::NotASalesPerson`] for any other category. The
    /// accumulated sales are unchanged on error.
    pub fn record_sale(&mut self, amount: Decimal) -> EngineResult<()> {
        let id = self.id;
        match &mut self.kind {
            StaffKind::SalesPerson {
                accumulated_sales, ..
            } => {
                let amount = validate_non_negative("amount", amount)?;
                *accumulated_sales = accumulated_sales.checked_add(amount).ok_or_else(|| {
                    EngineError::calculation(format!(
                        "accumulated sales of employee {} overflowed adding {}",
                        id, amount
                    ))
                })?;
                Ok(())
            }
            _ => Err(EngineError::NotASalesPerson { id }),
        }
    }

    /// Strategy output plus bonus policy output.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] when any term or the sum
    /// overflows.
    pub fn full_salary(&self) -> EngineResult<Decimal> {
        let params = self.pay_params();
        let base = self.payroll_strategy.compute(self.base_pay, &params)?;
        let bonus = match self.bonus_policy {
            Some(policy) => policy.compute_bonus(self.base_pay, &params)?,
            None => Decimal::ZERO,
        };
        self.checked_total(base, bonus)
    }

    /// Computes the salary together with its audit trail.
    ///
    /// Step 1 is always the payroll strategy. Step 2 is the bonus policy and
    /// is absent for members without one, so a salesperson's trail has a
    /// single step and a zero `bonus_amount`.
    ///
    /// # Returns
    ///
    /// Returns a `SalaryBreakdown` whose `total` equals [`StaffMember::full_salary`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] when any term or the sum
    /// overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::StaffMember;
    /// use rust_decimal::Decimal;
    ///
    /// let mgr = StaffMember::manager("Olga", "Management", Decimal::new(8000, 0), Decimal::new(2000, 0))?;
    /// let breakdown = mgr.salary_breakdown()?;
    ///
    /// assert_eq!(breakdown.strategy_amount, Decimal::new(10000, 0));
    /// assert_eq!(breakdown.bonus_amount, Decimal::new(800, 0));
    /// assert_eq!(breakdown.audit_trail[1].rule_id, "fixed_bonus");
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn salary_breakdown(&self) -> EngineResult<SalaryBreakdown> {
        let params = self.pay_params();
        let mut audit_trail = Vec::with_capacity(2);

        let strategy = self
            .payroll_strategy
            .compute_with_audit(self.base_pay, &params, 1)?;
        audit_trail.push(strategy.audit_step);

        let bonus_amount = match self.bonus_policy {
            Some(policy) => {
                let bonus = policy.compute_bonus_with_audit(self.base_pay, &params, 2)?;
                audit_trail.push(bonus.audit_step);
                bonus.bonus
            }
            None => Decimal::ZERO,
        };

        Ok(SalaryBreakdown {
            base_pay: self.base_pay,
            strategy_amount: strategy.amount,
            bonus_amount,
            total: self.checked_total(strategy.amount, bonus_amount)?,
            audit_trail,
        })
    }

    fn checked_total(&self, base: Decimal, bonus: Decimal) -> EngineResult<Decimal> {
        base.checked_add(bonus).ok_or_else(|| {
            EngineError::calculation(format!("salary of employee {} overflowed", self.id))
        })
    }

    /// One-line summary, e.g. `Olga (ID: 2) - $10800.00`.
    pub fn info(&self) -> EngineResult<String> {
        Ok(format!(
            "{} (ID: {}) - ${:.2}",
            self.name,
            self.id,
            self.full_salary()?.round_dp(2)
        ))
    }

    /// The serializable view used in reports.
    pub fn record(&self) -> EngineResult<StaffRecord> {
        Ok(StaffRecord {
            id: self.id,
            name: self.name.clone(),
            department: self.department.clone(),
            category: self.category(),
            base_pay: self.base_pay,
            total: self.full_salary()?,
        })
    }
}
