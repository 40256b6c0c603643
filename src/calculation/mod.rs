//! Calculation logic for the payroll engine.
//!
//! This module contains the payroll strategies that compute the base
//! component of a salary for each staff category, and the bonus policies
//! that compute the supplemental component.

mod bonus_policy;
mod payroll_strategy;

pub use bonus_policy::{BonusPolicy, BonusResult, fixed_bonus_rate, level_bonus_rate};
pub use payroll_strategy::{
    PayParams, PayrollStrategy, StrategyResult, default_commission_rate, level_multiplier,
};
