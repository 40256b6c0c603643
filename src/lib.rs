//! Staff payroll engine.
//!
//! This crate computes salaries for developers, managers and salespeople
//! through pluggable payroll strategies and bonus policies, stores staff in
//! an in-memory employee store, and aggregates payroll figures per
//! organization. A small temperature conversion module ships alongside.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod organization;
pub mod store;
pub mod temperature;
pub mod validation;
