//! Roster configuration types.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from roster YAML files and from API request bodies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::default_commission_rate;
use crate::error::EngineResult;
use crate::models::{Level, StaffMember};
use crate::organization::Organization;

/// A roster: an organization title and its staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// The organization title.
    pub organization: String,
    /// Staff entries, saved in this order.
    #[serde(default)]
    pub staff: Vec<StaffConfig>,
}

/// One staff entry of a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffConfig {
    /// Explicit id; 0 or absent lets the store assign one.
    #[serde(default)]
    pub id: u32,
    /// The employee name.
    pub name: String,
    /// The department.
    #[serde(default)]
    pub department: String,
    /// Base pay before strategy and bonus.
    pub base_pay: Decimal,
    /// Category-specific settings, tagged by `kind`.
    #[serde(flatten)]
    pub role: RoleConfig,
}

/// Category-specific settings of a staff entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoleConfig {
    /// A developer.
    Developer {
        /// Level label; unknown labels resolve to junior.
        #[serde(default = "default_level")]
        level: String,
        /// Listed skills.
        #[serde(default)]
        skills: Vec<String>,
    },
    /// A manager.
    Manager {
        /// Amount added to base pay.
        #[serde(default)]
        fixed_bonus: Decimal,
    },
    /// A salesperson.
    SalesPerson {
        /// Commission rate on sales, 0.10 when absent.
        #[serde(default = "default_commission_rate")]
        commission_rate: Decimal,
        /// Sales recorded after the salesperson is added.
        #[serde(default)]
        sales: Vec<Decimal>,
    },
}

fn default_level() -> String {
    Level::Junior.as_str().to_string()
}

impl StaffConfig {
    /// Builds a validated staff member, without recording any sales.
    pub fn to_member(&self) -> EngineResult<StaffMember> {
        let member = match &self.role {
            RoleConfig::Developer { level, skills } => StaffMember::developer(
                &self.name,
                &self.department,
                self.base_pay,
                Level::from_label(level),
                skills.clone(),
            )?,
            RoleConfig::Manager { fixed_bonus } => {
                StaffMember::manager(&self.name, &self.department, self.base_pay, *fixed_bonus)?
            }
            RoleConfig::SalesPerson {
                commission_rate, ..
            } => StaffMember::sales_person(
                &self.name,
                &self.department,
                self.base_pay,
                *commission_rate,
            )?,
        };
        Ok(member.with_id(self.id))
    }

    /// Sales to record once the member is stored.
    pub fn sales(&self) -> &[Decimal] {
        match &self.role {
            RoleConfig::SalesPerson { sales, .. } => sales,
            _ => &[],
        }
    }
}

impl RosterConfig {
    /// The fixed sample roster used by the payroll demo.
    pub fn sample() -> Self {
        Self {
            organization: "InnoTech".to_string(),
            staff: vec![
                StaffConfig {
                    id: 0,
                    name: "Maxim Kuznetsov".to_string(),
                    department: "Engineering".to_string(),
                    base_pay: Decimal::new(5000, 0),
                    role: RoleConfig::Developer {
                        level: Level::Senior.as_str().to_string(),
                        skills: vec!["Rust".to_string(), "Axum".to_string()],
                    },
                },
                StaffConfig {
                    id: 0,
                    name: "Olga Ivanova".to_string(),
                    department: "Management".to_string(),
                    base_pay: Decimal::new(8000, 0),
                    role: RoleConfig::Manager {
                        fixed_bonus: Decimal::new(2000, 0),
                    },
                },
                StaffConfig {
                    id: 0,
                    name: "Sergey Petrov".to_string(),
                    department: "Sales".to_string(),
                    base_pay: Decimal::new(3000, 0),
                    role: RoleConfig::SalesPerson {
                        commission_rate: Decimal::new(15, 2),
                        sales: vec![Decimal::new(5000, 0)],
                    },
                },
            ],
        }
    }

    /// Builds an organization from the roster.
    ///
    /// Every entry is validated and saved in order. Sales are recorded after
    /// the salesperson is stored, against the id the store returned, so an
    /// entry with an explicit `id` that replaces an earlier one starts from
    /// zero accumulated sales.
    ///
    /// # Errors
    ///
    /// Returns the first validation error (empty name, negative base pay or
    /// negative sale), or
    /// [`CalculationError`](crate::error::EngineError::CalculationError) if
    /// accumulating sales overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::config::RosterConfig;
    /// use rust_decimal::Decimal;
    ///
    /// let organization = RosterConfig::sample().build_organization()?;
    ///
    /// assert_eq!(organization.headcount(), 3);
    /// assert_eq!(organization.total_payroll()?, Decimal::new(25550, 0));
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn build_organization(&self) -> EngineResult<Organization> {
        let mut organization = Organization::new(self.organization.clone());
        for entry in &self.staff {
            let id = organization.add_employee(entry.to_member()?);
            for amount in entry.sales() {
                organization.record_sale(id, *amount)?;
            }
        }
        Ok(organization)
    }
}
