//! The organization aggregate.
//!
//! An [`Organization`] owns an [`EmployeeStore`] and answers the headcount
//! and payroll queries over it.

use rust_decimal::Decimal;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollReport, PayrollStatistics, StaffMember};
use crate::store::{EmployeeStore, MemoryStore};

/// An organization and its staff.
///
/// # Example
///
/// ```
/// use payroll_engine::models::StaffMember;
/// use payroll_engine::organization::Organization;
/// use rust_decimal::Decimal;
///
/// let mut org = Organization::new("InnoTech");
/// let mgr = StaffMember::manager("Olga", "Management", Decimal::new(8000, 0), Decimal::new(2000, 0))?;
/// org.add_employee(mgr);
///
/// assert_eq!(org.headcount(), 1);
/// assert_eq!(org.total_payroll()?, Decimal::new(10800, 0));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Organization<S: EmployeeStore = MemoryStore> {
    title: String,
    store: S,
}

impl Organization<MemoryStore> {
    /// Creates an organization backed by a fresh [`MemoryStore`].
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_store(title, MemoryStore::new())
    }
}

impl<S: EmployeeStore> Organization<S> {
    /// Creates an organization backed by `store`.
    pub fn with_store(title: impl Into<String>, store: S) -> Self {
        Self {
            title: title.into(),
            store,
        }
    }

    /// The organization title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Saves `member` to the store and returns its id.
    pub fn add_employee(&mut self, member: StaffMember) -> u32 {
        self.store.save(member)
    }

    /// Every employee in insertion order.
    pub fn employees(&self) -> Vec<&StaffMember> {
        self.store.list_all()
    }

    /// Looks up an employee by id.
    pub fn employee(&self, id: u32) -> Option<&StaffMember> {
        self.store.get(id)
    }

    /// Records a sale for the salesperson stored under `id`.
    pub fn record_sale(&mut self, id: u32, amount: Decimal) -> EngineResult<()> {
        let member = self
            .store
            .get_mut(id)
            .ok_or(EngineError::EmployeeNotFound { id })?;
        member.record_sale(amount)?;
        info!(id, amount = %amount, "Recorded sale");
        Ok(())
    }

    /// Sum of every employee's full salary.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] when a salary or the running
    /// sum overflows.
    pub fn total_payroll(&self) -> EngineResult<Decimal> {
        self.store
            .list_all()
            .iter()
            .try_fold(Decimal::ZERO, |total, member| {
                total.checked_add(member.full_salary()?).ok_or_else(|| {
                    EngineError::calculation(format!(
                        "total payroll of {} overflowed",
                        self.title
                    ))
                })
            })
    }

    /// Number of employees.
    pub fn headcount(&self) -> usize {
        self.store.len()
    }

    /// Mean full salary, or zero when there are no employees.
    pub fn average_salary(&self) -> EngineResult<Decimal> {
        match self.headcount() {
            0 => Ok(Decimal::ZERO),
            n => {
                let total = self.total_payroll()?;
                total.checked_div(Decimal::from(n as u64)).ok_or_else(|| {
                    EngineError::calculation(format!(
                        "average salary of {} could not be computed",
                        self.title
                    ))
                })
            }
        }
    }

    /// Aggregate figures for the organization.
    pub fn statistics(&self) -> EngineResult<PayrollStatistics> {
        Ok(PayrollStatistics {
            headcount: self.headcount(),
            total_payroll: self.total_payroll()?,
            average_salary: self.average_salary()?,
        })
    }

    /// Snapshot of every employee record plus the statistics.
    pub fn report(&self) -> EngineResult<PayrollReport> {
        let employees = self
            .store
            .list_all()
            .iter()
            .map(|member| member.record())
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(PayrollReport {
            organization: self.title.clone(),
            employees,
            statistics: self.statistics()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_organization() -> (Organization, u32) {
        let mut org = Organization::new("InnoTech");
        org.add_employee(
            StaffMember::developer(
                "Maxim Kuznetsov",
                "Engineering",
                dec("5000"),
                Level::Senior,
                vec!["Rust".to_string()],
            )
            .unwrap(),
        );
        org.add_employee(
            StaffMember::manager("Olga Ivanova", "Management", dec("8000"), dec("2000")).unwrap(),
        );
        let sales_id = org.add_employee(
            StaffMember::sales_person("Sergey Petrov", "Sales", dec("3000"), dec("0.15")).unwrap(),
        );
        (org, sales_id)
    }

    #[test]
    fn test_empty_organization_has_zero_statistics() {
        let org = Organization::new("Empty");

        assert_eq!(org.headcount(), 0);
        assert_eq!(org.total_payroll().unwrap(), Decimal::ZERO);
        assert_eq!(org.average_salary().unwrap(), Decimal::ZERO);
        assert!(org.employees().is_empty());
    }

    #[test]
    fn test_add_employee_assigns_ids() {
        let (org, sales_id) = create_sample_organization();
        let ids: Vec<u32> = org.employees().iter().map(|m| m.id()).collect();

        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(sales_id, 3);
    }

    #[test]
    fn test_sale_recorded_after_adding_counts_towards_payroll() {
        let (mut org, sales_id) = create_sample_organization();
        org.record_sale(sales_id, dec("5000")).unwrap();

        assert_eq!(org.employee(sales_id).unwrap().full_salary().unwrap(), dec("3750"));
        assert_eq!(org.total_payroll().unwrap(), dec("25550"));
    }

    #[test]
    fn test_average_salary() {
        let (mut org, sales_id) = create_sample_organization();
        org.record_sale(sales_id, dec("5000")).unwrap();

        assert_eq!(org.headcount(), 3);
        assert_eq!(org.average_salary().unwrap().round_dp(2), dec("8516.67"));
    }

    #[test]
    fn test_record_sale_for_unknown_id_fails() {
        let (mut org, _) = create_sample_organization();
        assert_eq!(
            org.record_sale(99, dec("1")),
            Err(EngineError::EmployeeNotFound { id: 99 })
        );
    }

    #[test]
    fn test_record_sale_for_manager_fails() {
        let (mut org, _) = create_sample_organization();
        assert_eq!(
            org.record_sale(2, dec("1")),
            Err(EngineError::NotASalesPerson { id: 2 })
        );
    }

    #[test]
    fn test_report_matches_queries() {
        let (mut org, sales_id) = create_sample_organization();
        org.record_sale(sales_id, dec("5000")).unwrap();
        let report = org.report().unwrap();

        assert_eq!(report.organization, "InnoTech");
        assert_eq!(report.employees.len(), 3);
        assert_eq!(report.statistics.total_payroll, org.total_payroll().unwrap());
        assert_eq!(report.statistics.average_salary, org.average_salary().unwrap());
        assert_eq!(report.employees[2].total, dec("3750"));
    }

    #[test]
    fn test_total_payroll_overflow_is_reported() {
        let mut org = Organization::new("Huge");
        org.add_employee(StaffMember::manager("A", "Management", Decimal::MAX, dec("0")).unwrap());
        org.add_employee(StaffMember::manager("B", "Management", Decimal::MAX, dec("0")).unwrap());

        assert!(matches!(
            org.total_payroll(),
            Err(EngineError::CalculationError { .. })
        ));
        assert!(org.average_salary().is_err());
        assert!(org.report().is_err());
    }

    #[test]
    fn test_second_max_sale_through_organization_is_rejected() {
        let (mut org, sales_id) = create_sample_organization();
        org.record_sale(sales_id, Decimal::MAX).unwrap();

        assert!(matches!(
            org.record_sale(sales_id, Decimal::MAX),
            Err(EngineError::CalculationError { .. })
        ));
        assert_eq!(
            org.employee(sales_id).unwrap().accumulated_sales(),
            Some(Decimal::MAX)
        );
    }
}
