//! Property tests for temperature conversions and payroll invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::error::{EngineError, EngineResult};
use payroll_engine::models::{Level, StaffMember};
use payroll_engine::organization::Organization;
use payroll_engine::store::{EmployeeStore, MemoryStore};
use payroll_engine::temperature::{c_to_f, c_to_k, f_to_c, k_to_c};
use payroll_engine::validation::validate_non_negative;

fn tolerance(x: f64) -> f64 {
    1e-9 * x.abs().max(1.0)
}

fn level() -> impl Strategy<Value = Level> {
    prop_oneof![Just(Level::Junior), Just(Level::Middle), Just(Level::Senior)]
}

/// Non-negative money with two decimal places, up to 1,000,000.00.
fn money() -> impl Strategy<Value = Decimal> {
    (0i64..=100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Any non-negative `Decimal`, from zero up to `Decimal::MAX`, at any scale.
fn any_non_negative_decimal() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::MAX),
        Just(Decimal::ZERO),
        (any::<u32>(), any::<u32>(), any::<u32>(), 0u32..=28)
            .prop_map(|(lo, mid, hi, scale)| Decimal::from_parts(lo, mid, hi, false, scale)),
    ]
}

fn ok_or_calculation_error<T: std::fmt::Debug>(result: &EngineResult<T>) -> bool {
    matches!(result, Ok(_) | Err(EngineError::CalculationError { .. }))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Going through Kelvin and back does not change the Fahrenheit reading.
    #[test]
    fn property_kelvin_round_trip(x in -1.0e6f64..1.0e6) {
        let via_kelvin = c_to_f(c_to_k(x) - 273.15);
        prop_assert!((via_kelvin - c_to_f(x)).abs() <= tolerance(c_to_f(x)));
        prop_assert!((k_to_c(c_to_k(x)) - x).abs() <= tolerance(x));
    }

    /// PROPERTY: Fahrenheit to Celsius inverts Celsius to Fahrenheit.
    #[test]
    fn property_fahrenheit_inverse(x in -1.0e6f64..1.0e6) {
        prop_assert!((f_to_c(c_to_f(x)) - x).abs() <= tolerance(x));
    }

    /// PROPERTY: Non-negative values pass validation unchanged, negative ones fail.
    #[test]
    fn property_non_negative_validation(cents in -1_000_000i64..1_000_000) {
        let value = Decimal::new(cents, 2);
        let result = validate_non_negative("value", value);
        if cents < 0 {
            prop_assert!(result.is_err());
        } else {
            prop_assert_eq!(result.unwrap(), value);
        }
    }

    /// PROPERTY: A developer's salary is never below base pay.
    #[test]
    fn property_developer_salary_at_least_base(base in money(), level in level()) {
        let dev = StaffMember::developer("Dev", "Engineering", base, level, vec![]).unwrap();
        let salary = dev.full_salary().unwrap();
        prop_assert!(salary >= base);
        prop_assert_eq!(dev.salary_breakdown().unwrap().total, salary);
    }

    /// PROPERTY: A salesperson's salary is base plus commission, with no bonus term.
    #[test]
    fn property_sales_salary_is_strategy_only(
        base in money(),
        sales in proptest::collection::vec(money(), 0..8),
        rate_bp in 0i64..=10_000,
    ) {
        let rate = Decimal::new(rate_bp, 4);
        let mut person = StaffMember::sales_person("Seller", "Sales", base, rate).unwrap();
        for amount in &sales {
            person.record_sale(*amount).unwrap();
        }

        let volume: Decimal = sales.iter().copied().sum();
        prop_assert_eq!(person.full_salary().unwrap(), base + volume * rate);
    }

    /// PROPERTY: Saving unassigned members yields ids 1..=n in insertion order.
    #[test]
    fn property_store_assigns_sequential_ids(count in 0usize..32) {
        let mut store = MemoryStore::new();
        for i in 0..count {
            let member = StaffMember::manager(
                &format!("Manager {}", i),
                "Management",
                Decimal::ONE,
                Decimal::ZERO,
            )
            .unwrap();
            prop_assert_eq!(store.save(member) as usize, i + 1);
        }

        let ids: Vec<u32> = store.list_all().iter().map(|m| m.id()).collect();
        let expected: Vec<u32> = (1..=count as u32).collect();
        prop_assert_eq!(ids, expected);
    }

    /// PROPERTY: Total payroll equals the sum of salaries; the average times headcount recovers it.
    #[test]
    fn property_total_payroll_is_sum(bases in proptest::collection::vec(money(), 0..16)) {
        let mut org = Organization::new("Prop Corp");
        for base in &bases {
            org.add_employee(StaffMember::manager("M", "Management", *base, Decimal::ZERO).unwrap());
        }

        let expected: Decimal = org.employees().iter().map(|m| m.full_salary().unwrap()).sum();
        prop_assert_eq!(org.total_payroll().unwrap(), expected);
        prop_assert_eq!(org.headcount(), bases.len());
        if bases.is_empty() {
            prop_assert_eq!(org.average_salary().unwrap(), Decimal::ZERO);
        } else {
            let recovered = org.average_salary().unwrap() * Decimal::from(bases.len() as u64);
            prop_assert!((recovered - expected).abs() < Decimal::new(1, 10));
        }
    }

    /// PROPERTY: Salaries and sales anywhere in the non-negative Decimal range
    /// either compute or report a calculation error; nothing unwinds.
    #[test]
    fn property_full_range_never_panics(
        base in any_non_negative_decimal(),
        sales in proptest::collection::vec(any_non_negative_decimal(), 0..4),
        rate in any_non_negative_decimal(),
        level in level(),
    ) {
        let outcome = std::panic::catch_unwind(|| {
            let dev = StaffMember::developer("Dev", "Engineering", base, level, vec![]).unwrap();
            let mgr = StaffMember::manager("Mgr", "Management", base, base).unwrap();
            let mut org = Organization::new("Range Corp");
            org.add_employee(dev.clone());
            org.add_employee(mgr);
            let seller = org.add_employee(
                StaffMember::sales_person("Seller", "Sales", base, rate).unwrap(),
            );

            let mut all_ok = ok_or_calculation_error(&dev.full_salary())
                && ok_or_calculation_error(&dev.salary_breakdown());
            for amount in &sales {
                let before = org.employee(seller).unwrap().accumulated_sales();
                let recorded = org.record_sale(seller, *amount);
                if recorded.is_err() {
                    all_ok &= org.employee(seller).unwrap().accumulated_sales() == before;
                }
                all_ok &= ok_or_calculation_error(&recorded);
            }
            all_ok
                && ok_or_calculation_error(&org.total_payroll())
                && ok_or_calculation_error(&org.average_salary())
                && ok_or_calculation_error(&org.report())
        });

        prop_assert!(matches!(outcome, Ok(true)));
    }
}
