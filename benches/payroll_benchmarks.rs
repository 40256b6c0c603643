//! Performance benchmarks for the payroll engine.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::config::RosterLoader;
use payroll_engine::models::{Level, StaffMember};
use payroll_engine::organization::Organization;

/// Builds an organization with `size` employees cycling through every category.
fn create_organization(size: usize) -> Organization {
    let mut org = Organization::new("Bench Corp");
    for i in 0..size {
        let base = Decimal::new(3000 + (i as i64 % 50) * 100, 0);
        let member = match i % 3 {
            0 => StaffMember::developer(
                "Developer",
                "Engineering",
                base,
                Level::Senior,
                vec!["Rust".to_string()],
            ),
            1 => StaffMember::manager("Manager", "Management", base, Decimal::new(2000, 0)),
            _ => StaffMember::sales_person("Seller", "Sales", base, Decimal::new(15, 2)),
        }
        .expect("valid bench member");
        let id = org.add_employee(member);
        if i % 3 == 2 {
            org.record_sale(id, Decimal::new(5000, 0))
                .expect("sale for salesperson");
        }
    }
    org
}

fn bench_full_salary(c: &mut Criterion) {
    let dev = StaffMember::developer(
        "Developer",
        "Engineering",
        Decimal::new(5000, 0),
        Level::Senior,
        vec![],
    )
    .expect("valid developer");

    c.bench_function("full_salary_developer", |b| {
        b.iter(|| black_box(&dev).full_salary())
    });
    c.bench_function("salary_breakdown_developer", |b| {
        b.iter(|| black_box(&dev).salary_breakdown())
    });
}

fn bench_total_payroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_payroll");
    for size in [10usize, 100, 1000] {
        let org = create_organization(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &org, |b, org| {
            b.iter(|| black_box(org).total_payroll())
        });
    }
    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let org = create_organization(1000);
    c.bench_function("report_1000", |b| b.iter(|| black_box(&org).report()));

    let loader = RosterLoader::sample();
    c.bench_function("build_sample_organization", |b| {
        b.iter(|| black_box(&loader).build_organization())
    });
}

criterion_group!(benches, bench_full_salary, bench_total_payroll, bench_report);
criterion_main!(benches);
