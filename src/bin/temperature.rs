//! Interactive temperature converter.
//!
//! Usage: temperature
//!
//! Reads a reading and a unit (C, F or K) from standard input and prints the
//! conversions to the two other units.

use std::io;

use anyhow::Result;

use payroll_engine::temperature::run_console;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_console(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
