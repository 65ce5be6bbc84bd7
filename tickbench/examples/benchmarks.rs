//! Tickbench Example Benchmarks
//!
//! Demonstrates the staged spec builder and serves as a template for
//! assembling your own suite.
//!
//! Run with:
//!   cargo run --release --example benchmarks
//!   cargo run --release --example benchmarks -- json
//!   RUST_LOG=tickbench=trace cargo run --release --example benchmarks

use std::hint::black_box;

use tickbench::prelude::*;
use tickbench::{OutputFormat, build_report, calibrate_timer_overhead, generate_json_report};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tickbench=debug".into()),
        )
        .init();

    let format: OutputFormat = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "text".to_string())
        .parse()
        .map_err(anyhow::Error::msg)?;

    // ========================================================================
    // Allocation-shaped subjects
    // ========================================================================

    let suite = Suite::with_subject(
        Spec::named("vec_push")?
            .with_warmup_cycles(100_000)
            .with_iterations(1_000_000)
            .with_action(|| {
                let mut values = Vec::new();
                values.push(1);
                black_box(values);
                Ok(())
            }),
    )
    .add_subject(
        Spec::named("error_construction")?
            .with_warmup_cycles(100_000)
            .with_iterations(1_000_000)
            .with_action(|| {
                let err: std::io::Error = std::io::Error::other("kek");
                black_box(err);
                Ok(())
            }),
    )?
    // ========================================================================
    // Subject with per-iteration cleanup
    // ========================================================================
    .add_subject({
        let buffer = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let buffer_in_cleanup = buffer.clone();
        Spec::named("buffer_fill")?
            .with_warmup_cycles(10_000)
            .with_iterations(100_000)
            .with_action(move || {
                buffer.borrow_mut().extend(0..64u64);
                Ok(())
            })
            // Runs after every measured iteration, outside the timed window.
            .with_cleanup(move || {
                buffer_in_cleanup.borrow_mut().clear();
                Ok(())
            })
    })?;

    match format {
        OutputFormat::Text => {
            tickbench::run_and_print(suite)?;
        }
        OutputFormat::Json => {
            let engine = Engine::new();
            let overhead = calibrate_timer_overhead(engine.config().calibration_iterations);
            let results = engine.run(suite)?;
            let report = build_report(&results, engine.config(), overhead);
            println!("{}", generate_json_report(&report)?);
        }
    }
    Ok(())
}
