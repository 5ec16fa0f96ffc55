mod args;
mod report;
mod settings;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use demand_consumer::Solver;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::{
    args::{Args, Command},
    report::Report,
};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let settings = settings::load(args.config.as_deref())?;
    let solver = Solver::new(settings).context("invalid solver settings")?;
    debug!(?settings, "solver ready");

    let start = Instant::now();
    let report = run(&solver, &args.command)?;
    let elapsed = start.elapsed();

    print!("{report}");
    println!("time:\t{:.3} ms", elapsed.as_secs_f64() * 1e3);
    Ok(())
}

fn run(solver: &Solver, command: &Command) -> Result<Report> {
    let report = match command {
        Command::Marshallian { income, market } => {
            let demand = solver
                .marshallian_unobserved(*income, market.preferences()?, market.prices()?)
                .context("marshallian demand failed")?;
            Report::Bundle(demand.bundle)
        }
        Command::Hicksian { utility, market } => {
            let demand = solver
                .hicksian_unobserved(*utility, market.preferences()?, market.prices()?)
                .context("hicksian demand failed")?;
            Report::Bundle(demand.bundle)
        }
        Command::Matched { income, market } => {
            let matched = solver
                .income_matched(*income, market.preferences()?, market.prices()?)
                .context("income-matched demand failed")?;
            Report::Matched(matched)
        }
    };
    Ok(report)
}
