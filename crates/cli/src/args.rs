use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use demand_consumer::{Preferences, Prices};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "demand",
    disable_help_subcommand = true,
    about = "Cobb-Douglas demand found by numerical tangency search"
)]
pub struct Args {
    /// TOML file with solver settings; omitted keys keep their defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Utility-maximizing bundle for a fixed income.
    Marshallian {
        #[arg(long, allow_negative_numbers = true)]
        income: f64,
        #[command(flatten)]
        market: Market,
    },
    /// Expenditure-minimizing bundle for a target utility.
    Hicksian {
        #[arg(long, allow_negative_numbers = true)]
        utility: f64,
        #[command(flatten)]
        market: Market,
    },
    /// Hicksian bundle whose expenditure matches a fixed income.
    Matched {
        #[arg(long, allow_negative_numbers = true)]
        income: f64,
        #[command(flatten)]
        market: Market,
    },
}

/// Tastes and prices shared by every command.
#[derive(Debug, clap::Args)]
pub struct Market {
    /// Cobb-Douglas exponents of good 1 and good 2.
    #[arg(
        long,
        num_args = 2,
        value_names = ["A", "B"],
        default_values_t = [0.3, 0.7],
        allow_negative_numbers = true
    )]
    pub preferences: Vec<f64>,

    /// Unit prices of good 1 and good 2.
    #[arg(
        long,
        num_args = 2,
        value_names = ["P0", "P1"],
        default_values_t = [3.0, 2.0],
        allow_negative_numbers = true
    )]
    pub prices: Vec<f64>,
}

impl Market {
    /// Returns the preference exponents. Range checks happen in the solver.
    pub fn preferences(&self) -> Result<Preferences> {
        let (a, b) = pair("preferences", &self.preferences)?;
        Ok(Preferences { a, b })
    }

    /// Returns the prices. Range checks happen in the solver.
    pub fn prices(&self) -> Result<Prices> {
        let (p0, p1) = pair("prices", &self.prices)?;
        Ok(Prices { p0, p1 })
    }
}

fn pair(flag: &str, values: &[f64]) -> Result<(f64, f64)> {
    match *values {
        [first, second] => Ok((first, second)),
        _ => bail!("--{flag} takes exactly two values, got {}", values.len()),
    }
}
