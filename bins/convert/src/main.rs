//! Coinage currency converter.
//!
//! Loads conversion rates from configuration, then converts one amount.
//!
//! Usage: convert <AMOUNT> <FROM> <TO>

use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::info;

use coinage_core::{Money, RateRegistry};
use coinage_shared::{AppConfig, telemetry};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Amount to convert
    #[arg(value_parser = Decimal::from_str, allow_negative_numbers = true)]
    amount: Decimal,

    /// Currency the amount is in
    from: String,

    /// Currency to convert into
    to: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    telemetry::init_tracing(&config.logging.filter)?;

    let rates = RateRegistry::global();
    let tables = rates
        .seed_from_config(&config)
        .context("Invalid conversion rates in configuration")?;
    info!(tables, "Loaded conversion rates");

    let money = Money::new(cli.amount, cli.from.as_str())?;
    let converted = money.convert_to(cli.to.as_str(), rates)?;

    println!("{money} = {converted}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_arguments() {
        let cli = Cli::try_parse_from(["convert", "50.25", "EUR", "USD"]).unwrap();
        assert_eq!(cli.amount, Decimal::new(5025, 2));
        assert_eq!(cli.from, "EUR");
        assert_eq!(cli.to, "USD");
    }

    #[test]
    fn test_cli_accepts_negative_amount() {
        let cli = Cli::try_parse_from(["convert", "-10", "EUR", "USD"]).unwrap();
        assert_eq!(cli.amount, Decimal::new(-10, 0));
    }

    #[test]
    fn test_cli_rejects_non_numeric_amount() {
        assert!(Cli::try_parse_from(["convert", "abc", "EUR", "USD"]).is_err());
    }

    #[test]
    fn test_cli_requires_all_arguments() {
        assert!(Cli::try_parse_from(["convert", "50", "EUR"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
