//! Arguments of the `check` command.

use clap::{Parser, ValueEnum};

use crate::quantity::{charge_rate::ChargeRate, percent::Percent, temperature::Celsius};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Verdict and diagnostics as plain text.
    Text,

    /// Colored table with one row per parameter.
    Table,

    /// Pretty-printed JSON.
    Json,
}

#[must_use]
#[derive(Parser)]
pub struct CheckArgs {
    /// Battery temperature in degrees Celsius.
    #[clap(long, allow_negative_numbers = true, env = "BATTERY_TEMPERATURE")]
    pub temperature: Celsius,

    /// State of charge in percent.
    #[clap(
        long = "state-of-charge",
        alias = "soc",
        allow_negative_numbers = true,
        env = "BATTERY_STATE_OF_CHARGE"
    )]
    pub state_of_charge: Percent,

    /// Charge rate as a fraction of the capacity per hour (C-rate).
    #[clap(long = "charge-rate", allow_negative_numbers = true, env = "BATTERY_CHARGE_RATE")]
    pub charge_rate: ChargeRate,

    #[clap(long, value_enum, default_value = "table", env = "BATTERY_CHECK_FORMAT")]
    pub format: OutputFormat,
}
