#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod prelude;
mod quantity;
mod render;
mod tables;

use std::process::ExitCode;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, CheckArgs, Command, OutputFormat},
    core::{BatteryCheckResult, check_battery},
    prelude::*,
    render::{diagnostics, summary, to_json},
    tables::{build_check_table, build_limits_table},
};

fn main() -> Result<ExitCode> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    debug!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Check(args) => check(&args),
        Command::Limits => {
            println!("{}", build_limits_table());
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[instrument(skip_all)]
fn check(args: &CheckArgs) -> Result<ExitCode> {
    let result = check_battery(args.temperature, args.state_of_charge, args.charge_rate);
    for line in diagnostics(&result) {
        warn!("{line}");
    }
    info!(is_ok = result.is_ok(), "checked");

    match args.format {
        OutputFormat::Text => println!("{}", summary(&result)),
        OutputFormat::Table => println!("{}", build_check_table(&result)),
        OutputFormat::Json => println!("{}", to_json(&result)?),
    }

    Ok(exit_code(&result))
}

fn exit_code(result: &BatteryCheckResult) -> ExitCode {
    if result.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
