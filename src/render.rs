//! Human- and machine-readable renderings of a check result.

use itertools::Itertools;
use serde::Serialize;

use crate::{
    core::{BatteryCheckResult, Classification, Limits, Parameter, ParameterResult},
    prelude::*,
};

/// Explain why the parameter failed, or [`None`] if it did not.
#[must_use]
pub fn diagnostic(result: &ParameterResult) -> Option<String> {
    let parameter = result.parameter();
    let limits = parameter.limits();
    match result.classification {
        Classification::Ok => None,
        Classification::TooLow => Some(match limits.min {
            Some(min) => format!(
                "{parameter} is too low: {} (minimum {})",
                result.reading,
                parameter.reading(min),
            ),
            None => format!("{parameter} is too low: {}", result.reading),
        }),
        Classification::TooHigh => Some(match limits.max {
            Some(max) => format!(
                "{parameter} is too high: {} (maximum {})",
                result.reading,
                parameter.reading(max),
            ),
            None => format!("{parameter} is too high: {}", result.reading),
        }),
        Classification::Invalid => Some(format!("{parameter} is not a number")),
    }
}

/// Diagnostic lines for every failed parameter, in parameter order.
#[must_use]
pub fn diagnostics(result: &BatteryCheckResult) -> Vec<String> {
    result.parameters().iter().filter_map(diagnostic).collect()
}

/// Plain-text report: the verdict followed by the diagnostics.
#[must_use]
pub fn summary(result: &BatteryCheckResult) -> String {
    if result.is_ok() {
        "Battery is OK".to_string()
    } else {
        let failures = result.failures().iter().join(", ");
        let mut lines = vec![format!("Battery is NOT OK ({failures})")];
        lines.extend(diagnostics(result));
        lines.join("\n")
    }
}

/// Human-readable allowed range of the parameter.
#[must_use]
pub fn allowed_range(parameter: Parameter) -> String {
    let Limits { min, max } = parameter.limits();
    match (min, max) {
        (Some(min), Some(max)) => {
            format!("{} … {}", parameter.reading(min), parameter.reading(max))
        }
        (Some(min), None) => format!("≥ {}", parameter.reading(min)),
        (None, Some(max)) => format!("≤ {}", parameter.reading(max)),
        (None, None) => "any".to_string(),
    }
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    result: &'a BatteryCheckResult,

    is_ok: bool,
}

pub fn to_json(result: &BatteryCheckResult) -> Result<String> {
    serde_json::to_string_pretty(&Report { result, is_ok: result.is_ok() })
        .context("failed to serialize the check result")
}
