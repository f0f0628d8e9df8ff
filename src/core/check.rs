use enumset::EnumSet;
use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::{
    core::{
        Classification,
        Limits,
        Parameter,
        Reading,
        limits::{MAX_STATE_OF_CHARGE, MAX_TEMPERATURE, MIN_STATE_OF_CHARGE, MIN_TEMPERATURE},
    },
    prelude::*,
    quantity::{charge_rate::ChargeRate, percent::Percent, temperature::Celsius},
};

/// Classify the value against the inclusive `[min, max]` range.
pub fn classify_in_range(value: f64, min: f64, max: f64) -> Classification {
    Limits::bounded(min, max).classify(value)
}

/// Classify the charge rate against its upper limit only: negative rates are fine.
pub fn classify_charge_rate(value: f64) -> Classification {
    Parameter::ChargeRate.limits().classify(value)
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParameterResult {
    pub reading: Reading,
    pub classification: Classification,
}

impl ParameterResult {
    pub const fn parameter(&self) -> Parameter {
        self.reading.parameter()
    }
}

impl Serialize for ParameterResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ParameterResult", 3)?;
        state.serialize_field("parameter", &self.parameter())?;
        state.serialize_field("reading", &self.reading)?;
        state.serialize_field("classification", &self.classification)?;
        state.end()
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BatteryCheckResult {
    pub temperature: ParameterResult,
    pub state_of_charge: ParameterResult,
    pub charge_rate: ParameterResult,
}

impl BatteryCheckResult {
    /// The results in the fixed order: temperature, state of charge, charge rate.
    pub const fn parameters(&self) -> [ParameterResult; 3] {
        [self.temperature, self.state_of_charge, self.charge_rate]
    }

    /// Whether every parameter is [`Classification::Ok`].
    pub fn is_ok(&self) -> bool {
        self.parameters().iter().all(|result| result.classification.is_ok())
    }

    /// Parameters that are not [`Classification::Ok`].
    pub fn failures(&self) -> EnumSet<Parameter> {
        self.parameters()
            .iter()
            .filter(|result| !result.classification.is_ok())
            .map(ParameterResult::parameter)
            .collect()
    }
}

#[instrument(level = "debug", ret)]
pub fn check_battery(
    temperature: Celsius,
    state_of_charge: Percent,
    charge_rate: ChargeRate,
) -> BatteryCheckResult {
    let result = BatteryCheckResult {
        temperature: ParameterResult {
            reading: temperature.into(),
            classification: classify_in_range(temperature.0, MIN_TEMPERATURE, MAX_TEMPERATURE),
        },
        state_of_charge: ParameterResult {
            reading: state_of_charge.into(),
            classification: classify_in_range(
                state_of_charge.0,
                MIN_STATE_OF_CHARGE,
                MAX_STATE_OF_CHARGE,
            ),
        },
        charge_rate: ParameterResult {
            reading: charge_rate.into(),
            classification: classify_charge_rate(charge_rate.0),
        },
    };
    for failure in result.parameters().iter().filter(|it| !it.classification.is_ok()) {
        debug!(
            parameter = %failure.parameter(),
            reading = %failure.reading,
            classification = %failure.classification,
            "out of range"
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(temperature: f64, state_of_charge: f64, charge_rate: f64) -> BatteryCheckResult {
        check_battery(Celsius(temperature), Percent(state_of_charge), ChargeRate(charge_rate))
    }

    #[test]
    fn classify_in_range_ok() {
        for value in [0.0, 0.001, 22.5, 44.999, 45.0] {
            assert_eq!(classify_in_range(value, 0.0, 45.0), Classification::Ok, "{value}");
        }
        for value in [-0.001, -5.0, -273.15, f64::NEG_INFINITY] {
            assert_eq!(classify_in_range(value, 0.0, 45.0), Classification::TooLow, "{value}");
        }
        for value in [45.001, 50.0, f64::INFINITY] {
            assert_eq!(classify_in_range(value, 0.0, 45.0), Classification::TooHigh, "{value}");
        }
    }

    #[test]
    fn classify_state_of_charge_range_ok() {
        assert_eq!(classify_in_range(19.9, 20.0, 80.0), Classification::TooLow);
        assert_eq!(classify_in_range(20.0, 20.0, 80.0), Classification::Ok);
        assert_eq!(classify_in_range(80.0, 20.0, 80.0), Classification::Ok);
        assert_eq!(classify_in_range(80.1, 20.0, 80.0), Classification::TooHigh);
    }

    #[test]
    fn classify_charge_rate_ok() {
        for value in [-10.0, -0.5, 0.0, 0.7, 0.8] {
            assert_eq!(classify_charge_rate(value), Classification::Ok, "{value}");
        }
        for value in [0.800_001, 0.9, 1.0, 5.0] {
            assert_eq!(classify_charge_rate(value), Classification::TooHigh, "{value}");
        }
    }

    #[test]
    fn nan_is_invalid() {
        assert_eq!(classify_in_range(f64::NAN, 0.0, 45.0), Classification::Invalid);
        assert_eq!(classify_charge_rate(f64::NAN), Classification::Invalid);

        let result = check(25.0, f64::NAN, 0.7);
        assert_eq!(result.state_of_charge.classification, Classification::Invalid);
        assert!(!result.is_ok());
        assert_eq!(result.failures(), EnumSet::only(Parameter::StateOfCharge));
    }

    #[test]
    fn all_ok() {
        let result = check(25.0, 70.0, 0.7);
        assert_eq!(result.temperature.classification, Classification::Ok);
        assert_eq!(result.state_of_charge.classification, Classification::Ok);
        assert_eq!(result.charge_rate.classification, Classification::Ok);
        assert!(result.is_ok());
        assert!(result.failures().is_empty());
    }

    #[test]
    fn temperature_too_low() {
        let result = check(-5.0, 70.0, 0.7);
        assert_eq!(result.temperature.classification, Classification::TooLow);
        assert!(!result.is_ok());
    }

    #[test]
    fn state_of_charge_too_high() {
        let result = check(25.0, 85.0, 0.7);
        assert_eq!(result.state_of_charge.classification, Classification::TooHigh);
        assert!(!result.is_ok());
    }

    #[test]
    fn charge_rate_too_high() {
        let result = check(25.0, 70.0, 0.9);
        assert_eq!(result.charge_rate.classification, Classification::TooHigh);
        assert!(!result.is_ok());
    }

    #[test]
    fn everything_out_of_range() {
        let result = check(-10.0, 10.0, 1.0);
        assert_eq!(result.temperature.classification, Classification::TooLow);
        assert_eq!(result.state_of_charge.classification, Classification::TooLow);
        assert_eq!(result.charge_rate.classification, Classification::TooHigh);
        assert!(!result.is_ok());
        assert_eq!(result.failures(), EnumSet::all());
    }

    #[test]
    fn negative_charge_rate_is_accepted() {
        let result = check(25.0, 50.0, -0.5);
        assert_eq!(result.charge_rate.classification, Classification::Ok);
        assert!(result.is_ok());
    }

    #[test]
    fn hot_and_full_is_not_ok() {
        let result = check(50.0, 85.0, 0.0);
        assert_eq!(result.failures(), Parameter::Temperature | Parameter::StateOfCharge);
        assert!(!result.is_ok());
    }

    #[test]
    fn aggregate_matches_per_parameter_verdicts() {
        let temperatures = [f64::NAN, -0.1, 0.0, 25.0, 45.0, 45.1];
        let states_of_charge = [f64::NAN, 19.9, 20.0, 50.0, 80.0, 80.1];
        let charge_rates = [f64::NAN, -1.0, 0.0, 0.8, 0.81];
        for temperature in temperatures {
            for state_of_charge in states_of_charge {
                for charge_rate in charge_rates {
                    let result = check(temperature, state_of_charge, charge_rate);
                    let expected = (0.0..=45.0).contains(&temperature)
                        && (20.0..=80.0).contains(&state_of_charge)
                        && charge_rate <= 0.8;
                    assert_eq!(
                        result.is_ok(),
                        expected,
                        "{temperature} {state_of_charge} {charge_rate}"
                    );
                    assert_eq!(result.failures().is_empty(), result.is_ok());
                }
            }
        }
    }

    #[test]
    fn serialize_parameter_result_ok() {
        let json = serde_json::to_value(check(25.0, 85.0, 0.7).state_of_charge).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "parameter": "state_of_charge",
                "reading": 85.0,
                "classification": "TOO_HIGH",
            }),
        );
    }

    #[test]
    fn parameters_keep_order() {
        let parameters = check(25.0, 70.0, 0.7).parameters().map(|result| result.parameter());
        assert_eq!(
            parameters,
            [Parameter::Temperature, Parameter::StateOfCharge, Parameter::ChargeRate]
        );
    }
}
