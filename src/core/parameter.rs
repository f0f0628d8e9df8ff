use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{
    core::{
        Limits,
        limits::{
            MAX_CHARGE_RATE,
            MAX_STATE_OF_CHARGE,
            MAX_TEMPERATURE,
            MIN_STATE_OF_CHARGE,
            MIN_TEMPERATURE,
        },
    },
    quantity::{charge_rate::ChargeRate, percent::Percent, temperature::Celsius},
};

#[derive(Debug, Serialize, enumset::EnumSetType)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Temperature,
    StateOfCharge,
    ChargeRate,
}

impl Display for Parameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::StateOfCharge => write!(f, "State of Charge"),
            Self::ChargeRate => write!(f, "Charge Rate"),
        }
    }
}

impl Parameter {
    pub const fn limits(self) -> Limits {
        match self {
            Self::Temperature => Limits::bounded(MIN_TEMPERATURE, MAX_TEMPERATURE),
            Self::StateOfCharge => Limits::bounded(MIN_STATE_OF_CHARGE, MAX_STATE_OF_CHARGE),
            Self::ChargeRate => Limits::at_most(MAX_CHARGE_RATE),
        }
    }

    /// Wrap the raw value into the parameter's quantity.
    pub const fn reading(self, value: f64) -> Reading {
        match self {
            Self::Temperature => Reading::Temperature(Celsius(value)),
            Self::StateOfCharge => Reading::StateOfCharge(Percent(value)),
            Self::ChargeRate => Reading::ChargeRate(ChargeRate(value)),
        }
    }
}

/// A single typed battery reading.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, derive_more::From)]
#[serde(untagged)]
pub enum Reading {
    Temperature(Celsius),
    StateOfCharge(Percent),
    ChargeRate(ChargeRate),
}

impl Display for Reading {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Temperature(temperature) => Display::fmt(temperature, f),
            Self::StateOfCharge(state_of_charge) => Display::fmt(state_of_charge, f),
            Self::ChargeRate(charge_rate) => Display::fmt(charge_rate, f),
        }
    }
}

impl Reading {
    pub const fn parameter(self) -> Parameter {
        match self {
            Self::Temperature(_) => Parameter::Temperature,
            Self::StateOfCharge(_) => Parameter::StateOfCharge,
            Self::ChargeRate(_) => Parameter::ChargeRate,
        }
    }
}
