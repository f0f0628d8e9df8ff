use crate::core::Classification;

pub const MIN_TEMPERATURE: f64 = 0.0;
pub const MAX_TEMPERATURE: f64 = 45.0;

pub const MIN_STATE_OF_CHARGE: f64 = 20.0;
pub const MAX_STATE_OF_CHARGE: f64 = 80.0;

/// There is deliberately no lower limit on the charge rate.
pub const MAX_CHARGE_RATE: f64 = 0.8;

/// Inclusive operating range, either bound may be absent.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Limits {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Limits {
    pub const fn bounded(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    pub const fn at_most(max: f64) -> Self {
        Self { min: None, max: Some(max) }
    }

    /// Classify the value against the limits, NaN is [`Classification::Invalid`].
    pub fn classify(self, value: f64) -> Classification {
        if value.is_nan() {
            Classification::Invalid
        } else if self.min.is_some_and(|min| value < min) {
            Classification::TooLow
        } else if self.max.is_some_and(|max| value > max) {
            Classification::TooHigh
        } else {
            Classification::Ok
        }
    }
}
