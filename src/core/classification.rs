use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::Serialize;

/// Verdict for a single reading against its limits.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    /// Within the limits, bounds included.
    Ok,

    /// Below the lower limit.
    TooLow,

    /// Above the upper limit.
    TooHigh,

    /// The reading is not a number and cannot be compared.
    Invalid,
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::TooLow => write!(f, "too low"),
            Self::TooHigh => write!(f, "too high"),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}

impl Classification {
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Ok => Color::Green,
            Self::TooLow => Color::Blue,
            Self::TooHigh => Color::Red,
            Self::Invalid => Color::DarkYellow,
        }
    }
}
