#[macro_use]
mod macros;

pub mod charge_rate;
pub mod percent;
pub mod temperature;
