pub mod check;
pub mod classification;
pub mod limits;
pub mod parameter;

pub use self::{
    check::{BatteryCheckResult, ParameterResult, check_battery},
    classification::Classification,
    limits::Limits,
    parameter::{Parameter, Reading},
};
