//! Charge rate expressed as a fraction of the battery capacity per hour (C-rate).

quantity!(ChargeRate, via: f64, suffix: "C", precision: 2);
