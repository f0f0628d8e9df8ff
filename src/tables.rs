use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use enumset::EnumSet;

use crate::{
    core::{BatteryCheckResult, Parameter},
    render::allowed_range,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_check_table(result: &BatteryCheckResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Parameter", "Reading", "Allowed", "Verdict"]);
    for parameter in result.parameters() {
        table.add_row(vec![
            Cell::new(parameter.parameter()),
            Cell::new(parameter.reading).set_alignment(CellAlignment::Right),
            Cell::new(allowed_range(parameter.parameter())).add_attribute(Attribute::Dim),
            Cell::new(parameter.classification).fg(parameter.classification.color()),
        ]);
    }
    let verdict = if result.is_ok() {
        Cell::new("OK").fg(Color::Green)
    } else {
        Cell::new("NOT OK").fg(Color::Red)
    };
    table.add_row(vec![
        Cell::new("Battery").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        verdict.add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_limits_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Parameter", "Allowed"]);
    for parameter in EnumSet::<Parameter>::all() {
        table.add_row(vec![Cell::new(parameter), Cell::new(allowed_range(parameter))]);
    }
    table
}
