use std::fmt::Write as _;

use crate::config::Preset;
use crate::core::Dimension;
use crate::output::summary::format_value;

/// Table of presets and their values in canonical order.
pub fn render_presets() -> String {
    let mut out = String::new();
    let _ = write!(out, "{:<14}", "preset");
    for dimension in Dimension::ALL {
        let _ = write!(out, "{:>15}", dimension.key());
    }
    out.push('\n');

    for preset in Preset::ALL {
        let _ = write!(out, "{:<14}", preset.as_str());
        for value in preset.values() {
            let _ = write!(out, "{:>15}", format_value(value));
        }
        out.push('\n');
    }
    out
}

pub fn list_presets() {
    print!("{}", render_presets());
}
