use crate::units::types::Unit;
use std::collections::HashMap;

/// Beyond this many decimals an f64 only prints representation noise
pub const MAX_PRECISION: usize = 15;

/// Decimal places used when no override is configured
pub fn default_precision(unit: Unit) -> usize {
    match unit {
        Unit::Px | Unit::Pt | Unit::Pc => 0,
        Unit::In | Unit::Cm | Unit::Mm | Unit::Q => 3,
        _ => 2,
    }
}

/// Format a converted value for display with the default precision policy
pub fn format(value: f64, unit: Unit) -> String {
    Formatter::default().format(value, unit)
}

/// Fixed-point formatting with per-unit precision overrides
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Formatter {
    /// unit -> decimal places
    overrides: HashMap<Unit, usize>,
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(mut self, unit: Unit, decimals: usize) -> Self {
        self.overrides.insert(unit, decimals);
        self
    }

    /// Decimal places for `unit`, capped at [`MAX_PRECISION`]
    pub fn precision(&self, unit: Unit) -> usize {
        self.overrides
            .get(&unit)
            .copied()
            .unwrap_or_else(|| default_precision(unit))
            .min(MAX_PRECISION)
    }

    /// Round half away from zero to the unit's precision, then drop trailing zeros
    /// and a dangling decimal point ("2.50" -> "2.5", "3.00" -> "3").
    pub fn format(&self, value: f64, unit: Unit) -> String {
        let decimals = self.precision(unit);
        let fixed = format!("{:.*}", decimals, round_to(value, decimals));
        trim_trailing_zeros(fixed)
    }
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if !rounded.is_finite() {
        // Scaling overflowed; the plain value is already beyond the displayed precision
        return value;
    }
    // No "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn trim_trailing_zeros(mut fixed: String) -> String {
    if fixed.contains('.') {
        let trimmed_len = fixed.trim_end_matches('0').trim_end_matches('.').len();
        fixed.truncate(trimmed_len);
    }
    fixed
}
