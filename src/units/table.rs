// Absolute unit ratios, anchored to the CSS reference pixel (96px = 1in)

use crate::units::types::Unit;

pub const PX_PER_INCH: f64 = 96.0;

pub const PT_PER_INCH: f64 = 72.0;
pub const PC_PER_INCH: f64 = 6.0;
pub const CM_PER_INCH: f64 = 2.54;
pub const MM_PER_INCH: f64 = 25.4;
pub const Q_PER_INCH: f64 = 101.6;

/// Width of an `ex` or `ch` relative to the font size. Real values depend on font metrics.
pub const GLYPH_FONT_RATIO: f64 = 0.5;

/// Pixels per unit for absolute units, `None` for anything context dependent
pub fn px_per_unit(unit: Unit) -> Option<f64> {
    let per_inch = match unit {
        Unit::Px => return Some(1.0),
        Unit::Pt => PT_PER_INCH,
        Unit::Pc => PC_PER_INCH,
        Unit::In => 1.0,
        Unit::Cm => CM_PER_INCH,
        Unit::Mm => MM_PER_INCH,
        Unit::Q => Q_PER_INCH,
        _ => return None,
    };
    Some(PX_PER_INCH / per_inch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_ratios() {
        assert_eq!(px_per_unit(Unit::Px), Some(1.0));
        assert_eq!(px_per_unit(Unit::In), Some(96.0));
        assert_eq!(px_per_unit(Unit::Pc), Some(16.0));
        assert!((px_per_unit(Unit::Pt).unwrap() - 1.333_333).abs() < 1e-6);
        assert!((px_per_unit(Unit::Cm).unwrap() - 37.795_276).abs() < 1e-6);
        assert!((px_per_unit(Unit::Mm).unwrap() - 3.779_528).abs() < 1e-6);
        assert!((px_per_unit(Unit::Q).unwrap() - 0.944_882).abs() < 1e-6);
    }

    #[test]
    fn test_every_absolute_unit_has_ratio() {
        for unit in Unit::ALL {
            assert_eq!(px_per_unit(unit).is_some(), unit.is_absolute(), "{}", unit);
        }
    }
}
