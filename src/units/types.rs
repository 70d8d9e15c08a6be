use crate::units::error::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A CSS length unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    Px,
    Em,
    Rem,
    Percent,
    Vh,
    Vw,
    Vmin,
    Vmax,
    Svh,
    Lvh,
    Dvh,
    Svw,
    Lvw,
    Dvw,
    Cqw,
    Cqh,
    Cqi,
    Cqb,
    Cqmin,
    Cqmax,
    Pt,
    Pc,
    In,
    Cm,
    Mm,
    Q,
    Ex,
    Ch,
}

/// How a unit resolves to pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitKind {
    /// Fixed ratio to the CSS reference pixel
    Absolute,
    /// Scales with the root or parent font size
    FontRelative,
    /// Depends on the property being converted
    Percentage,
    /// Scales with the viewport
    Viewport,
    /// Scales with the query container
    Container,
}

impl Unit {
    /// Every supported unit, in the order the converter lists them
    pub const ALL: [Unit; 28] = [
        Unit::Px,
        Unit::Em,
        Unit::Rem,
        Unit::Percent,
        Unit::Vh,
        Unit::Vw,
        Unit::Vmin,
        Unit::Vmax,
        Unit::Svh,
        Unit::Lvh,
        Unit::Dvh,
        Unit::Svw,
        Unit::Lvw,
        Unit::Dvw,
        Unit::Cqw,
        Unit::Cqh,
        Unit::Cqi,
        Unit::Cqb,
        Unit::Cqmin,
        Unit::Cqmax,
        Unit::Pt,
        Unit::Pc,
        Unit::In,
        Unit::Cm,
        Unit::Mm,
        Unit::Q,
        Unit::Ex,
        Unit::Ch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Percent => "%",
            Unit::Vh => "vh",
            Unit::Vw => "vw",
            Unit::Vmin => "vmin",
            Unit::Vmax => "vmax",
            Unit::Svh => "svh",
            Unit::Lvh => "lvh",
            Unit::Dvh => "dvh",
            Unit::Svw => "svw",
            Unit::Lvw => "lvw",
            Unit::Dvw => "dvw",
            Unit::Cqw => "cqw",
            Unit::Cqh => "cqh",
            Unit::Cqi => "cqi",
            Unit::Cqb => "cqb",
            Unit::Cqmin => "cqmin",
            Unit::Cqmax => "cqmax",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::In => "in",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::Q => "q",
            Unit::Ex => "ex",
            Unit::Ch => "ch",
        }
    }

    pub fn kind(self) -> UnitKind {
        match self {
            Unit::Px | Unit::Pt | Unit::Pc | Unit::In | Unit::Cm | Unit::Mm | Unit::Q => {
                UnitKind::Absolute
            }
            Unit::Em | Unit::Rem | Unit::Ex | Unit::Ch => UnitKind::FontRelative,
            Unit::Percent => UnitKind::Percentage,
            Unit::Vh
            | Unit::Vw
            | Unit::Vmin
            | Unit::Vmax
            | Unit::Svh
            | Unit::Lvh
            | Unit::Dvh
            | Unit::Svw
            | Unit::Lvw
            | Unit::Dvw => UnitKind::Viewport,
            Unit::Cqw | Unit::Cqh | Unit::Cqi | Unit::Cqb | Unit::Cqmin | Unit::Cqmax => {
                UnitKind::Container
            }
        }
    }

    pub fn is_absolute(self) -> bool {
        self.kind() == UnitKind::Absolute
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Unit::ALL
            .iter()
            .copied()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ConversionError::UnsupportedUnit(tag.to_string()))
    }
}

impl TryFrom<String> for Unit {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().to_string()
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitKind::Absolute => "absolute",
            UnitKind::FontRelative => "font-relative",
            UnitKind::Percentage => "percentage",
            UnitKind::Viewport => "viewport",
            UnitKind::Container => "container",
        };
        f.pad(name)
    }
}

/// Result of converting a value into a target unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    /// Converted numeric value, unrounded
    pub value: f64,
    pub unit: Unit,
    /// Value rounded and trimmed for display (e.g., "0.25")
    pub formatted: String,
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.formatted, self.unit)
    }
}
