use crate::units::error::ConversionError;
use crate::units::types::Unit;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A single CSS length literal
    /// Matches: optional sign + number (integer, decimal or leading-dot) + optional whitespace + unit
    /// Examples: "16px", "-2.5 rem", ".5em", "50%"
    static ref LENGTH_PATTERN: Regex = Regex::new(
        r"^(?P<number>[-+]?(?:\d*\.\d+|\d+\.?))\s*(?P<unit>[a-zA-Z]+|%)$"
    ).unwrap();
}

/// Check if a string looks like a CSS length literal
pub fn looks_like_length(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    LENGTH_PATTERN.is_match(trimmed)
}

/// Split a literal such as "16px" into its value and unit
pub fn parse_length(s: &str) -> Result<(f64, Unit), ConversionError> {
    let trimmed = s.trim();
    let captures = LENGTH_PATTERN
        .captures(trimmed)
        .ok_or_else(|| ConversionError::InvalidNumericLiteral(trimmed.to_string()))?;

    let number = &captures["number"];
    let value = number
        .parse::<f64>()
        .map_err(|_| ConversionError::InvalidNumericLiteral(number.to_string()))?;
    let unit = captures["unit"].parse::<Unit>()?;

    Ok((value, unit))
}
