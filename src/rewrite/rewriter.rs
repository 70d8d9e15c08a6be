use crate::units::context::ConversionContext;
use crate::units::converter::convert;
use crate::units::error::ConversionError;
use crate::units::formatter::Formatter;
use crate::units::types::Unit;
use log::debug;
use regex::Regex;

/// Result of a bulk rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub output: String,
    /// Tokens converted to the target unit
    pub replacements: usize,
    /// Tokens that matched the number+unit shape but sat inside an identifier
    pub skipped: usize,
}

/// Rewrites every `<number><from>` token in a block of CSS into `<number><to>`.
///
/// The source is treated as plain text: selectors, comments and strings are not
/// recognised, so a matching token inside a comment is rewritten too.
#[derive(Debug, Clone)]
pub struct BulkCodeRewriter {
    from: Unit,
    to: Unit,
    pattern: Regex,
    formatter: Formatter,
}

impl BulkCodeRewriter {
    pub fn new(from: Unit, to: Unit) -> Self {
        Self {
            from,
            to,
            pattern: token_pattern(from),
            formatter: Formatter::default(),
        }
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn from_unit(&self) -> Unit {
        self.from
    }

    pub fn to_unit(&self) -> Unit {
        self.to
    }

    pub fn rewrite(
        &self,
        source: &str,
        ctx: &ConversionContext,
    ) -> Result<String, ConversionError> {
        self.rewrite_with_stats(source, ctx).map(|outcome| outcome.output)
    }

    /// Single left-to-right pass. Stops at the first token that fails to convert.
    pub fn rewrite_with_stats(
        &self,
        source: &str,
        ctx: &ConversionContext,
    ) -> Result<RewriteOutcome, ConversionError> {
        let mut output = String::with_capacity(source.len());
        let mut last_end = 0;
        let mut replacements = 0;
        let mut skipped = 0;

        for captures in self.pattern.captures_iter(source) {
            let Some(token) = captures.get(0) else {
                continue;
            };
            if !is_standalone(source, token.start(), token.end()) {
                skipped += 1;
                continue;
            }

            let literal = &captures["number"];
            let value = literal
                .parse::<f64>()
                .map_err(|_| ConversionError::InvalidNumericLiteral(literal.to_string()))?;
            let converted = convert(value, self.from, self.to, ctx)?;

            output.push_str(&source[last_end..token.start()]);
            output.push_str(&self.formatter.format(converted, self.to));
            output.push_str(self.to.as_str());
            last_end = token.end();
            replacements += 1;
        }
        output.push_str(&source[last_end..]);

        debug!(
            "Rewrote {} {} token(s) to {} ({} skipped inside identifiers)",
            replacements, self.from, self.to, skipped
        );

        Ok(RewriteOutcome {
            output,
            replacements,
            skipped,
        })
    }
}

/// Rewrite every `from` token in `source` as `to`, using the default precision
pub fn rewrite(
    source: &str,
    from: Unit,
    to: Unit,
    ctx: &ConversionContext,
) -> Result<String, ConversionError> {
    BulkCodeRewriter::new(from, to).rewrite(source, ctx)
}

/// Optional sign, a number (`12`, `1.5`, `.5`) and the unit, case-insensitively.
/// Boundaries are checked separately because the regex crate has no lookaround.
fn token_pattern(unit: Unit) -> Regex {
    let pattern = format!(
        r"(?P<number>[-+]?(?:\d*\.\d+|\d+))(?i:{})",
        regex::escape(unit.as_str())
    );
    Regex::new(&pattern).unwrap()
}

/// Non-ASCII code points are valid in CSS identifiers
fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || !c.is_ascii()
}

/// A token counts only when it is not glued to an identifier on either side:
/// `10px1`, `10pxx`, `col-10px` and `h1px` are left alone.
///
/// A leading `+` never belongs to an identifier, so `1px+2px` holds two tokens.
fn is_standalone(source: &str, start: usize, end: usize) -> bool {
    let before = source[..start].chars().next_back();
    let after = source[end..].chars().next();

    let glued_before = !source[start..].starts_with('+')
        && matches!(before, Some(c) if is_identifier_char(c) || c == '.');
    let glued_after = matches!(after, Some(c) if is_identifier_char(c));
    !glued_before && !glued_after
}
