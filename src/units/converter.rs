use crate::units::context::{ConversionContext, Dimensions, PropertyType};
use crate::units::error::ConversionError;
use crate::units::formatter::Formatter;
use crate::units::table::{
    CM_PER_INCH, GLYPH_FONT_RATIO, MM_PER_INCH, PC_PER_INCH, PT_PER_INCH, PX_PER_INCH,
    Q_PER_INCH,
};
use crate::units::types::{ConversionResult, Unit, UnitKind};
use log::debug;

/// Convert a value between two CSS units, pivoting through pixels
pub fn convert(
    value: f64,
    from: Unit,
    to: Unit,
    ctx: &ConversionContext,
) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue(value));
    }
    if from == to {
        return Ok(value);
    }

    let px = to_px(value, from, ctx)?;
    let converted = from_px(px, to, ctx)?;
    if !converted.is_finite() {
        return Err(ConversionError::InvalidValue(converted));
    }
    Ok(converted)
}

/// Resolve a value in `unit` to pixels
pub fn to_px(value: f64, unit: Unit, ctx: &ConversionContext) -> Result<f64, ConversionError> {
    let scale = px_scale(unit, ctx)?;
    Ok(value * scale.px / scale.per)
}

/// Express a pixel value in `unit`
pub fn from_px(px: f64, unit: Unit, ctx: &ConversionContext) -> Result<f64, ConversionError> {
    let scale = px_scale(unit, ctx)?;
    Ok(px * scale.per / scale.px)
}

/// `px` pixels per `per` units. Ratios stay unreduced so whole numbers convert
/// exactly (50vw of 1920 is 50 * 1920 / 100, not 50 * 19.2).
struct Scale {
    px: f64,
    per: f64,
}

impl Scale {
    fn unit(px: f64) -> Self {
        Self { px, per: 1.0 }
    }

    fn hundredth(px: f64) -> Self {
        Self { px, per: 100.0 }
    }

    fn per_inch(units: f64) -> Self {
        Self {
            px: PX_PER_INCH,
            per: units,
        }
    }
}

/// Every `px` factor returned here is checked positive and finite, so dividing by it is safe
fn px_scale(unit: Unit, ctx: &ConversionContext) -> Result<Scale, ConversionError> {
    let scale = match unit {
        Unit::Px => Scale::unit(1.0),
        Unit::Pt => Scale::per_inch(PT_PER_INCH),
        Unit::Pc => Scale::per_inch(PC_PER_INCH),
        Unit::In => Scale::per_inch(1.0),
        Unit::Cm => Scale::per_inch(CM_PER_INCH),
        Unit::Mm => Scale::per_inch(MM_PER_INCH),
        Unit::Q => Scale::per_inch(Q_PER_INCH),
        Unit::Em => Scale::unit(ctx.parent_font_size()?),
        Unit::Rem => Scale::unit(ctx.root_font_size()?),
        Unit::Ex | Unit::Ch => Scale::unit(GLYPH_FONT_RATIO * ctx.parent_font_size()?),
        Unit::Percent => match ctx.property {
            PropertyType::Width => Scale::hundredth(container(unit, ctx)?.width),
            PropertyType::Height => Scale::hundredth(container(unit, ctx)?.height),
            PropertyType::FontSize | PropertyType::Other => {
                Scale::hundredth(ctx.parent_font_size()?)
            }
        },
        Unit::Vh | Unit::Svh | Unit::Lvh | Unit::Dvh => {
            Scale::hundredth(viewport(unit, ctx)?.height)
        }
        Unit::Vw | Unit::Svw | Unit::Lvw | Unit::Dvw => {
            Scale::hundredth(viewport(unit, ctx)?.width)
        }
        Unit::Vmin => Scale::hundredth(viewport(unit, ctx)?.min()),
        Unit::Vmax => Scale::hundredth(viewport(unit, ctx)?.max()),
        Unit::Cqw | Unit::Cqi => Scale::hundredth(container(unit, ctx)?.width),
        Unit::Cqh | Unit::Cqb => Scale::hundredth(container(unit, ctx)?.height),
        Unit::Cqmin => Scale::hundredth(container(unit, ctx)?.min()),
        Unit::Cqmax => Scale::hundredth(container(unit, ctx)?.max()),
    };
    Ok(scale)
}

fn viewport(unit: Unit, ctx: &ConversionContext) -> Result<Dimensions, ConversionError> {
    ctx.viewport()
        .ok_or(ConversionError::MissingContext {
            unit,
            requirement: "viewport dimensions",
        })?
}

fn container(unit: Unit, ctx: &ConversionContext) -> Result<Dimensions, ConversionError> {
    ctx.container()
        .ok_or(ConversionError::MissingContext {
            unit,
            requirement: "container dimensions",
        })?
}

/// Scalar converter bound to one context and one formatter
#[derive(Debug, Clone, Default)]
pub struct UnitConverter {
    context: ConversionContext,
    formatter: Formatter,
}

impl UnitConverter {
    pub fn new(context: ConversionContext) -> Self {
        Self {
            context,
            formatter: Formatter::default(),
        }
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn context(&self) -> &ConversionContext {
        &self.context
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn convert(&self, value: f64, from: Unit, to: Unit) -> Result<f64, ConversionError> {
        convert(value, from, to, &self.context)
    }

    /// Convert and format in one step
    pub fn convert_formatted(
        &self,
        value: f64,
        from: Unit,
        to: Unit,
    ) -> Result<ConversionResult, ConversionError> {
        let converted = self.convert(value, from, to)?;
        Ok(ConversionResult {
            value: converted,
            unit: to,
            formatted: self.formatter.format(converted, to),
        })
    }

    /// Convert a value into every unit the context can resolve.
    /// Units lacking context are skipped; any other failure is returned.
    pub fn convert_all(
        &self,
        value: f64,
        from: Unit,
    ) -> Result<Vec<ConversionResult>, ConversionError> {
        let mut results = Vec::with_capacity(Unit::ALL.len());
        for to in Unit::ALL {
            match self.convert_formatted(value, from, to) {
                Ok(result) => results.push(result),
                Err(ConversionError::MissingContext { unit, requirement }) => {
                    debug!("Skipping {}: {} needs {}", to, unit, requirement);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(results)
    }

    /// Whether every unit of `kind` can be resolved under this converter's context
    pub fn supports(&self, kind: UnitKind) -> bool {
        match kind {
            UnitKind::Absolute | UnitKind::FontRelative => true,
            UnitKind::Percentage => match self.context.property {
                PropertyType::Width | PropertyType::Height => self.context.container.is_some(),
                PropertyType::FontSize | PropertyType::Other => true,
            },
            UnitKind::Viewport => self.context.viewport.is_some(),
            UnitKind::Container => self.context.container.is_some(),
        }
    }
}

/// Convert a value into every unit `ctx` can resolve, formatted with the default precision
pub fn convert_all(
    value: f64,
    from: Unit,
    ctx: &ConversionContext,
) -> Result<Vec<ConversionResult>, ConversionError> {
    UnitConverter::new(ctx.clone()).convert_all(value, from)
}
