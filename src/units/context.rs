use crate::units::error::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_ROOT_FONT_SIZE: f64 = 16.0;

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn min(&self) -> f64 {
        self.width.min(self.height)
    }

    pub fn max(&self) -> f64 {
        self.width.max(self.height)
    }
}

impl FromStr for Dimensions {
    type Err = String;

    /// Parse "WIDTHxHEIGHT", e.g. "1920x1080"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("Expected WIDTHxHEIGHT, got '{}'", s))?;
        let width = width
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid width '{}': {}", width, e))?;
        let height = height
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid height '{}': {}", height, e))?;
        Ok(Self { width, height })
    }
}

/// The CSS property a value belongs to. Only matters for `%`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    Width,
    Height,
    FontSize,
    #[default]
    Other,
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "width" => Ok(PropertyType::Width),
            "height" => Ok(PropertyType::Height),
            "font-size" | "font_size" | "fontsize" => Ok(PropertyType::FontSize),
            "other" => Ok(PropertyType::Other),
            other => Err(format!("Unknown property type: '{}'", other)),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyType::Width => "width",
            PropertyType::Height => "height",
            PropertyType::FontSize => "font-size",
            PropertyType::Other => "other",
        };
        f.write_str(name)
    }
}

/// Everything needed to resolve relative units to pixels.
///
/// The caller samples viewport and container sizes once and passes them in;
/// the converter never reads them from anywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionContext {
    pub root_font_size: f64,
    /// Font size of the parent element, falls back to `root_font_size`
    pub parent_font_size: Option<f64>,
    pub viewport: Option<Dimensions>,
    pub container: Option<Dimensions>,
    pub property: PropertyType,
}

impl Default for ConversionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionContext {
    pub fn new() -> Self {
        Self {
            root_font_size: DEFAULT_ROOT_FONT_SIZE,
            parent_font_size: None,
            viewport: None,
            container: None,
            property: PropertyType::Other,
        }
    }

    pub fn with_root_font_size(mut self, size: f64) -> Self {
        self.root_font_size = size;
        self
    }

    pub fn with_parent_font_size(mut self, size: f64) -> Self {
        self.parent_font_size = Some(size);
        self
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport = Some(Dimensions::new(width, height));
        self
    }

    pub fn with_container(mut self, width: f64, height: f64) -> Self {
        self.container = Some(Dimensions::new(width, height));
        self
    }

    pub fn with_property(mut self, property: PropertyType) -> Self {
        self.property = property;
        self
    }

    pub(crate) fn root_font_size(&self) -> Result<f64, ConversionError> {
        positive("root_font_size", self.root_font_size)
    }

    pub(crate) fn parent_font_size(&self) -> Result<f64, ConversionError> {
        match self.parent_font_size {
            Some(size) => positive("parent_font_size", size),
            None => self.root_font_size(),
        }
    }

    pub(crate) fn viewport(&self) -> Option<Result<Dimensions, ConversionError>> {
        self.viewport
            .map(|d| checked(d, "viewport.width", "viewport.height"))
    }

    pub(crate) fn container(&self) -> Option<Result<Dimensions, ConversionError>> {
        self.container
            .map(|d| checked(d, "container.width", "container.height"))
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, ConversionError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConversionError::InvalidContext { field, value })
    }
}

fn checked(
    dims: Dimensions,
    width_field: &'static str,
    height_field: &'static str,
) -> Result<Dimensions, ConversionError> {
    positive(width_field, dims.width)?;
    positive(height_field, dims.height)?;
    Ok(dims)
}
