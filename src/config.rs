use crate::units::context::{ConversionContext, Dimensions, PropertyType, DEFAULT_ROOT_FONT_SIZE};
use crate::units::formatter::Formatter;
use crate::units::types::Unit;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub context: ContextConfig,

    // Decimal places per unit tag, e.g. rem = 4
    #[serde(default)]
    pub precision: HashMap<String, usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContextConfig {
    #[serde(default = "default_root_font_size")]
    pub root_font_size: f64,

    #[serde(default)]
    pub parent_font_size: Option<f64>,

    #[serde(default)]
    pub property: PropertyType,

    #[serde(default)]
    pub viewport: Option<Dimensions>,

    #[serde(default)]
    pub container: Option<Dimensions>,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            root_font_size: default_root_font_size(),
            parent_font_size: None,
            property: PropertyType::default(),
            viewport: None,
            container: None,
        }
    }
}

fn default_root_font_size() -> f64 {
    DEFAULT_ROOT_FONT_SIZE
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.formatter()?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the conversion context described by the `[context]` table
    pub fn context(&self) -> ConversionContext {
        self.apply_to(ConversionContext::default())
    }

    /// Overlay the `[context]` table on `ctx`. Viewport and container sizes
    /// are sampled by the host, so the ones the config leaves out are kept.
    pub fn apply_to(&self, ctx: ConversionContext) -> ConversionContext {
        ConversionContext {
            root_font_size: self.context.root_font_size,
            parent_font_size: self.context.parent_font_size,
            viewport: self.context.viewport.or(ctx.viewport),
            container: self.context.container.or(ctx.container),
            property: self.context.property,
        }
    }

    /// Build a formatter from the `[precision]` table
    pub fn formatter(&self) -> Result<Formatter, ConfigError> {
        let mut formatter = Formatter::new();
        for (tag, decimals) in &self.precision {
            let unit = tag
                .parse::<Unit>()
                .map_err(|e| ConfigError::Invalid(format!("[precision] {}", e)))?;
            formatter = formatter.with_precision(unit, *decimals);
        }
        Ok(formatter)
    }
}
