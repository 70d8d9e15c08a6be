// WebAssembly bindings for the converter UI
use crate::config::Config;
use crate::rewrite::BulkCodeRewriter;
use crate::units::{parse_length, ConversionContext, Formatter, PropertyType, Unit, UnitConverter};
use wasm_bindgen::prelude::*;

fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

fn parse_unit(tag: &str) -> Result<Unit, JsValue> {
    tag.parse::<Unit>().map_err(js_error)
}

#[wasm_bindgen]
pub struct CssUnitsWasm {
    context: ConversionContext,
    formatter: Formatter,
}

impl Default for CssUnitsWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CssUnitsWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            context: ConversionContext::default(),
            formatter: Formatter::default(),
        }
    }

    /// Apply a TOML config. Viewport and container sizes already set by the
    /// host survive unless the config names its own.
    #[wasm_bindgen]
    pub fn load_config(&mut self, config_content: &str) -> Result<(), JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| js_error(format!("Failed to load config: {}", e)))?;
        self.formatter = config.formatter().map_err(js_error)?;
        self.context = config.apply_to(self.context.clone());
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_root_font_size(&mut self, size: f64) {
        self.context.root_font_size = size;
    }

    #[wasm_bindgen]
    pub fn set_parent_font_size(&mut self, size: Option<f64>) {
        self.context.parent_font_size = size;
    }

    /// Called by the host with `window.innerWidth` / `window.innerHeight` before converting
    #[wasm_bindgen]
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.context = self.context.clone().with_viewport(width, height);
    }

    #[wasm_bindgen]
    pub fn set_container(&mut self, width: f64, height: f64) {
        self.context = self.context.clone().with_container(width, height);
    }

    #[wasm_bindgen]
    pub fn clear_container(&mut self) {
        self.context.container = None;
    }

    /// "width", "height", "font-size" or "other"
    #[wasm_bindgen]
    pub fn set_property(&mut self, property: &str) -> Result<(), JsValue> {
        self.context.property = property.parse::<PropertyType>().map_err(js_error)?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_precision(&mut self, unit: &str, decimals: usize) -> Result<(), JsValue> {
        let unit = parse_unit(unit)?;
        self.formatter = self.formatter.clone().with_precision(unit, decimals);
        Ok(())
    }

    /// Convert a number; returns the unrounded value
    #[wasm_bindgen]
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, JsValue> {
        let converter = self.converter();
        converter
            .convert(value, parse_unit(from)?, parse_unit(to)?)
            .map_err(js_error)
    }

    /// Convert a number and return display text such as "1.5rem"
    #[wasm_bindgen]
    pub fn convert_formatted(&self, value: f64, from: &str, to: &str) -> Result<String, JsValue> {
        let result = self
            .converter()
            .convert_formatted(value, parse_unit(from)?, parse_unit(to)?)
            .map_err(js_error)?;
        Ok(result.to_string())
    }

    /// Convert a literal such as "24px" into every resolvable unit
    /// Returns JSON string array of {value, unit, formatted}
    #[wasm_bindgen]
    pub fn convert_all(&self, literal: &str) -> Result<String, JsValue> {
        let (value, from) = parse_length(literal).map_err(js_error)?;
        let results = self
            .converter()
            .convert_all(value, from)
            .map_err(js_error)?;

        serde_json::to_string(&results)
            .map_err(|e| js_error(format!("Failed to serialize results: {}", e)))
    }

    /// Rewrite every `from` value in a block of CSS
    #[wasm_bindgen]
    pub fn rewrite(&self, css: &str, from: &str, to: &str) -> Result<String, JsValue> {
        BulkCodeRewriter::new(parse_unit(from)?, parse_unit(to)?)
            .with_formatter(self.formatter.clone())
            .rewrite(css, &self.context)
            .map_err(js_error)
    }

    /// Unit tags for the unit pickers
    #[wasm_bindgen]
    pub fn supported_units(&self) -> js_sys::Array {
        Unit::ALL
            .iter()
            .map(|unit| JsValue::from_str(unit.as_str()))
            .collect()
    }
}

impl CssUnitsWasm {
    fn converter(&self) -> UnitConverter {
        UnitConverter::new(self.context.clone()).with_formatter(self.formatter.clone())
    }
}
