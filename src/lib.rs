pub mod config;
pub mod rewrite;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use rewrite::{rewrite, BulkCodeRewriter, RewriteOutcome};
pub use units::{
    convert, convert_all, format, parse_length, ConversionContext, ConversionError,
    ConversionResult, Dimensions, Formatter, PropertyType, Unit, UnitConverter, UnitKind,
};
