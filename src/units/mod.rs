// CSS length units and the pixel-pivot converter
// Every conversion reads only the context it is handed; hosts sample viewport
// and container sizes themselves and pass them in.

pub mod context;
pub mod converter;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod table;
pub mod types;

#[cfg(test)]
mod tests;

pub use context::{ConversionContext, Dimensions, PropertyType, DEFAULT_ROOT_FONT_SIZE};
pub use converter::{convert, convert_all, from_px, to_px, UnitConverter};
pub use detector::{looks_like_length, parse_length};
pub use error::ConversionError;
pub use formatter::{default_precision, format, Formatter};
pub use table::px_per_unit;
pub use types::{ConversionResult, Unit, UnitKind};
