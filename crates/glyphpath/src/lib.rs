//! glyphpath: TrueType text to vector paths.
//! Converts quadratic glyph outlines into move/line/curve commands in pixel
//! space and lays strings out with kerning and advance widths.

pub mod contour;
mod error;
mod font;
pub mod outline;
mod path;
pub mod truetype;
pub mod units;
pub use error::{FontError, Result};
pub use font::{Font, FontFile, FontOptions, LayoutError};
pub use outline::{GlyphBuf, GlyphSource, OutlinePoint};
pub use path::{PathOp, Point, TextPath};
pub use skrifa::GlyphId;
pub use truetype::TrueTypeSource;

// Test utilities
pub mod test_support;

/// Something that draws paths, fed by [`TextPath::draw`].
pub trait PathTarget {
    type Error;
    fn move_to(&mut self, x: f64, y: f64) -> std::result::Result<(), Self::Error>;
    fn line_to(&mut self, x: f64, y: f64) -> std::result::Result<(), Self::Error>;
    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) -> std::result::Result<(), Self::Error>;
}
