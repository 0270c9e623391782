use skrifa::GlyphId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("cannot load outline for glyph {glyph}: {reason}")]
    Extraction { glyph: GlyphId, reason: String },
    #[error("composite glyph {glyph} nests too deeply")]
    CompositeDepth { glyph: GlyphId },
}

impl FontError {
    /// True for errors that prevent a [`Font`](crate::Font) from being built at all.
    pub fn is_construction(&self) -> bool {
        matches!(self, FontError::Io(_) | FontError::Parse(_))
    }

    pub(crate) fn extraction(glyph: GlyphId, reason: impl ToString) -> Self {
        FontError::Extraction {
            glyph,
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FontError>;
