use std::{fs, path::Path};

use skrifa::GlyphId;

use crate::{
    contour::append_contour,
    error::{FontError, Result},
    outline::{GlyphBuf, GlyphSource},
    path::TextPath,
    truetype::TrueTypeSource,
    units::{funits_to_f64, ttscale, DEFAULT_DPI},
};

/// Size settings used to scale a font.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontOptions {
    pub point_size: f32,
    pub dpi: u32,
}

impl FontOptions {
    pub fn new(point_size: f32) -> Self {
        Self {
            point_size,
            dpi: DEFAULT_DPI,
        }
    }

    pub fn with_dpi(self, dpi: u32) -> Self {
        Self { dpi, ..self }
    }

    pub fn scale(&self) -> i32 {
        ttscale(self.point_size, self.dpi)
    }
}

impl Default for FontOptions {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Layout stopped at a glyph whose outline could not be loaded.
#[derive(Debug, thiserror::Error)]
#[error("layout stopped at {ch:?}: {source}")]
pub struct LayoutError {
    pub ch: char,
    #[source]
    pub source: FontError,
    /// Everything laid out before the failing glyph.
    pub partial: TextPath,
}

/// A scaled font ready for text layout.
///
/// The font owns one outline buffer that every layout call reuses, which is
/// why layout takes `&mut self`. Share a font between threads by giving each
/// thread its own `Font` or by locking it; callers that need `&self` access
/// can use [`create_text_path_with`](Self::create_text_path_with) and bring
/// their own buffer.
pub struct Font<S> {
    source: S,
    scale: i32,
    buf: GlyphBuf,
}

impl<'a> Font<TrueTypeSource<'a>> {
    /// Parses TrueType font bytes at `point_size` and the default DPI.
    pub fn new(data: &'a [u8], point_size: f32) -> Result<Self> {
        Self::from_bytes(data, FontOptions::new(point_size))
    }

    pub fn from_bytes(data: &'a [u8], options: FontOptions) -> Result<Self> {
        let source = TrueTypeSource::new(data)?;
        Ok(Self::with_source(source, options))
    }
}

/// The bytes of a TrueType font file, checked on open.
///
/// Fonts borrow from the file, so one file can hand out fonts at several
/// sizes without reading or copying it again.
#[derive(Clone, Debug)]
pub struct FontFile {
    data: Vec<u8>,
}

impl FontFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read(path.as_ref())?;
        TrueTypeSource::new(&data)?;
        Ok(Self { data })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn source(&self) -> Result<TrueTypeSource<'_>> {
        TrueTypeSource::new(&self.data)
    }

    pub fn font(&self, options: FontOptions) -> Result<Font<TrueTypeSource<'_>>> {
        Font::from_bytes(&self.data, options)
    }
}

impl<S: GlyphSource> Font<S> {
    pub fn with_source(source: S, options: FontOptions) -> Self {
        Self {
            source,
            scale: options.scale(),
            buf: GlyphBuf::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fixed-point scale: pixels per em times 64.
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Appends the outline of `glyph` with its origin at `(dx, dy)`.
    ///
    /// Nothing is appended when the outline fails to load.
    pub fn append_glyph_path(
        &mut self,
        glyph: GlyphId,
        dx: f64,
        dy: f64,
        path: &mut TextPath,
    ) -> Result<()> {
        append_glyph(&self.source, self.scale, &mut self.buf, glyph, dx, dy, path)
    }

    /// Lays out `text` with the left edge of the first glyph's em square and
    /// the baseline meeting at `(x, y)`.
    ///
    /// Most affected pixels end up above and right of that point, but glyphs
    /// with descenders or italic overhang reach below or left of it. If a
    /// glyph outline fails to load, the failure is logged and the path laid
    /// out so far is returned.
    pub fn create_text_path(&mut self, text: &str, x: f64, y: f64) -> TextPath {
        layout(&self.source, self.scale, &mut self.buf, text, x, y).unwrap_or_else(|e| {
            log::warn!("{e}");
            e.partial
        })
    }

    /// Like [`create_text_path`](Self::create_text_path) but hands the
    /// failure back to the caller together with the partial path.
    pub fn try_create_text_path(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
    ) -> std::result::Result<TextPath, LayoutError> {
        layout(&self.source, self.scale, &mut self.buf, text, x, y)
    }

    /// Layout with a caller-owned outline buffer, for shared or reentrant use.
    pub fn create_text_path_with(
        &self,
        buf: &mut GlyphBuf,
        text: &str,
        x: f64,
        y: f64,
    ) -> TextPath {
        layout(&self.source, self.scale, buf, text, x, y).unwrap_or_else(|e| {
            log::warn!("{e}");
            e.partial
        })
    }
}

fn append_glyph<S: GlyphSource>(
    source: &S,
    scale: i32,
    buf: &mut GlyphBuf,
    glyph: GlyphId,
    dx: f64,
    dy: f64,
    path: &mut TextPath,
) -> Result<()> {
    source.load_outline(scale, glyph, buf)?;
    for contour in buf.contours() {
        append_contour(path, contour, dx, dy);
    }
    Ok(())
}

fn layout<S: GlyphSource>(
    source: &S,
    scale: i32,
    buf: &mut GlyphBuf,
    text: &str,
    x: f64,
    y: f64,
) -> std::result::Result<TextPath, LayoutError> {
    let mut path = TextPath::new();
    let mut pen_x = x;
    let mut prev: Option<GlyphId> = None;
    for ch in text.chars() {
        let glyph = source.glyph_index(ch);
        if let Some(prev) = prev {
            pen_x += funits_to_f64(source.kerning(scale, prev, glyph));
        }
        if let Err(err) = append_glyph(source, scale, buf, glyph, pen_x, y, &mut path) {
            return Err(LayoutError {
                ch,
                source: err,
                partial: path,
            });
        }
        pen_x += funits_to_f64(source.advance_width(scale, glyph));
        path.set_width(pen_x - x);
        prev = Some(glyph);
    }
    Ok(path)
}
