use skrifa::GlyphId;

use crate::Result;

/// A glyph outline point in scaled font units (26.6 fixed point), Y up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutlinePoint {
    pub x: i32,
    pub y: i32,
    pub on_curve: bool,
}

impl OutlinePoint {
    pub const fn new(x: i32, y: i32, on_curve: bool) -> Self {
        Self { x, y, on_curve }
    }

    pub const fn on(x: i32, y: i32) -> Self {
        Self::new(x, y, true)
    }

    pub const fn off(x: i32, y: i32) -> Self {
        Self::new(x, y, false)
    }
}

/// Scratch storage for one glyph outline.
///
/// `ends` holds exclusive end indices into `points`, one per contour. The
/// buffer keeps its allocations across [`clear`](Self::clear) so it can be
/// reused for every glyph of a layout.
#[derive(Clone, Debug, Default)]
pub struct GlyphBuf {
    pub points: Vec<OutlinePoint>,
    pub ends: Vec<usize>,
}

impl GlyphBuf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.ends.clear();
    }

    /// Appends one closed contour.
    pub fn push_contour(&mut self, points: &[OutlinePoint]) {
        self.points.extend_from_slice(points);
        self.ends.push(self.points.len());
    }

    pub fn contour_count(&self) -> usize {
        self.ends.len()
    }

    pub fn contours(&self) -> impl Iterator<Item = &[OutlinePoint]> + '_ {
        let mut start = 0;
        self.ends.iter().map(move |&end| {
            let end = end.min(self.points.len());
            let contour = &self.points[start.min(end)..end];
            start = end;
            contour
        })
    }
}

/// The parsed font behind a [`Font`](crate::Font).
///
/// `scale` is the fixed-point scale from [`ttscale`](crate::units::ttscale);
/// every returned quantity is a font unit value multiplied by `scale` and
/// divided by units per em. Outlines are always loaded without hinting.
pub trait GlyphSource {
    /// Glyph for a character; unmapped characters resolve to `.notdef`.
    fn glyph_index(&self, ch: char) -> GlyphId;

    /// Replaces the contents of `buf` with the outline of `glyph`.
    ///
    /// On error the buffer contents are unspecified.
    fn load_outline(&self, scale: i32, glyph: GlyphId, buf: &mut GlyphBuf) -> Result<()>;

    fn kerning(&self, scale: i32, left: GlyphId, right: GlyphId) -> i32;

    fn advance_width(&self, scale: i32, glyph: GlyphId) -> i32;
}
