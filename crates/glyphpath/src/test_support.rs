//! Test support utilities for glyphpath.
//!
//! This module provides an in-memory glyph source and a recording drawing
//! target. They are useful for testing layout without font files, but are
//! not part of the stable API.

use std::collections::{HashMap, HashSet};

use skrifa::GlyphId;

use crate::{FontError, GlyphBuf, GlyphSource, OutlinePoint, PathTarget, Result};

/// A glyph source backed by hash maps.
///
/// Coordinates, advances and kerning are stored already scaled, so the
/// `scale` argument of every [`GlyphSource`] method is ignored.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    chars: HashMap<char, GlyphId>,
    outlines: HashMap<GlyphId, Vec<Vec<OutlinePoint>>>,
    advances: HashMap<GlyphId, i32>,
    kerning: HashMap<(GlyphId, GlyphId), i32>,
    broken: HashSet<GlyphId>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `ch` to glyph `id` with the given advance and contours.
    pub fn with_glyph(
        mut self,
        ch: char,
        id: u32,
        advance: i32,
        contours: Vec<Vec<OutlinePoint>>,
    ) -> Self {
        let id = GlyphId::new(id);
        self.chars.insert(ch, id);
        self.outlines.insert(id, contours);
        self.advances.insert(id, advance);
        self
    }

    /// Maps `ch` to glyph `id` whose outline always fails to load.
    pub fn with_broken_glyph(mut self, ch: char, id: u32, advance: i32) -> Self {
        let id = GlyphId::new(id);
        self.chars.insert(ch, id);
        self.advances.insert(id, advance);
        self.broken.insert(id);
        self
    }

    pub fn with_kerning(mut self, left: u32, right: u32, value: i32) -> Self {
        self.kerning
            .insert((GlyphId::new(left), GlyphId::new(right)), value);
        self
    }
}

impl GlyphSource for MemorySource {
    fn glyph_index(&self, ch: char) -> GlyphId {
        self.chars.get(&ch).copied().unwrap_or(GlyphId::NOTDEF)
    }

    fn load_outline(&self, _scale: i32, glyph: GlyphId, buf: &mut GlyphBuf) -> Result<()> {
        buf.clear();
        if self.broken.contains(&glyph) {
            return Err(FontError::extraction(glyph, "broken test glyph"));
        }
        for contour in self.outlines.get(&glyph).into_iter().flatten() {
            buf.push_contour(contour);
        }
        Ok(())
    }

    fn kerning(&self, _scale: i32, left: GlyphId, right: GlyphId) -> i32 {
        self.kerning.get(&(left, right)).copied().unwrap_or(0)
    }

    fn advance_width(&self, _scale: i32, glyph: GlyphId) -> i32 {
        self.advances.get(&glyph).copied().unwrap_or(0)
    }
}

/// A drawing command captured by [`RecordingTarget`].
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Move(f64, f64),
    Line(f64, f64),
    Quad(f64, f64, f64, f64),
}

/// A drawing target that remembers every call.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub commands: Vec<Command>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathTarget for RecordingTarget {
    type Error = FontError;

    fn move_to(&mut self, x: f64, y: f64) -> std::result::Result<(), Self::Error> {
        self.commands.push(Command::Move(x, y));
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> std::result::Result<(), Self::Error> {
        self.commands.push(Command::Line(x, y));
        Ok(())
    }

    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) -> std::result::Result<(), Self::Error> {
        self.commands.push(Command::Quad(cx, cy, x, y));
        Ok(())
    }
}
