//! [`GlyphSource`] over a TrueType (`glyf`) font file.
//!
//! Table parsing is delegated to `skrifa` and its raw `read-fonts` layer;
//! this module only flattens glyph outlines, scales them and sums kerning.

use skrifa::{
    charmap::Charmap,
    instance::{LocationRef, Size},
    metrics::GlyphMetrics,
    raw::{
        tables::{
            glyf::{Anchor, Glyf, Glyph},
            kern::{Kern, SubtableKind},
            loca::Loca,
        },
        FontRef, ReadError, TableProvider,
    },
    GlyphId, MetadataProvider,
};

use crate::{
    error::{FontError, Result},
    outline::{GlyphBuf, GlyphSource, OutlinePoint},
    units::scale_funits,
};

/// Composite glyphs nested deeper than this are rejected.
pub const MAX_COMPOSITE_DEPTH: usize = 32;

/// A TrueType font borrowed from its file bytes.
///
/// The character map, metrics and outline tables are resolved once when the
/// source is created.
pub struct TrueTypeSource<'a> {
    charmap: Charmap<'a>,
    metrics: GlyphMetrics<'a>,
    loca: Loca<'a>,
    glyf: Glyf<'a>,
    kern: Option<Kern<'a>>,
    units_per_em: u16,
    num_glyphs: u32,
}

impl<'a> TrueTypeSource<'a> {
    /// Parses `data`, checking every table that layout depends on.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let font = FontRef::new(data).map_err(parse_error)?;
        Self::from_font(&font)
    }

    /// Builds a source over an already parsed font, e.g. one member of a
    /// font collection.
    pub fn from_font(font: &FontRef<'a>) -> Result<Self> {
        let units_per_em = font.head().map_err(parse_error)?.units_per_em();
        if units_per_em == 0 {
            return Err(FontError::Parse("head: units per em is zero".into()));
        }
        let num_glyphs = font.maxp().map_err(parse_error)?.num_glyphs() as u32;
        let loca = font.loca(None).map_err(parse_error)?;
        let glyf = font.glyf().map_err(parse_error)?;
        font.cmap().map_err(parse_error)?;
        font.hhea().map_err(parse_error)?;
        font.hmtx().map_err(parse_error)?;
        let kern = match font.kern() {
            Ok(kern) => Some(kern),
            Err(ReadError::TableIsMissing(_)) => None,
            Err(e) => {
                log::debug!("ignoring malformed kern table: {e}");
                None
            }
        };
        log::debug!(
            "loaded font: {num_glyphs} glyphs, {units_per_em} units per em, kern table: {}",
            kern.is_some()
        );
        Ok(Self {
            charmap: font.charmap(),
            metrics: font.glyph_metrics(Size::unscaled(), LocationRef::default()),
            loca,
            glyf,
            kern,
            units_per_em,
            num_glyphs,
        })
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    pub fn num_glyphs(&self) -> u32 {
        self.num_glyphs
    }

    /// Unscaled kerning between two glyphs, in font units.
    ///
    /// Values of every horizontal subtable add up; cross-stream and vertical
    /// subtables are skipped, as are the state machines of format 1.
    pub fn kerning_funits(&self, left: GlyphId, right: GlyphId) -> i32 {
        let Some(kern) = &self.kern else {
            return 0;
        };
        kern.subtables()
            .filter_map(std::result::Result::ok)
            .filter(|subtable| subtable.is_horizontal() && !subtable.is_cross_stream())
            .filter_map(|subtable| match subtable.kind().ok()? {
                SubtableKind::Format0(pairs) => pairs.kerning(left, right).map(i32::from),
                SubtableKind::Format2(classes) => classes.kerning(left, right).map(i32::from),
                SubtableKind::Format3(classes) => classes.kerning(left, right).map(i32::from),
                _ => None,
            })
            .sum()
    }

    /// Appends the unscaled outline of `glyph` to `out`, flattening composites.
    fn collect(&self, glyph: GlyphId, depth: usize, out: &mut GlyphBuf) -> Result<()> {
        if depth > MAX_COMPOSITE_DEPTH {
            return Err(FontError::CompositeDepth { glyph });
        }
        let outline = self
            .loca
            .get_glyf(glyph, &self.glyf)
            .map_err(|e| FontError::extraction(glyph, e))?;
        match outline {
            // no outline data, e.g. a space
            None => Ok(()),
            Some(Glyph::Simple(simple)) => {
                let n_points = simple.num_points();
                let base = out.points.len();
                out.points.extend(
                    simple
                        .points()
                        .map(|p| OutlinePoint::new(p.x.into(), p.y.into(), p.on_curve)),
                );
                if out.points.len() - base != n_points {
                    return Err(FontError::extraction(glyph, "truncated point data"));
                }
                let mut last = 0;
                for end in simple.end_pts_of_contours() {
                    let end = end.get() as usize + 1;
                    if end < last || end > n_points {
                        return Err(FontError::extraction(glyph, "bad contour end index"));
                    }
                    out.ends.push(base + end);
                    last = end;
                }
                Ok(())
            }
            Some(Glyph::Composite(composite)) => {
                let mut child = GlyphBuf::new();
                for component in composite.components() {
                    child.clear();
                    self.collect(component.glyph.into(), depth + 1, &mut child)?;

                    let t = &component.transform;
                    let (xx, yx, xy, yy) =
                        (t.xx.to_f32(), t.yx.to_f32(), t.xy.to_f32(), t.yy.to_f32());
                    if (xx, yx, xy, yy) != (1.0, 0.0, 0.0, 1.0) {
                        for p in &mut child.points {
                            let (x, y) = (p.x as f32, p.y as f32);
                            p.x = (xx * x + xy * y).round() as i32;
                            p.y = (yx * x + yy * y).round() as i32;
                        }
                    }

                    let (dx, dy) = match component.anchor {
                        Anchor::Offset { x, y } => (i32::from(x), i32::from(y)),
                        Anchor::Point { base, component: point } => {
                            let (Some(b), Some(c)) = (
                                out.points.get(base as usize),
                                child.points.get(point as usize),
                            ) else {
                                return Err(FontError::extraction(
                                    glyph,
                                    "anchor point out of range",
                                ));
                            };
                            (b.x - c.x, b.y - c.y)
                        }
                    };

                    let base = out.points.len();
                    out.points.extend(child.points.iter().map(|p| OutlinePoint {
                        x: p.x + dx,
                        y: p.y + dy,
                        on_curve: p.on_curve,
                    }));
                    out.ends.extend(child.ends.iter().map(|end| base + end));
                }
                Ok(())
            }
        }
    }
}

impl GlyphSource for TrueTypeSource<'_> {
    fn glyph_index(&self, ch: char) -> GlyphId {
        self.charmap.map(ch).unwrap_or(GlyphId::NOTDEF)
    }

    fn load_outline(&self, scale: i32, glyph: GlyphId, buf: &mut GlyphBuf) -> Result<()> {
        buf.clear();
        if glyph.to_u32() >= self.num_glyphs {
            return Err(FontError::extraction(glyph, "glyph id out of range"));
        }
        self.collect(glyph, 0, buf)?;
        for p in &mut buf.points {
            p.x = scale_funits(p.x, scale, self.units_per_em);
            p.y = scale_funits(p.y, scale, self.units_per_em);
        }
        log::debug!(
            "glyph {glyph}: {} points in {} contours",
            buf.points.len(),
            buf.contour_count()
        );
        Ok(())
    }

    fn kerning(&self, scale: i32, left: GlyphId, right: GlyphId) -> i32 {
        scale_funits(self.kerning_funits(left, right), scale, self.units_per_em)
    }

    fn advance_width(&self, scale: i32, glyph: GlyphId) -> i32 {
        self.metrics
            .advance_width(glyph)
            .map(|advance| scale_funits(advance.round() as i32, scale, self.units_per_em))
            .unwrap_or(0)
    }
}

fn parse_error(e: ReadError) -> FontError {
    FontError::Parse(e.to_string())
}
