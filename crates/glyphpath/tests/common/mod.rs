//! TrueType fixtures written with `write-fonts`.
#![allow(dead_code)]

use glyphpath::OutlinePoint;
use write_fonts::read::tables::glyf::CurvePoint;
use write_fonts::{
    dump_table,
    tables::{
        cmap::Cmap,
        glyf::{
            Anchor, Bbox, Component, ComponentFlags, CompositeGlyph, Contour,
            GlyfLocaBuilder, Glyph, SimpleGlyph, Transform,
        },
        head::Head,
        hhea::Hhea,
        hmtx::{Hmtx, LongMetric},
        maxp::Maxp,
    },
    types::{FWord, GlyphId, GlyphId16, Tag},
    FontBuilder,
};

/// Collects glyphs, character mappings and kerning for a small font.
///
/// Glyph 0 (`.notdef`) is always empty.
pub struct TestFont {
    units_per_em: u16,
    glyphs: Vec<(u16, Glyph)>,
    cmap: Vec<(char, GlyphId)>,
    kern: Vec<(u16, Vec<(u16, u16, i16)>)>,
    raw: Vec<(Tag, Vec<u8>)>,
    glyf_cut: usize,
}

impl TestFont {
    pub fn new(units_per_em: u16) -> Self {
        Self {
            units_per_em,
            glyphs: vec![(units_per_em / 2, Glyph::Empty)],
            cmap: Vec::new(),
            kern: Vec::new(),
            raw: Vec::new(),
            glyf_cut: 0,
        }
    }

    /// Adds a glyph and returns its id.
    pub fn glyph(&mut self, advance: u16, glyph: impl Into<Glyph>) -> u16 {
        self.glyphs.push((advance, glyph.into()));
        (self.glyphs.len() - 1) as u16
    }

    pub fn empty(&mut self, advance: u16) -> u16 {
        self.glyph(advance, Glyph::Empty)
    }

    pub fn map(&mut self, ch: char, glyph: u16) -> &mut Self {
        self.cmap.push((ch, GlyphId::new(glyph.into())));
        self
    }

    /// Adds a format 0 subtable with the given coverage bits to a version 0
    /// `kern` table.
    pub fn kern(&mut self, coverage: u16, pairs: &[(u16, u16, i16)]) -> &mut Self {
        let mut pairs = pairs.to_vec();
        pairs.sort_by_key(|&(left, right, _)| (left, right));
        self.kern.push((coverage, pairs));
        self
    }

    /// Stores `data` verbatim under `tag`, replacing any generated table.
    pub fn raw_table(&mut self, tag: &[u8; 4], data: &[u8]) -> &mut Self {
        self.raw.push((Tag::new(tag), data.to_vec()));
        self
    }

    /// Cuts `bytes` off the end of `glyf`, so the last glyph runs past it.
    pub fn cut_glyf(&mut self, bytes: usize) -> &mut Self {
        self.glyf_cut = bytes;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut glyphs = GlyfLocaBuilder::new();
        for (_, glyph) in &self.glyphs {
            glyphs.add_glyph(glyph).unwrap();
        }
        let (glyf, loca, loca_format) = glyphs.build();
        let mut glyf = dump_table(&glyf).unwrap();
        glyf.truncate(glyf.len() - self.glyf_cut);

        let num_glyphs = self.glyphs.len() as u16;
        let mut font = FontBuilder::new();
        font.add_table(&Head {
            units_per_em: self.units_per_em,
            index_to_loc_format: loca_format as i16,
            ..Default::default()
        })
        .unwrap();
        font.add_table(&Maxp {
            num_glyphs,
            ..Default::default()
        })
        .unwrap();
        font.add_table(&Hhea {
            ascender: FWord::new((self.units_per_em * 4 / 5) as i16),
            descender: FWord::new(-((self.units_per_em / 5) as i16)),
            number_of_h_metrics: num_glyphs,
            ..Default::default()
        })
        .unwrap();
        font.add_table(&Hmtx {
            h_metrics: self
                .glyphs
                .iter()
                .map(|(advance, _)| LongMetric {
                    advance: *advance,
                    side_bearing: 0,
                })
                .collect(),
            left_side_bearings: Vec::new(),
        })
        .unwrap();
        font.add_table(&Cmap::from_mappings(self.cmap.iter().copied()).unwrap())
            .unwrap();
        font.add_table(&loca).unwrap();
        font.add_raw(Tag::new(b"glyf"), glyf);
        if !self.kern.is_empty() {
            font.add_raw(Tag::new(b"kern"), self.kern_table());
        }
        for (tag, data) in &self.raw {
            font.add_raw(*tag, data.clone());
        }
        font.build()
    }

    fn kern_table(&self) -> Vec<u8> {
        let mut words = vec![0, self.kern.len() as u16];
        for (coverage, pairs) in &self.kern {
            let n = pairs.len() as u16;
            let entry_selector = n.max(1).ilog2() as u16;
            let search_range = 6 << entry_selector;
            words.extend([
                0,
                14 + 6 * n,
                *coverage,
                n,
                search_range,
                entry_selector,
                (6 * n).saturating_sub(search_range),
            ]);
            for &(left, right, value) in pairs {
                words.extend([left, right, value as u16]);
            }
        }
        be_words(&words)
    }
}

/// Big-endian bytes of `words`, for tables `write-fonts` does not write.
pub fn be_words(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}

/// A simple glyph from contours in font units.
pub fn simple(contours: &[&[OutlinePoint]]) -> SimpleGlyph {
    let mut glyph = SimpleGlyph {
        contours: contours
            .iter()
            .map(|points| {
                Contour::from(
                    points
                        .iter()
                        .map(|p| CurvePoint::new(p.x as i16, p.y as i16, p.on_curve))
                        .collect::<Vec<_>>(),
                )
            })
            .collect(),
        ..Default::default()
    };
    glyph.recompute_bounding_box();
    glyph
}

pub fn offset(x: i16, y: i16) -> Anchor {
    Anchor::Offset { x, y }
}

/// Places the component so its point `component` lands on point `base` of
/// the glyph built so far.
pub fn matched(base: u16, component: u16) -> Anchor {
    Anchor::Point { base, component }
}

pub fn composite(components: Vec<(u16, Anchor, Transform)>) -> CompositeGlyph {
    let mut parts = components.into_iter().map(|(glyph, anchor, transform)| {
        (
            Component::new(
                GlyphId16::new(glyph),
                anchor,
                transform,
                ComponentFlags::default(),
            ),
            Bbox::default(),
        )
    });
    let (first, bbox) = parts.next().expect("composite needs a component");
    let mut glyph = CompositeGlyph::new(first, bbox);
    for (component, bbox) in parts {
        glyph.add_component(component, bbox);
    }
    glyph
}
