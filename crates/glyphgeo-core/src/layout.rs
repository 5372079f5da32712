//! The pen that walks the baseline
//!
//! Glyphs are laid out left to right, one per character. The pen starts at
//! zero and moves by `advance_width * scale` after each glyph. Every ring
//! the glyphs produce also lands in the running bounding box, so the
//! extent of the whole run is known the moment the last glyph is done.

use crate::{
    error::Result,
    outline::{self, RingGrouper},
    traits::OutlineSource,
    types::{BoundingBox, Polygon},
};

/// Horizontal pen plus the extent of everything drawn so far
#[derive(Debug, Clone)]
pub struct LayoutCursor {
    pen_x: f64,
    scale: f64,
    segments: usize,
    bbox: BoundingBox,
}

impl LayoutCursor {
    pub fn new(scale: f64, segments: usize) -> Self {
        Self {
            pen_x: 0.0,
            scale,
            segments,
            bbox: BoundingBox::new(),
        }
    }

    pub fn pen_x(&self) -> f64 {
        self.pen_x
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Move the pen past a glyph whose advance is in font units
    pub fn advance(&mut self, advance_width: f64) {
        self.pen_x += advance_width * self.scale;
    }

    /// Draw one character at the pen and move past it
    ///
    /// Every ring, including holes the grouper drops, widens the bounding
    /// box before grouping.
    pub fn place<S: OutlineSource + ?Sized>(
        &mut self,
        source: &S,
        ch: char,
    ) -> Result<Vec<Polygon>> {
        let glyph = source.glyph_outline(ch, self.pen_x, self.scale)?;
        let rings = outline::decompose(&glyph.commands, self.segments);

        log::trace!(
            "Glyph {:?} at x={:.4}: {} commands, {} rings",
            ch,
            self.pen_x,
            glyph.commands.len(),
            rings.len()
        );

        let mut grouper = RingGrouper::new();
        for ring in rings {
            self.bbox.include_ring(&ring);
            grouper.push(ring);
        }

        self.advance(glyph.advance_width);
        Ok(grouper.finish())
    }
}
