//! The contracts at the edges of the pipeline
//!
//! - [`OutlineSource`] - where glyph outlines come from
//! - [`Exporter`] - where finished feature collections go

use crate::{
    error::{GlyphGeoError, Result},
    feature::FeatureCollection,
    types::GlyphOutline,
};

/// Your window into a font's outlines
///
/// The pipeline asks for one character at a time and expects the outline
/// already positioned on the baseline: every x moved right by `x_offset`
/// after scaling, every coordinate multiplied by `scale`, and y pointing
/// down the way font path getters report it. The advance width comes back
/// in font units.
///
/// ```ignore
/// struct MyFont;
///
/// impl OutlineSource for MyFont {
///     fn units_per_em(&self) -> u16 {
///         2048
///     }
///
///     fn glyph_outline(&self, ch: char, x_offset: f64, scale: f64) -> Result<GlyphOutline> {
///         Ok(GlyphOutline::blank(1024.0))
///     }
/// }
/// ```
pub trait OutlineSource {
    /// The font's internal grid size
    fn units_per_em(&self) -> u16;

    /// Outline for `ch`, positioned at `x_offset` and scaled by `scale`
    ///
    /// Characters the font lacks should come back as whatever the font
    /// draws for missing glyphs.
    fn glyph_outline(&self, ch: char, x_offset: f64, scale: f64) -> Result<GlyphOutline>;

    /// Check the capability contract before any work starts
    fn validate(&self) -> Result<()> {
        if self.units_per_em() == 0 {
            return Err(GlyphGeoError::InvalidFontHandle(
                "units per em must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

impl<T: OutlineSource + ?Sized> OutlineSource for &T {
    fn units_per_em(&self) -> u16 {
        (**self).units_per_em()
    }

    fn glyph_outline(&self, ch: char, x_offset: f64, scale: f64) -> Result<GlyphOutline> {
        (**self).glyph_outline(ch, x_offset, scale)
    }

    fn validate(&self) -> Result<()> {
        (**self).validate()
    }
}

impl<T: OutlineSource + ?Sized> OutlineSource for std::sync::Arc<T> {
    fn units_per_em(&self) -> u16 {
        (**self).units_per_em()
    }

    fn glyph_outline(&self, ch: char, x_offset: f64, scale: f64) -> Result<GlyphOutline> {
        (**self).glyph_outline(ch, x_offset, scale)
    }

    fn validate(&self) -> Result<()> {
        (**self).validate()
    }
}

/// The final step: features become bytes
pub trait Exporter {
    /// Who are you?
    fn name(&self) -> &'static str;

    /// Encode the collection
    fn export(&self, collection: &FeatureCollection) -> Result<Vec<u8>>;

    /// What file extension should be used?
    fn extension(&self) -> &'static str;

    /// What MIME type identifies your format?
    fn mime_type(&self) -> &'static str;
}
