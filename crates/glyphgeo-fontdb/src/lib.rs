//! Where fonts come from: loading and outline extraction for glyphgeo
//!
//! The core pipeline never touches files. This crate is the adapter that
//! does: it reads TrueType/OpenType data from disk or memory, checks that
//! the face actually has outlines, and serves positioned glyph outlines
//! through [`OutlineSource`].
//!
//! ## Memory Management
//!
//! Fonts store their raw data and create `FontRef` views on demand for
//! parsing, which keeps `Font` free of self-references and supports TTC
//! collections with multiple faces.

use std::fs;
use std::path::Path;

use read_fonts::{FontRef as ReadFontRef, TableProvider};
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::DrawSettings;
use skrifa::{GlyphId, MetadataProvider};

use glyphgeo_core::{
    error::{FontLoadError, GlyphGeoError, Result},
    traits::OutlineSource,
    types::GlyphOutline,
};

pub mod pen;

pub use pen::GeoPen;

/// Largest font file we agree to read (50MB)
pub const MAX_FONT_SIZE: u64 = 50 * 1024 * 1024;

/// A font brought into memory, ready to hand out outlines
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("bytes", &self.data.len())
            .field("face_index", &self.face_index)
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}

impl Font {
    /// Opens a font file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face from a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)
            .map_err(|_| FontLoadError::FileNotFound(path.display().to_string()))?;
        if metadata.len() > MAX_FONT_SIZE {
            return Err(FontLoadError::NotSupported(format!(
                "{} is {} bytes, larger than {} allowed",
                path.display(),
                metadata.len(),
                MAX_FONT_SIZE
            ))
            .into());
        }

        let data =
            fs::read(path).map_err(|_| FontLoadError::FileNotFound(path.display().to_string()))?;
        log::debug!("Read {} bytes from {}", data.len(), path.display());

        Self::from_data_index(data, face_index)
    }

    /// Turns raw font bytes into something we can work with
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_index(data, 0)
    }

    /// Turns raw font bytes into a specific face (for TTC collections)
    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let font_ref =
            ReadFontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;

        // A face without a usable head table loads, but fails validation
        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or(0);

        Ok(Font {
            data,
            face_index,
            units_per_em,
        })
    }

    /// Returns the face index for TTC collections (0 for single fonts)
    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn read_ref(&self) -> Result<ReadFontRef<'_>> {
        ReadFontRef::from_index(&self.data, self.face_index)
            .map_err(|e| GlyphGeoError::InvalidFontHandle(e.to_string()))
    }

    fn skrifa_ref(&self) -> Result<skrifa::FontRef<'_>> {
        skrifa::FontRef::from_index(&self.data, self.face_index)
            .map_err(|e| GlyphGeoError::InvalidFontHandle(e.to_string()))
    }

    /// Finds which glyph draws this character, `.notdef` when none does
    pub fn glyph_id(&self, ch: char) -> Result<GlyphId> {
        Ok(self
            .skrifa_ref()?
            .charmap()
            .map(ch)
            .unwrap_or(GlyphId::NOTDEF))
    }

    /// Advance width in font units
    pub fn advance_width(&self, glyph_id: GlyphId) -> Result<f64> {
        let font = self.skrifa_ref()?;
        let advance = font
            .glyph_metrics(Size::unscaled(), LocationRef::default())
            .advance_width(glyph_id);
        Ok(match advance {
            Some(advance) => f64::from(advance),
            None => {
                log::warn!("No advance width for glyph {}, using 0", glyph_id.to_u32());
                0.0
            }
        })
    }

    /// Counts how many glyphs this font contains
    pub fn glyph_count(&self) -> Option<u32> {
        self.read_ref()
            .ok()
            .and_then(|font| font.maxp().ok().map(|maxp| u32::from(maxp.num_glyphs())))
    }
}

impl OutlineSource for Font {
    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_outline(&self, ch: char, x_offset: f64, scale: f64) -> Result<GlyphOutline> {
        let font = self.skrifa_ref()?;
        let glyph_id = self.glyph_id(ch)?;
        let advance_width = self.advance_width(glyph_id)?;

        let mut pen = GeoPen::new(x_offset, scale);
        match font.outline_glyphs().get(glyph_id) {
            Some(glyph) => {
                let settings = DrawSettings::unhinted(Size::unscaled(), LocationRef::default());
                glyph.draw(settings, &mut pen).map_err(|e| {
                    GlyphGeoError::InvalidFontHandle(format!(
                        "glyph {} of {:?}: {}",
                        glyph_id.to_u32(),
                        ch,
                        e
                    ))
                })?;
            }
            // Missing glyph = empty outline
            None => log::trace!("No outline for glyph {}", glyph_id.to_u32()),
        }

        Ok(GlyphOutline::new(pen.finish(), advance_width))
    }

    fn validate(&self) -> Result<()> {
        if self.units_per_em == 0 {
            return Err(GlyphGeoError::InvalidFontHandle(
                "font has no usable units per em".into(),
            ));
        }
        let font = self.read_ref()?;
        let has_outlines = font.glyf().is_ok() || font.cff().is_ok() || font.cff2().is_ok();
        if !has_outlines {
            return Err(GlyphGeoError::InvalidFontHandle(
                "font has no glyf, CFF or CFF2 outlines".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_data_is_invalid() {
        let result = Font::from_data(vec![0; 100]);
        assert!(matches!(
            result,
            Err(GlyphGeoError::FontLoad(FontLoadError::InvalidData))
        ));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = Font::from_file("/definitely/not/here/font.ttf");
        assert!(matches!(
            result,
            Err(GlyphGeoError::FontLoad(FontLoadError::FileNotFound(_)))
        ));
    }
}
