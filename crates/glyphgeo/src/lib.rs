//! Glyphgeo - text in any font, as polygons on a map
//!
//! Glyphgeo lays out a run of text, flattens every glyph outline into
//! rings, groups the rings into polygons with holes and centers the result
//! on an anchor point. The output is a GeoJSON-style feature collection,
//! ready for any map that draws polygons.
//!
//! # Example
//!
//! ```ignore
//! use glyphgeo::prelude::*;
//!
//! let params = ConvertParams::default()
//!     .with_anchor(114.364_212_4, 30.512_943)
//!     .with_size(TextSize::ground_meters(40.0));
//! let geojson = glyphgeo::convert_file_to_geojson("NotoSans-Regular.ttf", "Old Town", &params)?;
//! ```
//!
//! # Feature Flags
//!
//! - `fontdb`: load TrueType/OpenType files (default)
//! - `export`: GeoJSON serialization (default)

#[cfg(feature = "fontdb")]
use std::path::Path;

pub use glyphgeo_core::{
    convert, error, feature, flatten, layout, outline, recenter, source, traits, types,
    ConvertParams, Feature, FeatureCollection, GlyphGeoError, Properties, Result,
    StaticOutlines, TextSize,
};

#[cfg(feature = "fontdb")]
pub use glyphgeo_fontdb as fontdb;

#[cfg(feature = "export")]
pub use glyphgeo_export as export;

/// Common imports for typical usage
pub mod prelude {
    pub use glyphgeo_core::{
        error::{GlyphGeoError, Result},
        traits::{Exporter, OutlineSource},
        types::{GlyphOutline, PathCommand, Point, Polygon},
        ConvertParams, FeatureCollection, Properties, StaticOutlines, TextSize,
    };

    #[cfg(feature = "export")]
    pub use glyphgeo_export::GeoJsonExporter;

    #[cfg(feature = "fontdb")]
    pub use glyphgeo_fontdb::Font;
}

/// Load a font file and convert `text` with it
///
/// Loading failures surface as [`GlyphGeoError::FontLoad`] unchanged.
#[cfg(feature = "fontdb")]
pub fn convert_file(
    path: impl AsRef<Path>,
    text: &str,
    params: &ConvertParams,
) -> Result<FeatureCollection> {
    let path = path.as_ref();
    log::debug!("Converting {:?} with {}", text, path.display());
    let font = glyphgeo_fontdb::Font::from_file(path)?;
    glyphgeo_core::convert(&font, text, params)
}

/// Convert `text` and serialize the collection as compact GeoJSON
///
/// Rings are closed in the output, as GeoJSON readers expect.
#[cfg(feature = "export")]
pub fn convert_to_geojson<S: traits::OutlineSource + ?Sized>(
    source: &S,
    text: &str,
    params: &ConvertParams,
) -> Result<String> {
    let collection = glyphgeo_core::convert(source, text, params)?;
    glyphgeo_export::GeoJsonExporter::new()
        .with_closed_rings()
        .export_string(&collection)
}

/// [`convert_file`] followed by GeoJSON serialization
#[cfg(all(feature = "fontdb", feature = "export"))]
pub fn convert_file_to_geojson(
    path: impl AsRef<Path>,
    text: &str,
    params: &ConvertParams,
) -> Result<String> {
    let font = glyphgeo_fontdb::Font::from_file(path)?;
    convert_to_geojson(&font, text, params)
}
