//! GeoJSON export format
//!
//! Turns a [`FeatureCollection`] into GeoJSON bytes. Rings stay open by
//! default, exactly as the pipeline produces them; strict GeoJSON readers
//! want the first point repeated at the end, which
//! [`GeoJsonExporter::with_closed_rings`] takes care of.

use glyphgeo_core::{
    error::{ExportError, Result},
    feature::{FeatureCollection, FeatureCollectionView},
    traits::Exporter,
};

/// GeoJSON exporter for feature collections
///
/// # Examples
///
/// ```ignore
/// use glyphgeo_export::GeoJsonExporter;
///
/// let exporter = GeoJsonExporter::new().with_closed_rings();
/// let geojson = exporter.export_string(&collection)?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonExporter {
    /// Whether to pretty-print the JSON
    pretty: bool,
    /// Whether to repeat each ring's first point at its end
    close_rings: bool,
}

impl GeoJsonExporter {
    /// Compact output, open rings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a GeoJSON exporter with pretty-printing enabled
    pub fn with_pretty_print() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    /// Repeat each ring's first point at its end
    pub fn with_closed_rings(mut self) -> Self {
        self.close_rings = true;
        self
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    pub fn closes_rings(&self) -> bool {
        self.close_rings
    }

    /// Export as a UTF-8 string
    pub fn export_string(&self, collection: &FeatureCollection) -> Result<String> {
        let view = FeatureCollectionView::new(collection, self.close_rings);
        let json = if self.pretty {
            serde_json::to_string_pretty(&view)
        } else {
            serde_json::to_string(&view)
        }
        .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;

        log::debug!(
            "Exported {} features as {} bytes of GeoJSON",
            collection.len(),
            json.len()
        );
        Ok(json)
    }
}

impl Exporter for GeoJsonExporter {
    fn name(&self) -> &'static str {
        "geojson"
    }

    fn export(&self, collection: &FeatureCollection) -> Result<Vec<u8>> {
        self.export_string(collection).map(String::into_bytes)
    }

    fn extension(&self) -> &'static str {
        "geojson"
    }

    fn mime_type(&self) -> &'static str {
        "application/geo+json"
    }
}
