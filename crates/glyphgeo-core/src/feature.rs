//! GeoJSON-shaped output
//!
//! Serializing a [`FeatureCollection`] with serde yields the standard
//! structure:
//!
//! ```json
//! { "type": "FeatureCollection",
//!   "features": [
//!     { "type": "Feature",
//!       "geometry": { "type": "Polygon", "coordinates": [[[x, y], ...], ...] },
//!       "properties": { ... } } ] }
//! ```
//!
//! Rings are written open: the first point is not repeated at the end.
//! Exporters that need literal closure append it themselves.

use std::sync::Arc;

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::{
    types::{BoundingBox, Point, Polygon, Vec2},
    Properties,
};

/// One polygon and the caller's properties
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: Polygon,
    pub properties: Arc<Properties>,
}

impl Feature {
    pub fn new(geometry: Polygon, properties: Arc<Properties>) -> Self {
        Self {
            geometry,
            properties,
        }
    }
}

/// Every feature of a rendered text run, in glyph order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap each polygon with the same shared properties
    pub fn assemble(
        polygons: impl IntoIterator<Item = Polygon>,
        properties: &Arc<Properties>,
    ) -> Self {
        Self {
            features: polygons
                .into_iter()
                .map(|polygon| Feature::new(polygon, Arc::clone(properties)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Rings across all features, shells and holes alike
    pub fn ring_count(&self) -> usize {
        self.features.iter().map(|f| f.geometry.ring_count()).sum()
    }

    /// Extent of every point of every ring
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::new();
        for feature in &self.features {
            for ring in feature.geometry.rings() {
                bbox.include_ring(ring);
            }
        }
        bbox
    }

    /// Shift every coordinate of every feature
    pub fn translate(&mut self, offset: Vec2) {
        for feature in &mut self.features {
            feature.geometry.translate(offset);
        }
    }
}

/// Writes a point as `[x, y]`
struct Position(Point);

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.0.x, self.0.y].serialize(serializer)
    }
}

/// Writes a ring as `[[x, y], ...]`, optionally repeating the first point
pub struct RingCoordinates<'a> {
    ring: &'a [Point],
    closed: bool,
}

impl<'a> RingCoordinates<'a> {
    pub fn new(ring: &'a [Point], closed: bool) -> Self {
        Self { ring, closed }
    }
}

impl Serialize for RingCoordinates<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let closing = match (self.closed, self.ring.first(), self.ring.last()) {
            (true, Some(first), Some(last)) if first != last => Some(*first),
            _ => None,
        };
        let mut seq = serializer.serialize_seq(Some(self.ring.len() + closing.iter().count()))?;
        for &point in self.ring.iter().chain(closing.iter()) {
            seq.serialize_element(&Position(point))?;
        }
        seq.end()
    }
}

/// Writes a polygon geometry object, outer ring first
pub struct PolygonGeometry<'a> {
    polygon: &'a Polygon,
    closed: bool,
}

impl<'a> PolygonGeometry<'a> {
    pub fn new(polygon: &'a Polygon, closed: bool) -> Self {
        Self { polygon, closed }
    }
}

struct PolygonRings<'a>(&'a PolygonGeometry<'a>);

impl Serialize for PolygonRings<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let geometry = self.0;
        let mut seq = serializer.serialize_seq(Some(geometry.polygon.ring_count()))?;
        for ring in geometry.polygon.rings() {
            seq.serialize_element(&RingCoordinates::new(ring, geometry.closed))?;
        }
        seq.end()
    }
}

impl Serialize for PolygonGeometry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Polygon", 2)?;
        state.serialize_field("type", "Polygon")?;
        state.serialize_field("coordinates", &PolygonRings(self))?;
        state.end()
    }
}

/// A feature view with an explicit ring closure convention
pub struct FeatureView<'a> {
    feature: &'a Feature,
    closed: bool,
}

impl<'a> FeatureView<'a> {
    pub fn new(feature: &'a Feature, closed: bool) -> Self {
        Self { feature, closed }
    }
}

impl Serialize for FeatureView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Feature", 3)?;
        state.serialize_field("type", "Feature")?;
        state.serialize_field(
            "geometry",
            &PolygonGeometry::new(&self.feature.geometry, self.closed),
        )?;
        state.serialize_field("properties", &self.feature.properties)?;
        state.end()
    }
}

/// A collection view with an explicit ring closure convention
pub struct FeatureCollectionView<'a> {
    collection: &'a FeatureCollection,
    closed: bool,
}

impl<'a> FeatureCollectionView<'a> {
    pub fn new(collection: &'a FeatureCollection, closed: bool) -> Self {
        Self { collection, closed }
    }
}

struct FeatureList<'a>(&'a FeatureCollectionView<'a>);

impl Serialize for FeatureList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let view = self.0;
        let mut seq = serializer.serialize_seq(Some(view.collection.len()))?;
        for feature in &view.collection.features {
            seq.serialize_element(&FeatureView::new(feature, view.closed))?;
        }
        seq.end()
    }
}

impl Serialize for FeatureCollectionView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FeatureCollection", 2)?;
        state.serialize_field("type", "FeatureCollection")?;
        state.serialize_field("features", &FeatureList(self))?;
        state.end()
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FeatureView::new(self, false).serialize(serializer)
    }
}

impl Serialize for FeatureCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FeatureCollectionView::new(self, false).serialize(serializer)
    }
}
