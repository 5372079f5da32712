//! Moving the finished run onto its anchor
//!
//! The offset depends on the extent of the whole run, so this is a single
//! pass over geometry that is already built.

use crate::{
    error::Result,
    feature::FeatureCollection,
    types::{BoundingBox, Point, Vec2},
};

/// `anchor - center(bbox)`, or [`EmptyGeometry`](crate::GlyphGeoError::EmptyGeometry) for an empty box
pub fn offset(bbox: &BoundingBox, anchor: Point) -> Result<Vec2> {
    Ok(anchor - bbox.require_center()?)
}

/// Move every coordinate so the box's center lands on `anchor`
///
/// Returns the offset that was applied.
pub fn recenter(
    collection: &mut FeatureCollection,
    bbox: &BoundingBox,
    anchor: Point,
) -> Result<Vec2> {
    let delta = offset(bbox, anchor)?;
    collection.translate(delta);
    Ok(delta)
}
