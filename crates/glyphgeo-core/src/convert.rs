//! The one operation that drives text through every stage

use crate::{
    error::{GlyphGeoError, Result},
    feature::FeatureCollection,
    layout::LayoutCursor,
    recenter,
    traits::OutlineSource,
    ConvertParams,
};

/// Convert a run of text into polygons centered on `params.anchor`
///
/// Glyphs are laid out left to right, one per character. Each polygon
/// becomes one feature carrying `params.properties`. Text that draws
/// no polygon (empty, only blank glyphs, or only orphan holes) fails with
/// [`GlyphGeoError::EmptyGeometry`]; no partial collection is ever
/// returned.
///
/// ```ignore
/// let font = glyphgeo_fontdb::Font::from_file("NotoSans-Regular.ttf")?;
/// let params = ConvertParams::default().with_anchor(114.364, 30.513);
/// let collection = convert(&font, "Hello", &params)?;
/// ```
pub fn convert<S: OutlineSource + ?Sized>(
    source: &S,
    text: &str,
    params: &ConvertParams,
) -> Result<FeatureCollection> {
    source.validate()?;
    params.validate()?;

    let scale = params.size.scale(source.units_per_em());
    log::debug!(
        "Converting {} chars: scale={}, segments={}",
        text.chars().count(),
        scale,
        params.segments
    );

    let mut cursor = LayoutCursor::new(scale, params.segments);
    let mut polygons = Vec::new();
    for ch in text.chars() {
        polygons.extend(cursor.place(source, ch)?);
    }

    // Orphan holes widen the box without producing a polygon
    let bbox = *cursor.bounding_box();
    if bbox.is_empty() || polygons.is_empty() {
        log::debug!("Text {:?} produced no polygons", text);
        return Err(GlyphGeoError::EmptyGeometry);
    }

    let mut collection = FeatureCollection::assemble(polygons, &params.properties);
    let delta = recenter::recenter(&mut collection, &bbox, params.anchor)?;

    log::debug!(
        "Converted into {} features ({} rings), offset ({:.6}, {:.6})",
        collection.len(),
        collection.ring_count(),
        delta.x,
        delta.y
    );
    Ok(collection)
}
