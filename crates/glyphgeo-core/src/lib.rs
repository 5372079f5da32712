//! Glyphgeo Core: from characters to polygons on a map
//!
//! A run of text goes in, a GeoJSON-style feature collection comes out.
//! Between the two sit five small stages:
//!
//! 1. **Curve Flattening** - quadratic and cubic Béziers become polylines ([`flatten`])
//! 2. **Outline Decomposition** - path commands become closed rings ([`outline`])
//! 3. **Ring Classification** - winding decides what is a shell and what is a hole ([`outline`])
//! 4. **Layout** - a pen walks along the baseline glyph by glyph ([`layout`])
//! 5. **Recentering** - the finished run moves onto its anchor ([`recenter`])
//!
//! The [`feature`] module wraps the result for GeoJSON consumers and
//! [`convert()`] drives the whole thing.
//!
//! ## Quick Start
//!
//! ```rust
//! use glyphgeo_core::{convert, ConvertParams, StaticOutlines};
//! use glyphgeo_core::types::{GlyphOutline, PathCommand, Point};
//!
//! let square = GlyphOutline::new(
//!     vec![
//!         PathCommand::MoveTo(Point::new(0.0, 0.0)),
//!         PathCommand::LineTo(Point::new(0.0, -1000.0)),
//!         PathCommand::LineTo(Point::new(1000.0, -1000.0)),
//!         PathCommand::LineTo(Point::new(1000.0, 0.0)),
//!         PathCommand::Close,
//!     ],
//!     1000.0,
//! );
//! let font = StaticOutlines::new(1000).with_glyph('#', square);
//!
//! let collection = convert(&font, "##", &ConvertParams::default())?;
//! assert_eq!(collection.features.len(), 2);
//! # Ok::<(), glyphgeo_core::GlyphGeoError>(())
//! ```
//!
//! ## Bring Your Own Font
//!
//! The core never parses font files. Anything that implements
//! [`traits::OutlineSource`] can feed it: the `glyphgeo-fontdb` crate does
//! so for TrueType/OpenType files, [`StaticOutlines`] does so for outlines
//! extracted elsewhere.

use std::sync::Arc;

pub mod convert;
pub mod error;
pub mod feature;
pub mod flatten;
pub mod layout;
pub mod outline;
pub mod recenter;
pub mod source;
pub mod traits;

pub use convert::convert;
pub use error::{GlyphGeoError, Result};
pub use feature::{Feature, FeatureCollection};
pub use source::{RawCommand, StaticOutlines};
pub use traits::{Exporter, OutlineSource};

/// The data structures that flow between the stages
pub mod types {
    use crate::error::{GlyphGeoError, Result};

    /// A coordinate pair; `f64` keeps geographic degrees precise
    pub use kurbo::Point;
    pub use kurbo::Vec2;

    /// An implicitly closed ring: the last point connects back to the first
    pub type Ring = Vec<Point>;

    /// One drawing instruction of a glyph outline
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum PathCommand {
        MoveTo(Point),
        LineTo(Point),
        QuadTo(Point, Point),
        CurveTo(Point, Point, Point),
        /// Accepted and ignored, rings close themselves
        Close,
    }

    impl PathCommand {
        /// The point the pen rests on after this command
        pub fn end_point(&self) -> Option<Point> {
            match *self {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
                PathCommand::QuadTo(_, p) | PathCommand::CurveTo(_, _, p) => Some(p),
                PathCommand::Close => None,
            }
        }

        /// Apply `x' = x_offset + x * scale`, `y' = y * scale` to every point
        pub fn transformed(&self, x_offset: f64, scale: f64) -> Self {
            let t = |p: Point| Point::new(x_offset + p.x * scale, p.y * scale);
            match *self {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(t(p)),
                PathCommand::LineTo(p) => PathCommand::LineTo(t(p)),
                PathCommand::QuadTo(c, p) => PathCommand::QuadTo(t(c), t(p)),
                PathCommand::CurveTo(c1, c2, p) => PathCommand::CurveTo(t(c1), t(c2), t(p)),
                PathCommand::Close => PathCommand::Close,
            }
        }
    }

    /// Everything the pipeline needs to know about one character
    ///
    /// Commands arrive y-down (screen orientation) and already positioned;
    /// the advance width stays in font units.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct GlyphOutline {
        pub commands: Vec<PathCommand>,
        pub advance_width: f64,
    }

    impl GlyphOutline {
        pub fn new(commands: Vec<PathCommand>, advance_width: f64) -> Self {
            Self {
                commands,
                advance_width,
            }
        }

        /// An outline with nothing to draw, like a space
        pub fn blank(advance_width: f64) -> Self {
            Self::new(Vec::new(), advance_width)
        }

        pub fn is_empty(&self) -> bool {
            self.commands.is_empty()
        }

        /// Position and scale the commands, leaving the advance untouched
        pub fn transformed(&self, x_offset: f64, scale: f64) -> Self {
            Self {
                commands: self
                    .commands
                    .iter()
                    .map(|cmd| cmd.transformed(x_offset, scale))
                    .collect(),
                advance_width: self.advance_width,
            }
        }
    }

    /// One shell and the holes punched into it
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Polygon {
        pub outer: Ring,
        pub holes: Vec<Ring>,
    }

    impl Polygon {
        pub fn new(outer: Ring) -> Self {
            Self {
                outer,
                holes: Vec::new(),
            }
        }

        /// Outer ring first, then holes in source order
        pub fn rings(&self) -> impl Iterator<Item = &Ring> {
            std::iter::once(&self.outer).chain(self.holes.iter())
        }

        pub fn ring_count(&self) -> usize {
            1 + self.holes.len()
        }

        /// Shift every point of every ring by `offset`
        pub fn translate(&mut self, offset: Vec2) {
            for ring in std::iter::once(&mut self.outer).chain(self.holes.iter_mut()) {
                for point in ring.iter_mut() {
                    *point += offset;
                }
            }
        }
    }

    /// Running extent of everything drawn so far
    ///
    /// Starts empty and grows point by point, so an empty run is
    /// visible as `None` instead of infinities.
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    pub struct BoundingBox {
        extent: Option<kurbo::Rect>,
    }

    impl BoundingBox {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn include(&mut self, point: Point) {
            self.extent = Some(match self.extent {
                Some(rect) => rect.union_pt(point),
                None => kurbo::Rect::from_points(point, point),
            });
        }

        pub fn include_ring(&mut self, ring: &[Point]) {
            for &point in ring {
                self.include(point);
            }
        }

        pub fn is_empty(&self) -> bool {
            self.extent.is_none()
        }

        pub fn rect(&self) -> Option<kurbo::Rect> {
            self.extent
        }

        pub fn min(&self) -> Option<Point> {
            self.extent.map(|r| Point::new(r.x0, r.y0))
        }

        pub fn max(&self) -> Option<Point> {
            self.extent.map(|r| Point::new(r.x1, r.y1))
        }

        pub fn center(&self) -> Option<Point> {
            self.extent.map(|r| r.center())
        }

        /// Fails with [`GlyphGeoError::EmptyGeometry`] when nothing was drawn
        pub fn require_center(&self) -> Result<Point> {
            self.center().ok_or(GlyphGeoError::EmptyGeometry)
        }
    }
}

/// Free-form feature attributes, copied onto every feature of a run
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// Default curve subdivisions per Bézier segment
pub const DEFAULT_SEGMENTS: usize = 10;

/// Default text height in output units
pub const DEFAULT_TEXT_HEIGHT: f64 = 4.0;

/// Ground distance of one degree of latitude, in metres
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// How big the text should come out
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextSize {
    /// Em height directly in output units
    TextHeight(f64),
    /// Em height as a ground distance, emitted in degrees
    GroundSize { size: f64, units_per_degree: f64 },
}

impl TextSize {
    /// Ground size in metres, emitted in degrees
    pub fn ground_meters(size: f64) -> Self {
        TextSize::GroundSize {
            size,
            units_per_degree: METERS_PER_DEGREE,
        }
    }

    /// Em height in output units
    pub fn output_height(&self) -> f64 {
        match *self {
            TextSize::TextHeight(height) => height,
            TextSize::GroundSize {
                size,
                units_per_degree,
            } => size / units_per_degree,
        }
    }

    /// Font units to output units: `size / units_per_em`
    pub fn scale(&self, units_per_em: u16) -> f64 {
        self.output_height() / f64::from(units_per_em)
    }
}

impl Default for TextSize {
    fn default() -> Self {
        TextSize::TextHeight(DEFAULT_TEXT_HEIGHT)
    }
}

/// How a conversion should behave
#[derive(Debug, Clone)]
pub struct ConvertParams {
    /// Where the center of the text's bounding box lands
    pub anchor: types::Point,
    pub size: TextSize,
    /// Polyline samples per curve segment
    pub segments: usize,
    /// Shared by every feature of the run
    pub properties: Arc<Properties>,
}

impl Default for ConvertParams {
    fn default() -> Self {
        Self {
            anchor: types::Point::ORIGIN,
            size: TextSize::default(),
            segments: DEFAULT_SEGMENTS,
            properties: Arc::new(Properties::new()),
        }
    }
}

impl ConvertParams {
    pub fn with_anchor(mut self, x: f64, y: f64) -> Self {
        self.anchor = types::Point::new(x, y);
        self
    }

    pub fn with_size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_text_height(self, height: f64) -> Self {
        self.with_size(TextSize::TextHeight(height))
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Arc::new(properties);
        self
    }

    /// Reject parameters that would poison the geometry with NaN
    pub fn validate(&self) -> Result<()> {
        if self.segments == 0 {
            return Err(GlyphGeoError::Config(
                "curve segments must be at least 1".into(),
            ));
        }
        if !self.anchor.is_finite() {
            return Err(GlyphGeoError::Config(format!(
                "anchor must be finite, got {:?}",
                self.anchor
            )));
        }
        let height = self.size.output_height();
        if !height.is_finite() || height <= 0.0 {
            return Err(GlyphGeoError::Config(format!(
                "text size must be a positive finite number, got {height}"
            )));
        }
        Ok(())
    }
}
