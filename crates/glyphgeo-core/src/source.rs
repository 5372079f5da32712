//! Outlines that already live in memory
//!
//! Not every caller has a font file. Some extract outlines with another
//! library, some build them by hand for tests or icons. [`StaticOutlines`]
//! holds such outlines in font units and serves them through
//! [`OutlineSource`] like any parsed font would.
//!
//! Outlines can also arrive as JSON command records, the shape font
//! libraries commonly emit:
//!
//! ```json
//! {
//!   "unitsPerEm": 1000,
//!   "glyphs": {
//!     "I": {
//!       "advanceWidth": 300,
//!       "commands": [
//!         { "type": "M", "x": 0, "y": 0 },
//!         { "type": "L", "x": 0, "y": -700 },
//!         { "type": "L", "x": 100, "y": -700 },
//!         { "type": "L", "x": 100, "y": 0 },
//!         { "type": "Z" }
//!       ]
//!     }
//!   }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::{GlyphGeoError, Result},
    traits::OutlineSource,
    types::{GlyphOutline, PathCommand, Point},
};

/// One command record: a single-letter type plus optional coordinates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCommand {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y2: Option<f64>,
}

impl RawCommand {
    fn point(&self, x: Option<f64>, y: Option<f64>, which: &str) -> Result<Point> {
        match (x, y) {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => Err(GlyphGeoError::UnsupportedPathCommand(format!(
                "'{}' command is missing its {} coordinates",
                self.kind, which
            ))),
        }
    }

    fn end(&self) -> Result<Point> {
        self.point(self.x, self.y, "end")
    }

    fn ctrl1(&self) -> Result<Point> {
        self.point(self.x1, self.y1, "first control")
    }

    fn ctrl2(&self) -> Result<Point> {
        self.point(self.x2, self.y2, "second control")
    }
}

impl TryFrom<&RawCommand> for PathCommand {
    type Error = GlyphGeoError;

    fn try_from(raw: &RawCommand) -> Result<Self> {
        match raw.kind.as_str() {
            "M" => Ok(PathCommand::MoveTo(raw.end()?)),
            "L" => Ok(PathCommand::LineTo(raw.end()?)),
            "Q" => Ok(PathCommand::QuadTo(raw.ctrl1()?, raw.end()?)),
            "C" => Ok(PathCommand::CurveTo(raw.ctrl1()?, raw.ctrl2()?, raw.end()?)),
            "Z" => Ok(PathCommand::Close),
            other => Err(GlyphGeoError::UnsupportedPathCommand(format!(
                "unknown command type '{other}'"
            ))),
        }
    }
}

/// Convert a whole record list, failing on the first bad command
pub fn parse_commands(raw: &[RawCommand]) -> Result<Vec<PathCommand>> {
    raw.iter().map(PathCommand::try_from).collect()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGlyph {
    #[serde(default)]
    advance_width: f64,
    #[serde(default)]
    commands: Vec<RawCommand>,
}

impl RawGlyph {
    fn into_outline(self) -> Result<GlyphOutline> {
        Ok(GlyphOutline::new(
            parse_commands(&self.commands)?,
            self.advance_width,
        ))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOutlineTable {
    units_per_em: u16,
    #[serde(default)]
    glyphs: HashMap<String, RawGlyph>,
    #[serde(default)]
    fallback: Option<RawGlyph>,
}

/// An in-memory glyph table in font units
#[derive(Debug, Clone, Default)]
pub struct StaticOutlines {
    units_per_em: u16,
    glyphs: HashMap<char, GlyphOutline>,
    fallback: Option<GlyphOutline>,
}

impl StaticOutlines {
    pub fn new(units_per_em: u16) -> Self {
        Self {
            units_per_em,
            glyphs: HashMap::new(),
            fallback: None,
        }
    }

    pub fn with_glyph(mut self, ch: char, outline: GlyphOutline) -> Self {
        self.insert(ch, outline);
        self
    }

    /// What to draw for characters the table lacks
    pub fn with_fallback(mut self, outline: GlyphOutline) -> Self {
        self.fallback = Some(outline);
        self
    }

    pub fn insert(&mut self, ch: char, outline: GlyphOutline) {
        self.glyphs.insert(ch, outline);
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Build a table from JSON command records
    ///
    /// Glyph keys must be single characters. Unknown command types fail
    /// with [`GlyphGeoError::UnsupportedPathCommand`].
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawOutlineTable = serde_json::from_str(json)
            .map_err(|e| GlyphGeoError::InvalidFontHandle(format!("outline table: {e}")))?;

        let mut table = Self::new(raw.units_per_em);
        for (key, glyph) in raw.glyphs {
            let mut chars = key.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => {
                    return Err(GlyphGeoError::InvalidFontHandle(format!(
                        "glyph key {key:?} is not a single character"
                    )))
                }
            };
            table.insert(ch, glyph.into_outline()?);
        }
        if let Some(fallback) = raw.fallback {
            table.fallback = Some(fallback.into_outline()?);
        }

        log::debug!(
            "Loaded outline table: {} glyphs, {} units per em",
            table.len(),
            table.units_per_em
        );
        Ok(table)
    }
}

impl OutlineSource for StaticOutlines {
    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_outline(&self, ch: char, x_offset: f64, scale: f64) -> Result<GlyphOutline> {
        match self.glyphs.get(&ch).or(self.fallback.as_ref()) {
            Some(outline) => Ok(outline.transformed(x_offset, scale)),
            None => {
                log::warn!("No outline for {ch:?} and no fallback, treating as blank");
                Ok(GlyphOutline::blank(0.0))
            }
        }
    }
}
