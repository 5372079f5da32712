// this_file: crates/glyphgeo-fontdb/src/pen.rs

//! Recording skrifa outlines as positioned path commands.

use glyphgeo_core::types::{PathCommand, Point};
use skrifa::outline::OutlinePen;

/// Records one glyph's outline, placed on the baseline.
///
/// Font units come in y-up; commands go out scaled, shifted right by the
/// pen offset, and y-down the way path getters report them.
#[derive(Debug)]
pub struct GeoPen {
    commands: Vec<PathCommand>,
    x_offset: f64,
    scale: f64,
}

impl GeoPen {
    pub fn new(x_offset: f64, scale: f64) -> Self {
        Self {
            commands: Vec::new(),
            x_offset,
            scale,
        }
    }

    pub fn finish(self) -> Vec<PathCommand> {
        self.commands
    }

    fn point(&self, x: f32, y: f32) -> Point {
        Point::new(
            self.x_offset + f64::from(x) * self.scale,
            -f64::from(y) * self.scale,
        )
    }
}

impl OutlinePen for GeoPen {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.commands.push(PathCommand::MoveTo(p));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.commands.push(PathCommand::LineTo(p));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let c = self.point(cx0, cy0);
        let p = self.point(x, y);
        self.commands.push(PathCommand::QuadTo(c, p));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let c1 = self.point(cx0, cy0);
        let c2 = self.point(cx1, cy1);
        let p = self.point(x, y);
        self.commands.push(PathCommand::CurveTo(c1, c2, p));
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}
