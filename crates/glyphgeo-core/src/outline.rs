//! Glyph outlines become rings, rings become polygons
//!
//! Two steps live here because they always run back to back on one glyph:
//!
//! 1. [`decompose`] walks the path commands and cuts them into rings,
//!    flattening curves on the way and flipping y to point up.
//! 2. [`classify`] reads each ring's winding and groups holes under the
//!    shell that precedes them.
//!
//! Grouping never crosses glyph boundaries: every glyph starts with a
//! fresh [`RingGrouper`].

use crate::{
    flatten,
    types::{PathCommand, Point, Polygon, Ring},
};

/// Cuts a command stream into rings
///
/// A `MoveTo` flushes the open ring and starts another; lines and curves
/// extend it. Curves start from the ring's last point and drop their first
/// sample, which would duplicate it.
#[derive(Debug)]
pub struct OutlineDecomposer {
    segments: usize,
    current: Ring,
    rings: Vec<Ring>,
    /// Where the pen rests when no ring is open
    cursor: Point,
}

impl OutlineDecomposer {
    pub fn new(segments: usize) -> Self {
        Self {
            segments,
            current: Ring::new(),
            rings: Vec::new(),
            cursor: Point::ORIGIN,
        }
    }

    /// Feed one command, in source (y-down) orientation
    pub fn push(&mut self, command: &PathCommand) {
        match *command {
            PathCommand::MoveTo(p) => {
                self.flush();
                self.current.push(flip(p));
            }
            PathCommand::LineTo(p) => {
                self.current.push(flip(p));
            }
            PathCommand::QuadTo(c, p) => {
                let start = self.start_point();
                self.current
                    .extend(flatten::quadratic(start, flip(c), flip(p), self.segments).skip(1));
            }
            PathCommand::CurveTo(c1, c2, p) => {
                let start = self.start_point();
                self.current.extend(
                    flatten::cubic(start, flip(c1), flip(c2), flip(p), self.segments).skip(1),
                );
            }
            PathCommand::Close => {}
        }
    }

    /// Flush the open ring and hand back everything collected
    pub fn finish(mut self) -> Vec<Ring> {
        self.flush();
        self.rings
    }

    fn start_point(&self) -> Point {
        self.current.last().copied().unwrap_or(self.cursor)
    }

    fn flush(&mut self) {
        if let Some(&last) = self.current.last() {
            self.cursor = last;
            self.rings.push(std::mem::take(&mut self.current));
        }
    }
}

/// Negate y once: font getters hand us y-down, output is y-up
fn flip(p: Point) -> Point {
    Point::new(p.x, -p.y)
}

/// Turn one glyph's commands into rings
pub fn decompose(commands: &[PathCommand], segments: usize) -> Vec<Ring> {
    let mut decomposer = OutlineDecomposer::new(segments);
    for command in commands {
        decomposer.push(command);
    }
    decomposer.finish()
}

/// Which way a ring turns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Positive shoelace sum: a shell
    Clockwise,
    /// Zero or negative shoelace sum: a hole
    CounterClockwise,
}

/// `Σ (x2 - x1)(y2 + y1)` over consecutive points, wrapping last to first
///
/// Twice the signed area with the sign flipped: positive for clockwise
/// rings in a y-up frame.
pub fn shoelace_sum(ring: &[Point]) -> f64 {
    let n = ring.len();
    (0..n)
        .map(|i| {
            let a = ring[i];
            let b = ring[(i + 1) % n];
            (b.x - a.x) * (b.y + a.y)
        })
        .sum()
}

pub fn winding(ring: &[Point]) -> Winding {
    if shoelace_sum(ring) > 0.0 {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    }
}

/// Where the grouper stands within one glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
    /// No shell seen yet, holes have nowhere to go
    NoOuterYet,
    /// Holes attach to the polygon at this index
    HasOuter(usize),
}

/// Groups rings into polygons, one glyph at a time
///
/// A clockwise ring opens a new polygon. A counter-clockwise ring becomes
/// a hole of the most recent polygon, or is dropped when none exists yet.
#[derive(Debug)]
pub struct RingGrouper {
    polygons: Vec<Polygon>,
    state: GroupState,
    dropped: usize,
}

impl Default for RingGrouper {
    fn default() -> Self {
        Self::new()
    }
}

impl RingGrouper {
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
            state: GroupState::NoOuterYet,
            dropped: 0,
        }
    }

    pub fn state(&self) -> GroupState {
        self.state
    }

    /// Holes discarded because no shell preceded them
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn push(&mut self, ring: Ring) {
        match (winding(&ring), self.state) {
            (Winding::Clockwise, _) => {
                self.polygons.push(Polygon::new(ring));
                self.state = GroupState::HasOuter(self.polygons.len() - 1);
            }
            (Winding::CounterClockwise, GroupState::HasOuter(index)) => {
                self.polygons[index].holes.push(ring);
            }
            (Winding::CounterClockwise, GroupState::NoOuterYet) => {
                log::warn!(
                    "Dropping hole ring with {} points: no outer ring precedes it",
                    ring.len()
                );
                self.dropped += 1;
            }
        }
    }

    pub fn finish(self) -> Vec<Polygon> {
        self.polygons
    }
}

/// Group one glyph's rings into polygons, in source order
pub fn classify(rings: impl IntoIterator<Item = Ring>) -> Vec<Polygon> {
    let mut grouper = RingGrouper::new();
    for ring in rings {
        grouper.push(ring);
    }
    grouper.finish()
}
