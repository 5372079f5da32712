//! Bézier curves, sampled at a fixed resolution
//!
//! Glyph outlines are curves, polygons are straight lines. We bridge the
//! two by evaluating the Bernstein polynomial at evenly spaced parameters
//! `t = i / segments` for `i` in `0..=segments`. There is no flatness
//! tolerance and no adaptive subdivision: label-sized text does not need
//! it, and a fixed count keeps the output length predictable.
//!
//! The parameter is computed from an integer step index rather than
//! accumulated, so the endpoint at `t = 1` is always produced and every
//! platform emits the same number of samples.

use crate::types::Point;

/// Parameters `0, 1/n, 2/n, ..., 1`
fn steps(segments: usize) -> impl Iterator<Item = f64> {
    let n = segments.max(1);
    (0..=n).map(move |i| i as f64 / n as f64)
}

/// Evaluate `B(t) = (1-t)²P0 + 2(1-t)t·P1 + t²P2`
pub fn quadratic_point(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt;
    let b = 2.0 * mt * t;
    let c = t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x,
        a * p0.y + b * p1.y + c * p2.y,
    )
}

/// Evaluate `B(t) = (1-t)³P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³P3`
pub fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// `segments + 1` samples along a quadratic, starting at `p0`, ending at `p2`
pub fn quadratic(
    p0: Point,
    p1: Point,
    p2: Point,
    segments: usize,
) -> impl Iterator<Item = Point> {
    steps(segments).map(move |t| quadratic_point(p0, p1, p2, t))
}

/// `segments + 1` samples along a cubic, starting at `p0`, ending at `p3`
pub fn cubic(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    segments: usize,
) -> impl Iterator<Item = Point> {
    steps(segments).map(move |t| cubic_point(p0, p1, p2, p3, t))
}
