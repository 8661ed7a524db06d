//! Plane polygon helpers. Screen coordinates: x right, y down.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Shoelace sum; positive when the vertices run clockwise on screen.
pub fn signed_area(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

pub fn polygon_area(polygon: &[Point]) -> f64 {
    signed_area(polygon).abs()
}

/// Area-weighted centroid. None for fewer than 3 vertices or zero area.
pub fn polygon_centroid(polygon: &[Point]) -> Option<Point> {
    let area = signed_area(polygon);
    if area.abs() < 1e-12 {
        return None;
    }
    let n = polygon.len();
    let (mut cx, mut cy) = (0.0, 0.0);
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        let cross = a.x * b.y - b.x * a.y;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    Some(Point::new(cx / (6.0 * area), cy / (6.0 * area)))
}

/// Even-odd ray cast. Points exactly on an edge may land either way.
pub fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    let mut inside = false;
    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Side of the largest axis-aligned square centred on `centre` that stays
/// inside a convex polygon.
pub fn inscribed_square_side(polygon: &[Point], centre: Point) -> f64 {
    if !point_in_polygon(centre, polygon) {
        return 0.0;
    }
    let (min_x, max_x) = polygon
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)));
    let mut lo = 0.0;
    let mut hi = (max_x - min_x) / 2.0;
    for _ in 0..48 {
        let half = (lo + hi) / 2.0;
        let corners = [
            Point::new(centre.x - half, centre.y - half),
            Point::new(centre.x + half, centre.y - half),
            Point::new(centre.x + half, centre.y + half),
            Point::new(centre.x - half, centre.y + half),
        ];
        if corners.iter().all(|&c| point_in_polygon(c, polygon)) {
            lo = half;
        } else {
            hi = half;
        }
    }
    2.0 * lo
}
