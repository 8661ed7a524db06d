//! North-Indian chart frame.
//!
//! The square is cut by its two diagonals and by the diamond joining the
//! side midpoints. That leaves four kendra diamonds (houses 1, 4, 7, 10),
//! each S²/8, and eight triangles of S²/16. House 1 is the top diamond and
//! houses run counter-clockwise from it, so house 2 is the upper-left
//! triangle and house 12 the upper-right one.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseShape {
    Diamond,
    Triangle,
}

pub const fn house_shape(house: u8) -> HouseShape {
    match house {
        1 | 4 | 7 | 10 => HouseShape::Diamond,
        _ => HouseShape::Triangle,
    }
}

pub(crate) fn check_size(size: f64) -> Result<(), LayoutError> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidSize(size))
    }
}

/// Vertices of all twelve houses, house 1 first.
pub fn house_polygons(size: f64) -> Result<[Vec<Point>; 12], LayoutError> {
    check_size(size)?;
    let s = size;
    let h = s / 2.0;
    let q = s / 4.0;
    let p = |x: f64, y: f64| Point::new(x, y);

    let (tl, tr, br, bl) = (p(0.0, 0.0), p(s, 0.0), p(s, s), p(0.0, s));
    let (top, right, bottom, left) = (p(h, 0.0), p(s, h), p(h, s), p(0.0, h));
    let c = p(h, h);
    // diagonal crossings of the inner diamond
    let (ul, ur, lr, ll) = (p(q, q), p(s - q, q), p(s - q, s - q), p(q, s - q));

    Ok([
        vec![top, ul, c, ur],
        vec![tl, top, ul],
        vec![tl, ul, left],
        vec![left, ul, c, ll],
        vec![left, ll, bl],
        vec![bl, ll, bottom],
        vec![bottom, ll, c, lr],
        vec![bottom, lr, br],
        vec![br, lr, right],
        vec![right, lr, c, ur],
        vec![right, ur, tr],
        vec![tr, ur, top],
    ])
}

/// Outline, diagonals and inner diamond as segments.
pub fn frame_lines(size: f64) -> Result<Vec<[Point; 2]>, LayoutError> {
    check_size(size)?;
    let s = size;
    let h = s / 2.0;
    let p = Point::new;
    let corners = [p(0.0, 0.0), p(s, 0.0), p(s, s), p(0.0, s)];
    let mids = [p(h, 0.0), p(s, h), p(h, s), p(0.0, h)];
    let mut lines = Vec::with_capacity(10);
    for i in 0..4 {
        lines.push([corners[i], corners[(i + 1) % 4]]);
    }
    lines.push([corners[0], corners[2]]);
    lines.push([corners[1], corners[3]]);
    for i in 0..4 {
        lines.push([mids[i], mids[(i + 1) % 4]]);
    }
    Ok(lines)
}
