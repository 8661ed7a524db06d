//! Label packing inside one house region.
//!
//! The usable area is the largest square centred on the region centroid.
//! Labels flow in one column when they fit, then two, and otherwise shrink
//! uniformly until two columns fit, never below the minimum scale.

use serde::{Deserialize, Serialize};

use crate::LayoutSettings;
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    SignNumber,
    Ascendant,
    Body,
}

/// A label before placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    /// Status marks drawn small after the text, e.g. "R" for retrograde.
    pub superscript: Option<String>,
    pub kind: LabelKind,
}

impl Label {
    pub fn new(text: impl Into<String>, kind: LabelKind) -> Self {
        Self {
            text: text.into(),
            superscript: None,
            kind,
        }
    }

    pub fn with_superscript(mut self, sup: impl Into<String>) -> Self {
        let sup = sup.into();
        self.superscript = (!sup.is_empty()).then_some(sup);
        self
    }

    /// Width in font-size units.
    fn width_em(&self, settings: &LayoutSettings) -> f64 {
        let main = self.text.chars().count() as f64;
        let sup = self.superscript.as_deref().map_or(0, |s| s.chars().count()) as f64;
        settings.char_width * (main + settings.superscript_ratio * sup)
    }
}

/// A label anchored at its centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedLabel {
    pub text: String,
    pub superscript: Option<String>,
    pub kind: LabelKind,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
}

/// How a region's labels were fitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Packing {
    /// Side of the usable square.
    pub square_side: f64,
    pub columns: u8,
    /// Uniform shrink, `min_scale..=1.0`.
    pub scale: f64,
    /// False when even the minimum scale overflows the square.
    pub fits: bool,
}

fn fits(rows: usize, columns: usize, widest: f64, scale: f64, side: f64, s: &LayoutSettings) -> bool {
    let font = s.font_size * scale;
    rows as f64 * s.line_height * font <= side && columns as f64 * widest * font <= side
}

/// Choose columns and scale for `labels` in a square of `side`.
pub fn capacity(labels: &[Label], side: f64, settings: &LayoutSettings) -> Packing {
    let n = labels.len();
    let widest = labels
        .iter()
        .map(|l| l.width_em(settings))
        .fold(0.0, f64::max);
    let packing = |columns: usize, scale: f64, fits: bool| Packing {
        square_side: side,
        columns: columns as u8,
        scale,
        fits,
    };
    if n == 0 || fits(n, 1, widest, 1.0, side, settings) {
        return packing(1, 1.0, true);
    }
    let columns = if n > 1 { 2 } else { 1 };
    let rows = n.div_ceil(columns);
    if columns == 2 && fits(rows, 2, widest, 1.0, side, settings) {
        return packing(2, 1.0, true);
    }
    let by_height = side / (rows as f64 * settings.line_height * settings.font_size);
    let by_width = if widest > 0.0 {
        side / (columns as f64 * widest * settings.font_size)
    } else {
        f64::INFINITY
    };
    let wanted = by_height.min(by_width).min(1.0);
    let scale = wanted.max(settings.min_scale);
    packing(columns, scale, wanted >= settings.min_scale)
}

/// Place `labels` row by row around `centre`.
pub fn pack(
    labels: &[Label],
    centre: Point,
    side: f64,
    settings: &LayoutSettings,
) -> (Vec<PositionedLabel>, Packing) {
    let packing = capacity(labels, side, settings);
    let columns = packing.columns.max(1) as usize;
    let font_size = settings.font_size * packing.scale;
    let line = settings.line_height * font_size;
    let rows = labels.len().div_ceil(columns);
    let top = centre.y - rows as f64 * line / 2.0;
    let column_width = side / columns as f64;
    let left = centre.x - side / 2.0;

    let placed = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let (row, col) = (i / columns, i % columns);
            // a lone label on the last row stays centred
            let x = if columns > 1 && row == rows - 1 && labels.len() % columns == 1 {
                centre.x
            } else {
                left + (col as f64 + 0.5) * column_width
            };
            PositionedLabel {
                text: label.text.clone(),
                superscript: label.superscript.clone(),
                kind: label.kind,
                x,
                y: top + (row as f64 + 0.5) * line,
                font_size,
            }
        })
        .collect();
    (placed, packing)
}
