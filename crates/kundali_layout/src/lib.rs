//! North-Indian chart geometry and label placement.
//!
//! Output is plain data: polygons, centroids and positioned strings that
//! any renderer can draw without further geometry.

pub mod error;
pub mod geometry;
pub mod labels;
pub mod north;

use serde::{Deserialize, Serialize};

use kundali_base::Rashi;

pub use error::LayoutError;
pub use geometry::{
    Point, inscribed_square_side, point_in_polygon, polygon_area, polygon_centroid, signed_area,
};
pub use labels::{Label, LabelKind, Packing, PositionedLabel, capacity, pack};
pub use north::{HouseShape, frame_lines, house_polygons, house_shape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Canvas side.
    pub size: f64,
    /// Unscaled label font size.
    pub font_size: f64,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
    /// Average glyph advance as a multiple of the font size.
    pub char_width: f64,
    /// Superscript glyph size relative to the label.
    pub superscript_ratio: f64,
    pub min_scale: f64,
    pub show_sign_numbers: bool,
    pub ascendant_marker: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            size: 400.0,
            font_size: 12.0,
            line_height: 1.2,
            char_width: 0.6,
            superscript_ratio: 0.6,
            min_scale: 0.5,
            show_sign_numbers: true,
            ascendant_marker: "Asc".to_string(),
        }
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<(), LayoutError> {
        north::check_size(self.size)?;
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(LayoutError::InvalidFontSize(self.font_size));
        }
        if !(self.min_scale > 0.0 && self.min_scale <= 1.0) {
            return Err(LayoutError::InvalidMinScale(self.min_scale));
        }
        if !(self.line_height.is_finite() && self.line_height > 0.0) {
            return Err(LayoutError::InvalidSetting("line_height must be positive"));
        }
        if !(self.char_width.is_finite() && self.char_width > 0.0) {
            return Err(LayoutError::InvalidSetting("char_width must be positive"));
        }
        if !(self.superscript_ratio.is_finite() && self.superscript_ratio >= 0.0) {
            return Err(LayoutError::InvalidSetting("superscript_ratio must be non-negative"));
        }
        Ok(())
    }
}

/// A body to draw: glyph text plus optional status marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyGlyph {
    pub text: String,
    pub superscript: Option<String>,
}

impl BodyGlyph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            superscript: None,
        }
    }

    pub fn with_superscript(mut self, sup: impl Into<String>) -> Self {
        let sup = sup.into();
        self.superscript = (!sup.is_empty()).then_some(sup);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseRegion {
    /// 1-12
    pub house: u8,
    pub sign: Rashi,
    pub shape: HouseShape,
    pub polygon: Vec<Point>,
    pub centroid: Point,
    pub area: f64,
    pub packing: Packing,
    pub labels: Vec<PositionedLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub size: f64,
    pub frame: Vec<[Point; 2]>,
    /// House 1 first.
    pub regions: Vec<HouseRegion>,
}

impl ChartLayout {
    pub fn region(&self, house: u8) -> Option<&HouseRegion> {
        self.regions.iter().find(|r| r.house == house)
    }

    /// House under a canvas point, for hit testing.
    pub fn house_at(&self, p: Point) -> Option<u8> {
        self.regions
            .iter()
            .find(|r| point_in_polygon(p, &r.polygon))
            .map(|r| r.house)
    }
}

/// Sign occupying `house` when `ascendant` rises.
pub fn sign_in_house(ascendant: Rashi, house: u8) -> Rashi {
    Rashi::from_index((ascendant.index() + (house + 11) % 12) % 12)
}

/// Lay out the whole chart. `bodies[h]` holds the glyphs for house `h + 1`.
pub fn layout(
    ascendant: Rashi,
    bodies: &[Vec<BodyGlyph>; 12],
    settings: &LayoutSettings,
) -> Result<ChartLayout, LayoutError> {
    settings.validate()?;
    let polygons = house_polygons(settings.size)?;
    let mut regions = Vec::with_capacity(12);

    for (i, (polygon, glyphs)) in polygons.into_iter().zip(bodies).enumerate() {
        let house = i as u8 + 1;
        let sign = sign_in_house(ascendant, house);
        let centroid = polygon_centroid(&polygon).ok_or(LayoutError::InvalidSize(settings.size))?;

        let mut labels = Vec::with_capacity(glyphs.len() + 2);
        if settings.show_sign_numbers {
            labels.push(Label::new(sign.number().to_string(), LabelKind::SignNumber));
        }
        if house == 1 && !settings.ascendant_marker.is_empty() {
            labels.push(Label::new(settings.ascendant_marker.clone(), LabelKind::Ascendant));
        }
        labels.extend(glyphs.iter().map(|g| Label {
            text: g.text.clone(),
            superscript: g.superscript.clone(),
            kind: LabelKind::Body,
        }));

        let side = inscribed_square_side(&polygon, centroid);
        let (placed, packing) = pack(&labels, centroid, side, settings);
        regions.push(HouseRegion {
            house,
            sign,
            shape: house_shape(house),
            area: polygon_area(&polygon),
            polygon,
            centroid,
            packing,
            labels: placed,
        });
    }

    Ok(ChartLayout {
        size: settings.size,
        frame: frame_lines(settings.size)?,
        regions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> [Vec<BodyGlyph>; 12] {
        Default::default()
    }

    #[test]
    fn signs_follow_ascendant() {
        assert_eq!(sign_in_house(Rashi::Dhanu, 1), Rashi::Dhanu);
        assert_eq!(sign_in_house(Rashi::Dhanu, 2), Rashi::Makara);
        assert_eq!(sign_in_house(Rashi::Dhanu, 5), Rashi::Mesha);
        assert_eq!(sign_in_house(Rashi::Mesha, 12), Rashi::Meena);
    }

    #[test]
    fn ascendant_marker_only_in_first_house() {
        let chart = layout(Rashi::Simha, &empty(), &LayoutSettings::default()).unwrap();
        for r in &chart.regions {
            let has_marker = r.labels.iter().any(|l| l.kind == LabelKind::Ascendant);
            assert_eq!(has_marker, r.house == 1);
        }
        assert_eq!(chart.region(1).unwrap().labels[0].text, "5");
    }

    #[test]
    fn bodies_land_in_their_house() {
        let mut bodies = empty();
        bodies[6].push(BodyGlyph::new("Sa").with_superscript("R"));
        let chart = layout(Rashi::Mesha, &bodies, &LayoutSettings::default()).unwrap();
        let h7 = chart.region(7).unwrap();
        let sat = h7.labels.iter().find(|l| l.kind == LabelKind::Body).unwrap();
        assert_eq!(sat.superscript.as_deref(), Some("R"));
        assert_eq!(chart.house_at(Point::new(sat.x, sat.y)), Some(7));
    }

    #[test]
    fn invalid_settings_rejected() {
        let bad = LayoutSettings {
            min_scale: 0.0,
            ..LayoutSettings::default()
        };
        assert_eq!(
            layout(Rashi::Mesha, &empty(), &bad),
            Err(LayoutError::InvalidMinScale(0.0))
        );
    }

    #[test]
    fn layout_serializes() {
        let chart = layout(Rashi::Karka, &empty(), &LayoutSettings::default()).unwrap();
        let json = serde_json::to_string(&chart).unwrap();
        assert!(json.contains("\"sign_number\""));
        assert!(json.contains("\"diamond\""));
    }
}
