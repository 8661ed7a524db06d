//! Divisional charts (vargas) of the saptavarga set.
//!
//! Each varga maps a sidereal longitude to a rashi. D1, D3, D7, D9 and D12
//! divide the sign evenly; D2 uses the Parashari Cancer/Leo hora and D30
//! the unequal Parashari trimshamsha.

use serde::{Deserialize, Serialize};

use crate::rashi::{Element, Rashi, rashi_from_longitude};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Varga {
    D1,
    D2,
    D3,
    D7,
    D9,
    D12,
    D30,
}

/// The seven vargas scored by saptavargaja bala.
pub const SAPTAVARGA: [Varga; 7] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D7,
    Varga::D9,
    Varga::D12,
    Varga::D30,
];

impl Varga {
    pub const fn divisions(self) -> u8 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D12 => 12,
            Self::D30 => 30,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D7 => "Saptamsha",
            Self::D9 => "Navamsha",
            Self::D12 => "Dwadashamsha",
            Self::D30 => "Trimshamsha",
        }
    }
}

/// Trimshamsha segments for odd signs: (end degree, target rashi).
const TRIMSHAMSHA_ODD: [(f64, u8); 5] = [(5.0, 0), (10.0, 10), (18.0, 8), (25.0, 2), (30.0, 6)];

/// Trimshamsha segments for even signs.
const TRIMSHAMSHA_EVEN: [(f64, u8); 5] = [(5.0, 1), (12.0, 5), (20.0, 11), (25.0, 9), (30.0, 7)];

/// Rashi occupied in the given varga.
pub fn varga_rashi(sidereal_lon: f64, varga: Varga) -> Rashi {
    let info = rashi_from_longitude(sidereal_lon);
    let natal = info.rashi;
    let pos = info.degrees_in_rashi;
    let n = varga.divisions();
    let div = ((pos / (30.0 / n as f64)).floor() as u8).min(n - 1);
    let r = natal.index();

    let target = match varga {
        Varga::D1 => r,
        Varga::D2 => match (natal.is_odd(), div) {
            (true, 0) | (false, 1) => 4,
            _ => 3,
        },
        Varga::D3 => r + div * 4,
        Varga::D7 => {
            let start = if natal.is_odd() { r } else { r + 6 };
            start + div
        }
        Varga::D9 => {
            let start = match natal.element() {
                Element::Fire => 0,
                Element::Earth => 9,
                Element::Air => 6,
                Element::Water => 3,
            };
            start + div
        }
        Varga::D12 => r + div,
        Varga::D30 => {
            let table = if natal.is_odd() { &TRIMSHAMSHA_ODD } else { &TRIMSHAMSHA_EVEN };
            table
                .iter()
                .find(|(end, _)| pos < *end)
                .map_or(table[4].1, |(_, target)| *target)
        }
    };
    Rashi::from_index(target % 12)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d1_identity() {
        assert_eq!(varga_rashi(45.0, Varga::D1), Rashi::Vrishabha);
    }

    #[test]
    fn d2_hora() {
        // first half of an odd sign is the Sun's hora (Simha)
        assert_eq!(varga_rashi(10.0, Varga::D2), Rashi::Simha);
        assert_eq!(varga_rashi(20.0, Varga::D2), Rashi::Karka);
        // even sign reversed
        assert_eq!(varga_rashi(40.0, Varga::D2), Rashi::Karka);
    }

    #[test]
    fn d3_trines() {
        assert_eq!(varga_rashi(5.0, Varga::D3), Rashi::Mesha);
        assert_eq!(varga_rashi(15.0, Varga::D3), Rashi::Simha);
        assert_eq!(varga_rashi(25.0, Varga::D3), Rashi::Dhanu);
    }

    #[test]
    fn d9_navamsha_starts() {
        assert_eq!(varga_rashi(0.0, Varga::D9), Rashi::Mesha);
        assert_eq!(varga_rashi(30.0, Varga::D9), Rashi::Makara);
        assert_eq!(varga_rashi(60.0, Varga::D9), Rashi::Tula);
        assert_eq!(varga_rashi(90.0, Varga::D9), Rashi::Karka);
        // last navamsha of Meena is Meena (vargottama)
        assert_eq!(varga_rashi(359.0, Varga::D9), Rashi::Meena);
    }

    #[test]
    fn d7_even_sign_starts_seventh() {
        assert_eq!(varga_rashi(31.0, Varga::D7), Rashi::Vrischika);
    }

    #[test]
    fn d12_last_division() {
        assert_eq!(varga_rashi(29.9, Varga::D12), Rashi::Meena);
    }

    #[test]
    fn d30_unequal_segments() {
        assert_eq!(varga_rashi(4.9, Varga::D30), Rashi::Mesha);
        assert_eq!(varga_rashi(12.0, Varga::D30), Rashi::Dhanu);
        assert_eq!(varga_rashi(30.0 + 12.0, Varga::D30), Rashi::Meena);
        assert_eq!(varga_rashi(30.0 + 29.0, Varga::D30), Rashi::Vrischika);
    }
}
