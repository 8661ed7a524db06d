//! Chart-level errors and the non-fatal issues collected alongside results.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use kundali_base::{Body, BhavaSystem, Graha, HouseSystem, ShadbalaComponent, VedicError};

/// Why an ephemeris could not supply a position.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EphemerisFailure {
    #[error("body not covered")]
    NotCovered,
    #[error("jd {jd_tt:.3} outside coverage")]
    OutOfRange { jd_tt: f64 },
    #[error("{0}")]
    Backend(String),
}

/// Errors that stop chart assembly.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Out-of-range coordinates or an unparseable date.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("ephemeris unavailable for {}: {reason}", .body.name())]
    EphemerisUnavailable { body: Body, reason: EphemerisFailure },
    /// House cusps are undefined and the policy does not allow substitution.
    #[error("{} cusps undefined at latitude {latitude_deg:.4} deg", .system.name())]
    DegenerateGeometry { system: BhavaSystem, latitude_deg: f64 },
    #[error("partial strength input for {} ({component:?}): {reason}", .body.name())]
    PartialStrengthInput {
        body: Graha,
        component: ShadbalaComponent,
        reason: String,
    },
}

impl From<VedicError> for ChartError {
    fn from(err: VedicError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

/// A per-body or per-component failure that did not abort the computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartIssue {
    /// The position is missing from the chart.
    EphemerisUnavailable { body: Body, reason: EphemerisFailure },
    /// The requested house system was replaced.
    HouseSystemSubstituted {
        requested: BhavaSystem,
        used: BhavaSystem,
        latitude_deg: f64,
    },
    /// A strength sub-component fell back to its neutral constant.
    PartialStrengthInput {
        body: Graha,
        component: ShadbalaComponent,
        reason: String,
    },
}

impl ChartIssue {
    /// The error this issue would have been under an all-or-nothing policy.
    pub fn to_error(&self) -> ChartError {
        match self {
            Self::EphemerisUnavailable { body, reason } => ChartError::EphemerisUnavailable {
                body: *body,
                reason: reason.clone(),
            },
            Self::HouseSystemSubstituted {
                requested,
                latitude_deg,
                ..
            } => ChartError::DegenerateGeometry {
                system: *requested,
                latitude_deg: *latitude_deg,
            },
            Self::PartialStrengthInput {
                body,
                component,
                reason,
            } => ChartError::PartialStrengthInput {
                body: *body,
                component: *component,
                reason: reason.clone(),
            },
        }
    }
}

impl std::fmt::Display for ChartIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HouseSystemSubstituted { used, .. } => {
                write!(f, "{}; using {}", self.to_error(), used.name())
            }
            _ => write!(f, "{}", self.to_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vedic_error_maps_to_invalid_input() {
        let err: ChartError = VedicError::InvalidInput("bad").into();
        assert_eq!(err, ChartError::InvalidInput("invalid input: bad".into()));
    }

    #[test]
    fn substitution_displays_both_systems() {
        let issue = ChartIssue::HouseSystemSubstituted {
            requested: BhavaSystem::Placidus,
            used: BhavaSystem::WholeSign,
            latitude_deg: 70.0,
        };
        let text = issue.to_string();
        assert!(text.contains("Placidus"), "{text}");
        assert!(text.contains("70.0000"), "{text}");
    }

    #[test]
    fn ephemeris_issue_names_body() {
        let issue = ChartIssue::EphemerisUnavailable {
            body: Body::Classical(Graha::Shani),
            reason: EphemerisFailure::NotCovered,
        };
        assert_eq!(issue.to_string(), "ephemeris unavailable for Saturn: body not covered");
    }
}
