use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("canvas size must be finite and positive, got {0}")]
    InvalidSize(f64),
    #[error("font size must be finite and positive, got {0}")]
    InvalidFontSize(f64),
    #[error("minimum scale must be in (0, 1], got {0}")]
    InvalidMinScale(f64),
    #[error("invalid setting: {0}")]
    InvalidSetting(&'static str),
}
