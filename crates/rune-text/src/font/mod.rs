pub mod face;
pub mod handle;
pub mod metrics;

pub use face::FontFace;
pub use handle::Font;
pub use metrics::{FontMetrics, ScaledFontMetrics};

/// Errors that can occur while working with fonts.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("font I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid font data")]
    InvalidFont,
}

/// Convenient result alias for font-related operations.
pub type Result<T> = std::result::Result<T, FontError>;
