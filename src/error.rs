//! Crate-level error types.

use std::fmt;

/// Errors produced by the bodyview crate.
#[derive(Debug)]
pub enum ViewerError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Clipping planes violate `far > near >= 0`.
    InvalidPlanes {
        /// Requested near plane distance.
        near: f64,
        /// Requested far plane distance.
        far: f64,
    },
    /// Dolly step is not a positive finite distance.
    InvalidDollyStep {
        /// Requested plane shift per wheel line.
        step: f64,
    },
    /// Viewport has a zero dimension.
    InvalidViewport {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidPlanes { near, far } => write!(
                f,
                "invalid clipping planes: near={near}, far={far} \
                 (need far > near >= 0)"
            ),
            Self::InvalidDollyStep { step } => {
                write!(f, "invalid dolly step: {step} (need > 0)")
            }
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport: {width}x{height}")
            }
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ViewerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
