//! Unified error types for the LED ring crate.
//!
//! A single `Error` enum that every subsystem converts into, so the demo
//! binaries can hand it straight to `anyhow`. All variants are `Copy`.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The pixel strip rejected a command or the hardware write failed.
    Pixel(PixelError),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixel(e) => write!(f, "pixel: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Pixel errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelError {
    /// `set_pixel` addressed a pixel past the end of the strip.
    IndexOutOfRange { index: usize, len: usize },
    /// The strip is longer than the frame buffer can hold.
    TooManyPixels { requested: usize, capacity: usize },
    /// The LED driver reported a transmit failure.
    WriteFailed,
}

impl fmt::Display for PixelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "pixel index {index} out of range (strip has {len})")
            }
            Self::TooManyPixels {
                requested,
                capacity,
            } => write!(f, "{requested} pixels requested, frame buffer holds {capacity}"),
            Self::WriteFailed => write!(f, "LED driver write failed"),
        }
    }
}

impl std::error::Error for PixelError {}

impl From<PixelError> for Error {
    fn from(e: PixelError) -> Self {
        Self::Pixel(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
