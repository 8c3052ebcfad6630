// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Decode(String),
    Svg(String),
    Config(String),
    Viewport(ViewportError),
}

/// Failures raised by the viewport engine itself.
///
/// These are kept separate from the generic error kinds so callers can react
/// to them individually: an allocation failure leaves the previously adapted
/// canvas on screen, while the rejection variants indicate the call was
/// refused before any state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportError {
    /// The requested adapted canvas could not be allocated (dimensions are
    /// non-positive or exceed the supported canvas size).
    AllocationFailed { width: i32, height: i32 },

    /// A viewport or image dimension outside the representable range was
    /// supplied.
    InvalidDimensions { width: i32, height: i32 },

    /// The zoom factor is not a power of two within `[1, max]`.
    ZoomOutOfRange { factor: i32, max: i32 },

    /// A numeric flipping mode outside the four defined values.
    InvalidFlipMode(i32),

    /// An operation that requires a bound image and adapted canvas was called
    /// before `initialize` / `set_dimensions` completed.
    NotInitialized,
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportError::AllocationFailed { width, height } => {
                write!(f, "Failed to allocate {}x{} adapted canvas", width, height)
            }
            ViewportError::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions: {}x{}", width, height)
            }
            ViewportError::ZoomOutOfRange { factor, max } => {
                write!(
                    f,
                    "Zoom factor {} is not a power of two within [1, {}]",
                    factor, max
                )
            }
            ViewportError::InvalidFlipMode(value) => {
                write!(f, "Invalid flipping mode: {}", value)
            }
            ViewportError::NotInitialized => {
                write!(f, "Viewport has no bound image")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Viewport(e) => write!(f, "Viewport Error: {}", e),
        }
    }
}

impl From<ViewportError> for Error {
    fn from(err: ViewportError) -> Self {
        Error::Viewport(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn viewport_error_converts_to_error() {
        let err: Error = ViewportError::NotInitialized.into();
        assert!(matches!(
            err,
            Error::Viewport(ViewportError::NotInitialized)
        ));
    }

    #[test]
    fn zoom_out_of_range_names_factor_and_ceiling() {
        let message = format!(
            "{}",
            ViewportError::ZoomOutOfRange {
                factor: 3,
                max: 256,
            }
        );
        assert!(message.contains('3'));
        assert!(message.contains("256"));
    }

    #[test]
    fn allocation_failed_names_dimensions() {
        let message = format!(
            "{}",
            ViewportError::AllocationFailed {
                width: 99_999,
                height: 10,
            }
        );
        assert!(message.contains("99999"));
    }
}
