//! Errors for image display.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure building or writing an image.
#[derive(Debug)]
pub enum RenderError {
    /// Image has zero height or width.
    Empty {
        /// Requested height.
        height: usize,
        /// Requested width.
        width: usize,
    },
    /// Buffer length is not `height * width`.
    Shape {
        /// Requested height.
        height: usize,
        /// Requested width.
        width: usize,
        /// Actual buffer length.
        len: usize,
    },
    /// Writing the rendered image failed.
    Io {
        /// Destination file, if writing to a path.
        path: Option<PathBuf>,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { height, width } => {
                write!(f, "image must be non-empty, got {height}x{width}")
            }
            Self::Shape { height, width, len } => write!(
                f,
                "{height}x{width} image needs {} values, got {len}",
                height.saturating_mul(*width)
            ),
            Self::Io {
                path: Some(path),
                source,
            } => write!(f, "{}: {source}", path.display()),
            Self::Io { path: None, source } => write!(f, "write failed: {source}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(source: io::Error) -> Self {
        Self::Io { path: None, source }
    }
}
