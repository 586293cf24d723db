use std::io;
use std::path::{Path, PathBuf};

//===========================================================================//

/// Everything that can abort a packaging run.
///
/// None of these are recovered from inside the crate; they propagate up to
/// whoever called [`make_icon`](crate::make_icon), which decides what to do
/// with the process.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A requested icon size lies outside 1 to 256 pixels.
    #[error(
        "Invalid icon size '{0}' (must be between {min} and {max} pixels)",
        min = crate::size::MIN_ICON_SIZE,
        max = crate::size::MAX_ICON_SIZE
    )]
    InvalidSize(i64),

    /// No input image has the requested size, and resizing was not allowed.
    #[error(
        "Size {0} was specified but no input image of this size was \
         provided (specify -resize to allow resizing to this size)"
    )]
    UnsatisfiableSize(u32),

    /// An ICO container would not fit the format's fixed-width fields.
    #[error("Overflow: {0}")]
    Overflow(String),

    /// A file could not be created, read, or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// Writing to a caller-supplied stream failed.
    #[error(transparent)]
    Stream(#[from] io::Error),

    /// The Apple platform was selected without a contents manifest.
    #[error(
        "No contents json file specified (specify one using \
         -sizes:Contents.json)"
    )]
    ManifestMissing,

    /// A manifest line held a field whose value could not be parsed.
    #[error("Malformed manifest on line {line}: {reason}")]
    ManifestMalformed {
        /// One-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// An input image could not be decoded.
    #[error("Failed to load input image {}: {message}", .path.display())]
    Decode {
        /// The input file.
        path: PathBuf,
        /// The codec's description of the failure.
        message: String,
    },

    /// Pixel data could not be resampled.
    #[error("Resizing failed: {0}")]
    Resize(String),

    /// Pixel data could not be encoded as PNG.
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// Bytes that were supposed to be an ICO container were not.
    #[error("Malformed ICO data: {0}")]
    MalformedIcon(String),

    /// The run was configured inconsistently.
    #[error("{0}")]
    InvalidOptions(String),
}

impl Error {
    /// Wraps an I/O error together with the path it concerns.
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Error {
        Error::Io { path: path.as_ref().to_path_buf(), source }
    }
}

impl From<png::EncodingError> for Error {
    fn from(error: png::EncodingError) -> Error {
        match error {
            png::EncodingError::IoError(error) => Error::Stream(error),
            other => Error::Encode(other.to_string()),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

//===========================================================================//


//===========================================================================//
