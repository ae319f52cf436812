use std::fmt;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Nothing exists at `path`.
    ///
    /// `message` keeps the OS cause for callers; it is not part of the
    /// `Display` output, which only names the path.
    NotFound { path: String, message: String },
    /// Any other read failure. `Display` includes both `path` and `message`.
    IoFailure { path: String, message: String },
}

impl Error {
    /// Classifies an I/O error raised while reading `path`.
    ///
    /// `io::ErrorKind::NotFound` maps to `Error::NotFound`; every other kind
    /// (permissions, directories, invalid UTF-8, device errors) maps to
    /// `Error::IoFailure`.
    pub fn from_io(path: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound {
                path: path.to_string(),
                message: err.to_string(),
            },
            _ => Error::IoFailure {
                path: path.to_string(),
                message: err.to_string(),
            },
        }
    }

    /// The path of the resource the error refers to.
    pub fn path(&self) -> &str {
        match self {
            Error::NotFound { path, .. } | Error::IoFailure { path, .. } => path,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound { path, .. } => write!(f, "The file '{}' was not found.", path),
            Error::IoFailure { path, message } => write!(
                f,
                "An error occurred while reading the file '{}': {}",
                path, message
            ),
        }
    }
}

impl std::error::Error for Error {}
