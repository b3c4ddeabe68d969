//! Failures at the filesystem boundary. Anything content-related is a skip,
//! not an error (see [`super::SkipReason`]).

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// Source or destination path was empty; no I/O was attempted.
    #[error("empty {which} path")]
    EmptyArgument { which: &'static str },

    #[error("open source {}: {source}", path.display())]
    SourceOpen { path: PathBuf, source: io::Error },

    /// Read failed part way through; the destination was not written.
    #[error("read source {}: {source}", path.display())]
    Scan { path: PathBuf, source: io::Error },

    #[error("create destination directory {}: {source}", path.display())]
    DestinationDir { path: PathBuf, source: io::Error },

    #[error("write destination {}: {source}", path.display())]
    DestinationWrite { path: PathBuf, source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn messages_name_the_path() {
        let err = FilterError::SourceOpen {
            path: PathBuf::from("/nope/urls.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "open source /nope/urls.txt: not found");
        assert!(err.source().is_some());
    }

    #[test]
    fn empty_argument_message() {
        let err = FilterError::EmptyArgument { which: "destination" };
        assert_eq!(err.to_string(), "empty destination path");
        assert!(err.source().is_none());
    }
}
