//! Destination writing: parent directories, newline-joined records.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::FilterError;

/// Writes `lines` to `dst`, one per line, replacing any existing file.
///
/// A non-empty list ends with exactly one newline; an empty list produces a
/// zero-byte file. Missing parent directories are created first. The write
/// is not atomic: on failure the file may hold a prefix of the output.
pub fn write_output(dst: &Path, lines: &[String]) -> Result<(), FilterError> {
    if let Some(parent) = dst.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| FilterError::DestinationDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let write_err = |source: std::io::Error| FilterError::DestinationWrite {
        path: dst.to_path_buf(),
        source,
    };
    let file = File::create(dst).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    for line in lines {
        out.write_all(line.as_bytes()).map_err(write_err)?;
        out.write_all(b"\n").map_err(write_err)?;
    }
    out.flush().map_err(write_err)?;
    Ok(())
}
