//! File existence and type checks.

use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

use super::is_stdio;
use crate::error::{Result, UtilError};

/// Access a file (not a directory) and return its metadata.
///
/// The name `-` stands for stdin, which has nothing to stat, so it yields
/// `Ok(None)`.
///
/// # Errors
///
/// - [`UtilError::NotFound`] if the path does not exist.
/// - [`UtilError::IsDirectory`] if the path is a directory.
/// - [`UtilError::Io`] for any other stat failure.
pub fn access_file<P: AsRef<Path>>(name: P) -> Result<Option<Metadata>> {
    let path = name.as_ref();
    if is_stdio(path) {
        return Ok(None);
    }

    let metadata = fs::metadata(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => UtilError::NotFound {
            path: path.to_path_buf(),
        },
        _ => UtilError::Io(err),
    })?;

    if metadata.is_dir() {
        return Err(UtilError::IsDirectory {
            path: path.to_path_buf(),
        });
    }

    Ok(Some(metadata))
}
