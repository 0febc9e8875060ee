//! Glob expansion of file arguments.

use std::path::PathBuf;

use tracing::{debug, warn};

use super::STDIO;
use crate::error::{Result, UtilError};

/// Expand a list of glob patterns into file names.
///
/// `-` is kept as is. No arguments at all means `["-"]`. Patterns are
/// expanded in order; each expansion is sorted and a pattern without
/// matches contributes nothing. Entries that cannot be read while walking
/// the file system are skipped.
///
/// # Errors
///
/// Returns [`UtilError::BadPattern`] for an invalid pattern, carrying the
/// paths collected before it. With `ignore_invalid`, invalid patterns are
/// skipped and this never fails.
pub fn parse_file_list<S: AsRef<str>>(args: &[S], ignore_invalid: bool) -> Result<Vec<PathBuf>> {
    if args.is_empty() {
        return Ok(vec![PathBuf::from(STDIO)]);
    }

    let mut files = Vec::new();
    for arg in args {
        let arg = arg.as_ref();
        if arg == STDIO {
            files.push(PathBuf::from(STDIO));
            continue;
        }

        let paths = match glob::glob(arg) {
            Ok(paths) => paths,
            Err(source) if ignore_invalid => {
                warn!(pattern = arg, error = %source, "skipping invalid pattern");
                continue;
            }
            Err(source) => {
                return Err(UtilError::BadPattern {
                    pattern: arg.to_string(),
                    matched: files,
                    source,
                })
            }
        };

        let before = files.len();
        files.extend(paths.filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                None
            }
        }));
        debug!(pattern = arg, matches = files.len() - before, "expanded pattern");
    }

    Ok(files)
}
