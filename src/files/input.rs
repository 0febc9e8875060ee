//! File inputs with stdin buffering.
//!
//! [`open_buffered`] turns stdin into a seekable, re-readable file by
//! copying all of it into a temporary file first.

use std::fs::{File, Metadata};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use tempfile::TempPath;
use tracing::debug;

use super::{access_file, close_file, is_stdio, STDIO};
use crate::error::{Result, UtilError};

/// Default prefix of the temporary file holding captured stdin.
pub const DEFAULT_TEMP_PREFIX: &str = "stdin";

/// Where captured stdin is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOptions {
    /// Directory for the temporary file (default: the OS temp dir).
    pub temp_dir: Option<PathBuf>,
    /// File name prefix of the temporary file.
    pub temp_prefix: String,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            temp_dir: None,
            temp_prefix: DEFAULT_TEMP_PREFIX.to_string(),
        }
    }
}

#[derive(Debug)]
enum Source {
    /// Process stdin, read directly. Never closed by us.
    Stdin(io::Stdin),
    /// A named file.
    File(File),
    /// Captured stdin backed by a temporary file.
    Buffered { file: File, path: TempPath },
}

/// An opened input: a named file, stdin, or stdin captured to a temp file.
#[derive(Debug)]
pub struct Input {
    name: PathBuf,
    source: Source,
    metadata: Option<Metadata>,
}

impl Input {
    fn stdin() -> Self {
        Self {
            name: PathBuf::from(STDIO),
            source: Source::Stdin(io::stdin()),
            metadata: None,
        }
    }

    /// The name this input was opened with (`-` for stdin).
    pub fn name(&self) -> &Path {
        &self.name
    }

    /// Whether the data comes from stdin.
    pub fn is_stdin(&self) -> bool {
        matches!(self.source, Source::Stdin(_) | Source::Buffered { .. })
    }

    /// Whether stdin was captured into a temporary file.
    pub fn is_materialized(&self) -> bool {
        matches!(self.source, Source::Buffered { .. })
    }

    /// Metadata taken at open time.
    ///
    /// For captured stdin this describes the temporary file. Stdin read
    /// directly has none.
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Path of the temporary file behind captured stdin.
    pub fn backing_path(&self) -> Option<&Path> {
        match &self.source {
            Source::Buffered { path, .. } => Some(&**path),
            _ => None,
        }
    }

    /// Close the input.
    ///
    /// Captured stdin closes its temporary file and then always tries to
    /// delete it. A close error is reported over a delete error. Stdin read
    /// directly is left open.
    ///
    /// # Errors
    ///
    /// Returns the close error, or the delete error if closing succeeded.
    pub fn close(self) -> Result<()> {
        match self.source {
            Source::Stdin(_) => Ok(()),
            Source::File(file) => close_file(file).map_err(UtilError::Io),
            Source::Buffered { file, path } => {
                let location = path.to_path_buf();
                let closed = close_file(file);
                let removed = path.close();
                closed?;
                removed.map_err(|err| UtilError::io_at("remove", location, err))
            }
        }
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.source {
            Source::Stdin(stdin) => stdin.read(buf),
            Source::File(file) | Source::Buffered { file, .. } => file.read(buf),
        }
    }
}

impl Seek for Input {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match &mut self.source {
            Source::Stdin(_) => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "stdin is not seekable",
            )),
            Source::File(file) | Source::Buffered { file, .. } => file.seek(pos),
        }
    }
}

/// Result of [`open_buffered`].
#[derive(Debug)]
pub struct Buffered {
    /// The opened input.
    pub input: Input,
    /// A fresh handle on stdin for the rest of the program, present when
    /// stdin was captured.
    pub stdin: Option<File>,
}

impl Buffered {
    /// Split into the input and the fresh stdin handle.
    pub fn into_parts(self) -> (Input, Option<File>) {
        (self.input, self.stdin)
    }
}

/// Open a file for reading.
///
/// The name `-` gives stdin, read directly and without metadata.
///
/// # Errors
///
/// - [`UtilError::NotFound`] if the path does not exist.
/// - [`UtilError::IsDirectory`] if the path is a directory.
/// - [`UtilError::Io`] if opening fails.
///
/// No handle is opened when the checks fail.
pub fn open<P: AsRef<Path>>(name: P) -> Result<Input> {
    let path = name.as_ref();
    if is_stdio(path) {
        return Ok(Input::stdin());
    }

    let metadata = access_file(path)?;
    let file = File::open(path)?;

    Ok(Input {
        name: path.to_path_buf(),
        source: Source::File(file),
        metadata,
    })
}

/// Open a file for reading, capturing stdin into a temporary file.
///
/// Other names behave exactly like [`open`]. For `-`, all of stdin is
/// copied into a temporary file before returning, which blocks until stdin
/// reaches end of stream. The returned input is positioned at offset 0 and
/// can be seeked and read again. [`Buffered::stdin`] carries a fresh stdin
/// handle for anything that reads stdin afterwards.
///
/// # Errors
///
/// Same as [`open`], plus any failure creating, filling, rewinding or
/// statting the temporary file. The temporary file is deleted on failure.
pub fn open_buffered<P: AsRef<Path>>(name: P, options: &InputOptions) -> Result<Buffered> {
    let path = name.as_ref();
    if !is_stdio(path) {
        return Ok(Buffered {
            input: open(path)?,
            stdin: None,
        });
    }

    let (file, temp_path) = {
        let mut stdin = io::stdin().lock();
        copy_to_temp(&mut stdin, options)?
    };

    let stdin = reopen_stdin()?;
    let input = rewind(file, temp_path)?;

    Ok(Buffered {
        input,
        stdin: Some(stdin),
    })
}

/// Capture any reader into a temporary file and open it as input.
///
/// The returned input is tagged as stdin-derived and materialized, and is
/// positioned at offset 0.
///
/// # Errors
///
/// Returns the read or write error of the copy, or a failure rewinding or
/// statting the temporary file. The temporary file is deleted on failure.
pub fn capture<R: Read + ?Sized>(source: &mut R, options: &InputOptions) -> Result<Input> {
    let (file, path) = copy_to_temp(source, options)?;
    rewind(file, path)
}

fn copy_to_temp<R: Read + ?Sized>(
    source: &mut R,
    options: &InputOptions,
) -> Result<(File, TempPath)> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(&options.temp_prefix);
    let temp = match &options.temp_dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }?;
    let (mut file, path) = temp.into_parts();

    match io::copy(source, &mut file) {
        Ok(copied) => {
            debug!(bytes = copied, path = %path.display(), "captured stdin");
            Ok((file, path))
        }
        Err(err) => {
            drop(file);
            let _ = path.close();
            Err(UtilError::Io(err))
        }
    }
}

fn rewind(mut file: File, path: TempPath) -> Result<Input> {
    file.seek(SeekFrom::Start(0))?;
    let metadata = file.metadata()?;

    Ok(Input {
        name: PathBuf::from(STDIO),
        source: Source::Buffered { file, path },
        metadata: Some(metadata),
    })
}

/// Duplicate the process's stdin into an independent handle.
#[cfg(unix)]
fn reopen_stdin() -> Result<File> {
    use std::os::fd::AsFd;

    let fd = io::stdin().as_fd().try_clone_to_owned()?;
    Ok(File::from(fd))
}

/// Duplicate the process's stdin into an independent handle.
#[cfg(windows)]
fn reopen_stdin() -> Result<File> {
    use std::os::windows::io::AsHandle;

    let handle = io::stdin().as_handle().try_clone_to_owned()?;
    Ok(File::from(handle))
}
