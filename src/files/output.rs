//! Output files guarded by an overwrite prompt.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{close_file, is_stdio};
use crate::error::{Result, UtilError};

#[derive(Debug)]
enum Sink {
    Stdout(io::Stdout),
    File(File),
}

/// An opened output: a created file or process stdout.
#[derive(Debug)]
pub struct Output {
    name: PathBuf,
    sink: Sink,
}

impl Output {
    /// The name this output was opened with (`-` for stdout).
    pub fn name(&self) -> &Path {
        &self.name
    }

    /// Whether this output writes to stdout.
    pub fn is_stdout(&self) -> bool {
        matches!(self.sink, Sink::Stdout(_))
    }

    /// Close the output. Stdout is flushed but never closed.
    ///
    /// # Errors
    ///
    /// Returns the flush or close error.
    pub fn close(self) -> Result<()> {
        match self.sink {
            Sink::Stdout(mut stdout) => stdout.flush().map_err(UtilError::Io),
            Sink::File(file) => close_file(file).map_err(UtilError::Io),
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.sink {
            Sink::Stdout(stdout) => stdout.write(buf),
            Sink::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.sink {
            Sink::Stdout(stdout) => stdout.flush(),
            Sink::File(file) => file.flush(),
        }
    }
}

/// Asks before an existing file is overwritten.
///
/// Questions go to `prompt`, answers come from `answers`. Only the answer
/// `y` allows overwriting.
#[derive(Debug)]
pub struct OverridePrompt<R, W> {
    answers: R,
    prompt: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> OverridePrompt<R, W> {
    /// Create a prompt reading answers from `answers` and asking on `prompt`.
    pub fn new(answers: R, prompt: W) -> Self {
        Self {
            answers,
            prompt,
            assume_yes: false,
        }
    }

    /// Allow every overwrite without asking.
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Check a destination before writing to it.
    ///
    /// Passes when the name is `-` (stdout), when nothing exists at the path,
    /// or when the user answers `y`.
    ///
    /// # Errors
    ///
    /// - [`UtilError::AbortedByUser`] for any other answer, including none.
    /// - [`UtilError::Io`] if the path cannot be checked or the prompt fails.
    pub fn confirm<P: AsRef<Path>>(&mut self, name: P) -> Result<()> {
        let path = name.as_ref();
        if is_stdio(path) {
            return Ok(());
        }

        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(UtilError::Io(err)),
        };

        if self.assume_yes {
            debug!(path = %path.display(), "overwriting without asking");
            return Ok(());
        }

        if metadata.is_dir() {
            write!(
                self.prompt,
                "\"{}\" already exists and it is a directory! Override? (y/N) ",
                path.display()
            )?;
        } else {
            write!(
                self.prompt,
                "File \"{}\" already exists, override? (y/N) ",
                path.display()
            )?;
        }
        self.prompt.flush()?;

        let mut answer = String::new();
        self.answers.read_line(&mut answer)?;
        if answer.trim() != "y" {
            return Err(UtilError::AbortedByUser);
        }

        Ok(())
    }

    /// Confirm, then open the destination with the given options.
    ///
    /// The name `-` gives stdout without asking.
    ///
    /// # Errors
    ///
    /// Same as [`confirm`](Self::confirm), plus the open error.
    pub fn open<P: AsRef<Path>>(&mut self, name: P, options: &OpenOptions) -> Result<Output> {
        let path = name.as_ref();
        if is_stdio(path) {
            return Ok(Output {
                name: path.to_path_buf(),
                sink: Sink::Stdout(io::stdout()),
            });
        }

        self.confirm(path)?;
        let file = options.open(path)?;

        Ok(Output {
            name: path.to_path_buf(),
            sink: Sink::File(file),
        })
    }

    /// Confirm, then create or truncate the destination.
    ///
    /// # Errors
    ///
    /// Same as [`open`](Self::open).
    pub fn create<P: AsRef<Path>>(&mut self, name: P) -> Result<Output> {
        self.open(name, &create_options())
    }
}

fn create_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true).truncate(true);
    options
}

/// Check a destination, asking on stdout and reading the answer from stdin.
///
/// # Errors
///
/// See [`OverridePrompt::confirm`].
pub fn prompt_override<P: AsRef<Path>>(name: P) -> Result<()> {
    OverridePrompt::new(io::stdin().lock(), io::stdout()).confirm(name)
}

/// Open a destination with the given options, asking on stdout and reading
/// the answer from stdin.
///
/// # Errors
///
/// See [`OverridePrompt::open`].
pub fn prompt_override_open<P: AsRef<Path>>(name: P, options: &OpenOptions) -> Result<Output> {
    OverridePrompt::new(io::stdin().lock(), io::stdout()).open(name, options)
}

/// Create a destination, asking on stdout and reading the answer from stdin.
///
/// # Errors
///
/// See [`OverridePrompt::open`].
pub fn prompt_override_create<P: AsRef<Path>>(name: P) -> Result<Output> {
    OverridePrompt::new(io::stdin().lock(), io::stdout()).create(name)
}
