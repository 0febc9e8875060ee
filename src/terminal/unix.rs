//! POSIX terminal backend.

use std::fs::{File, OpenOptions};
use std::io::Write;

use tracing::debug;

use super::Terminal;
use crate::error::{Result, UtilError};

/// Path of the controlling terminal device.
pub const TTY_PATH: &str = "/dev/tty";

/// ESC [2J (erase display) followed by ESC [H (cursor home).
pub const CLEAR_SEQUENCE: [u8; 7] = [0x1b, b'[', b'2', b'J', 0x1b, b'[', b'H'];

/// VT100 terminal bound to an output stream.
#[derive(Debug)]
pub struct DeviceTerminal<W> {
    out: W,
}

impl<W: Write> DeviceTerminal<W> {
    /// Bind the backend to an output stream.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the output stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Terminal for DeviceTerminal<W> {
    fn clear_screen(&mut self) -> Result<()> {
        self.out.write_all(&CLEAR_SEQUENCE)?;
        self.out.flush()?;
        Ok(())
    }

    fn open_reader(&self) -> Result<File> {
        open_tty(OpenOptions::new().read(true))
    }

    fn open_writer(&self) -> Result<File> {
        open_tty(OpenOptions::new().write(true))
    }
}

fn open_tty(options: &OpenOptions) -> Result<File> {
    let file = options.open(TTY_PATH).map_err(UtilError::Io)?;
    debug!(path = TTY_PATH, "opened controlling terminal");
    Ok(file)
}
