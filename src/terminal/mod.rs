//! Terminal control.
//!
//! Clears the screen and hands out direct handles to the controlling
//! terminal, independent of where stdin and stdout have been redirected.
//!
//! Two backends implement [`Terminal`]:
//!
//! - `unix::DeviceTerminal` writes VT100 escapes and opens `/dev/tty`.
//! - `windows::ConsoleTerminal` drives the console API and opens
//!   `CONIN$` / `CONOUT$`.
//!
//! The backend is picked at compile time through [`NativeTerminal`].

use std::fs::File;

use crossterm::terminal;

use crate::error::Result;

#[cfg(not(windows))]
pub mod unix;
#[cfg(windows)]
pub mod windows;

/// Terminal backend for the current platform.
#[cfg(not(windows))]
pub type NativeTerminal = unix::DeviceTerminal<std::io::Stdout>;

/// Terminal backend for the current platform.
#[cfg(windows)]
pub type NativeTerminal = windows::ConsoleTerminal;

/// Screen clearing and controlling-terminal access.
pub trait Terminal {
    /// Clear the visible screen and move the cursor to the top-left corner.
    ///
    /// Assumes the output is a terminal; callers check that first.
    fn clear_screen(&mut self) -> Result<()>;

    /// Open the controlling terminal for reading.
    fn open_reader(&self) -> Result<File>;

    /// Open the controlling terminal for writing.
    fn open_writer(&self) -> Result<File>;
}

/// Create the native backend bound to process stdout.
pub fn native() -> NativeTerminal {
    #[cfg(not(windows))]
    {
        unix::DeviceTerminal::new(std::io::stdout())
    }
    #[cfg(windows)]
    {
        windows::ConsoleTerminal::stdout()
    }
}

/// Clear the terminal screen and move the cursor to the top-left corner.
///
/// This does not check that stdout is a terminal. Use
/// [`std::io::IsTerminal`] on stdout before calling it.
///
/// # Errors
///
/// Returns the error of the first OS call that failed. A screen left
/// partially cleared is not restored.
pub fn clear_terminal() -> Result<()> {
    native().clear_screen()
}

/// Open the controlling terminal for reading.
///
/// # Errors
///
/// Returns the OS error if the device cannot be opened.
pub fn tty_reader() -> Result<File> {
    native().open_reader()
}

/// Open the controlling terminal for writing.
///
/// # Errors
///
/// Returns the OS error if the device cannot be opened.
pub fn tty_writer() -> Result<File> {
    native().open_writer()
}

/// Terminal size information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl TerminalSize {
    /// Number of character cells on screen.
    pub fn cells(&self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }
}

/// Query the terminal size.
///
/// Returns None if it cannot be determined.
pub fn terminal_size() -> Option<TerminalSize> {
    terminal::size()
        .ok()
        .map(|(width, height)| TerminalSize { width, height })
}
