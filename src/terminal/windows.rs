//! Windows console backend.

use std::ffi::OsStr;
use std::fs::File;
use std::io;
use std::iter;
use std::os::windows::ffi::OsStrExt;
use std::os::windows::io::{FromRawHandle, RawHandle};
use std::ptr;

use tracing::debug;
use windows_sys::Win32::Foundation::{GENERIC_READ, GENERIC_WRITE, HANDLE, INVALID_HANDLE_VALUE};
use windows_sys::Win32::Security::SECURITY_ATTRIBUTES;
use windows_sys::Win32::Storage::FileSystem::{
    CreateFileW, FILE_SHARE_READ, FILE_SHARE_WRITE, OPEN_EXISTING,
};
use windows_sys::Win32::System::Console::{
    FillConsoleOutputAttribute, FillConsoleOutputCharacterW, GetConsoleScreenBufferInfo,
    GetStdHandle, SetConsoleCursorPosition, CONSOLE_SCREEN_BUFFER_INFO, COORD,
    STD_OUTPUT_HANDLE,
};

use super::Terminal;
use crate::error::{Result, UtilError};

/// Console input device name.
pub const CONSOLE_INPUT: &str = "CONIN$";

/// Console output device name.
pub const CONSOLE_OUTPUT: &str = "CONOUT$";

const ORIGIN: COORD = COORD { X: 0, Y: 0 };

/// Console-API terminal bound to a screen buffer handle.
#[derive(Debug)]
pub struct ConsoleTerminal {
    console: HANDLE,
}

impl ConsoleTerminal {
    /// Bind to the process's standard output handle.
    pub fn stdout() -> Self {
        // SAFETY: GetStdHandle has no preconditions.
        let console = unsafe { GetStdHandle(STD_OUTPUT_HANDLE) };
        Self { console }
    }

    /// Bind to an existing console screen buffer handle.
    ///
    /// The handle stays owned by the caller.
    pub fn from_handle(console: HANDLE) -> Self {
        Self { console }
    }

    fn screen_buffer_info(&self) -> Result<CONSOLE_SCREEN_BUFFER_INFO> {
        // SAFETY: plain-old-data struct, fully written by the call on success.
        let mut csbi: CONSOLE_SCREEN_BUFFER_INFO = unsafe { std::mem::zeroed() };
        // SAFETY: csbi is a valid out pointer for the duration of the call.
        if unsafe { GetConsoleScreenBufferInfo(self.console, &mut csbi) } == 0 {
            return Err(last_console_error("GetConsoleScreenBufferInfo"));
        }
        Ok(csbi)
    }
}

impl Terminal for ConsoleTerminal {
    fn clear_screen(&mut self) -> Result<()> {
        let mut written = 0u32;

        let csbi = self.screen_buffer_info()?;
        let cells = cell_count(csbi.dwSize);

        // SAFETY: written is a valid out pointer; the handle is checked by the call.
        if unsafe {
            FillConsoleOutputCharacterW(self.console, u16::from(b' '), cells, ORIGIN, &mut written)
        } == 0
        {
            return Err(last_console_error("FillConsoleOutputCharacterW"));
        }

        // The attributes are read again after the character fill.
        let csbi = self.screen_buffer_info()?;

        // SAFETY: as above.
        if unsafe {
            FillConsoleOutputAttribute(self.console, csbi.wAttributes, cells, ORIGIN, &mut written)
        } == 0
        {
            return Err(last_console_error("FillConsoleOutputAttribute"));
        }

        // SAFETY: no pointers involved.
        if unsafe { SetConsoleCursorPosition(self.console, ORIGIN) } == 0 {
            return Err(last_console_error("SetConsoleCursorPosition"));
        }

        Ok(())
    }

    fn open_reader(&self) -> Result<File> {
        open_console(CONSOLE_INPUT, GENERIC_READ, FILE_SHARE_READ)
    }

    fn open_writer(&self) -> Result<File> {
        open_console(CONSOLE_OUTPUT, GENERIC_WRITE, FILE_SHARE_WRITE)
    }
}

/// Number of character cells in a screen buffer of the given size.
fn cell_count(size: COORD) -> u32 {
    let width = u32::try_from(size.X).unwrap_or(0);
    let height = u32::try_from(size.Y).unwrap_or(0);
    width * height
}

fn last_console_error(call: &'static str) -> UtilError {
    UtilError::ConsoleCall {
        call,
        source: io::Error::last_os_error(),
    }
}

fn wide(name: &str) -> Vec<u16> {
    OsStr::new(name)
        .encode_wide()
        .chain(iter::once(0))
        .collect()
}

/// Open a console device with an inheritable handle.
fn open_console(name: &str, access: u32, share: u32) -> Result<File> {
    let path = wide(name);
    let attributes = SECURITY_ATTRIBUTES {
        nLength: std::mem::size_of::<SECURITY_ATTRIBUTES>() as u32,
        lpSecurityDescriptor: ptr::null_mut(),
        bInheritHandle: 1,
    };

    // SAFETY: path is NUL-terminated and outlives the call; attributes is a
    // valid SECURITY_ATTRIBUTES.
    let handle = unsafe {
        CreateFileW(
            path.as_ptr(),
            access,
            share,
            &attributes,
            OPEN_EXISTING,
            0,
            ptr::null_mut(),
        )
    };
    if handle == INVALID_HANDLE_VALUE {
        return Err(UtilError::Io(io::Error::last_os_error()));
    }

    debug!(device = name, "opened console device");
    // SAFETY: handle is a freshly created, exclusively owned file handle.
    Ok(unsafe { File::from_raw_handle(handle as RawHandle) })
}
