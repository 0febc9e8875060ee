//! File helpers for command-line tools.
//!
//! Every helper treats the name `-` as the standard stream: stdin for
//! inputs, stdout for outputs.

mod access;
mod input;
mod list;
mod output;

use std::fs::File;
use std::io;
use std::path::Path;

pub use access::access_file;
pub use input::{
    capture, open, open_buffered, Buffered, Input, InputOptions, DEFAULT_TEMP_PREFIX,
};
pub use list::parse_file_list;
pub use output::{
    prompt_override, prompt_override_create, prompt_override_open, Output, OverridePrompt,
};

/// Name that stands for stdin or stdout.
pub const STDIO: &str = "-";

/// Check whether a name is the standard stream sentinel.
pub fn is_stdio(name: &Path) -> bool {
    name.as_os_str() == STDIO
}

/// Close a file and report the OS close result.
#[cfg(unix)]
pub(crate) fn close_file(file: File) -> io::Result<()> {
    use std::os::fd::IntoRawFd;

    let fd = file.into_raw_fd();
    // SAFETY: fd came from an owned File and is closed exactly once.
    if unsafe { libc::close(fd) } == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// Close a file and report the OS close result.
#[cfg(windows)]
pub(crate) fn close_file(file: File) -> io::Result<()> {
    use std::os::windows::io::IntoRawHandle;
    use windows_sys::Win32::Foundation::CloseHandle;

    let handle = file.into_raw_handle();
    // SAFETY: handle came from an owned File and is closed exactly once.
    if unsafe { CloseHandle(handle) } == 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// Close a file and report the OS close result.
#[cfg(not(any(unix, windows)))]
pub(crate) fn close_file(file: File) -> io::Result<()> {
    drop(file);
    Ok(())
}
