//! Small conveniences.

use std::fmt::Display;

/// Unwrap a result that cannot fail at a known call site.
///
/// Meant for fixed inputs such as parsing a constant string. It panics with
/// `what` and the error otherwise, so keep it out of paths that handle user
/// input.
///
/// ```
/// use cliutil::sugar::result_or_abort;
///
/// let port: u16 = result_or_abort("8080".parse(), "constant port");
/// assert_eq!(port, 8080);
/// ```
#[track_caller]
pub fn result_or_abort<T, E: Display>(result: Result<T, E>, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{what}: {err}"),
    }
}
