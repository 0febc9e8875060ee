//! Numeric helpers.
//!
//! - [`max`] / [`min`] and their slice scans [`max_n`] / [`min_n`]
//! - [`round`] to a number of decimal places, ties away from zero

mod extremes;
mod round;

pub use extremes::{max, max_n, min, min_n};
pub use round::round;
