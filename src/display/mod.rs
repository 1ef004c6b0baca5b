//! Display formatting for terminal output.

pub mod aligned;
pub mod text;

pub use aligned::AlignedList;

/// `"s"` unless `count` is exactly one.
pub(crate) fn plural(count: usize, suffix: &'static str) -> &'static str {
    if count == 1 {
        ""
    } else {
        suffix
    }
}
