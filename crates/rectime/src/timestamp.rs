//! Fixed-width timestamp rendering for recording file names.
//!
//! Maps a calendar instant to the 14-digit `YYYYMMDDhhmmss` form used as a
//! sortable, collision-resistant suffix for recording output files.

use time::{OffsetDateTime, PrimitiveDateTime};

/// Renders calendar fields as a fixed-width `YYYYMMDDhhmmss` string.
///
/// Output is exactly 14 ASCII digits: zero-padded four-digit year and
/// two-digit month, day, hour (24-hour clock), minute and second, no
/// separators. Identical inputs always produce identical output, and
/// second-level resolution keeps derived file names unique at the expected
/// rate of at most one new recording per second.
///
/// The time zone is whatever the caller already resolved into `dt`; this
/// function never consults the system clock. Years outside `0..=9999`
/// (representable only with the `time` crate's `large-dates` feature) fall
/// outside the fixed field width and are a caller precondition, not a
/// runtime failure.
pub fn format(dt: PrimitiveDateTime) -> String {
    format!(
        "{:04}{:02}{:02}{:02}{:02}{:02}",
        dt.year(),
        u8::from(dt.month()),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second()
    )
}

/// Renders the zone-local calendar fields of an offset-carrying instant.
///
/// Convenience for callers holding e.g. `OffsetDateTime::now_local()`.
/// The offset itself does not appear in the output.
pub fn format_offset(dt: OffsetDateTime) -> String {
    format(PrimitiveDateTime::new(dt.date(), dt.time()))
}
