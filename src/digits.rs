// digits.rs - Decimal-digit run extraction.
//
// Every decimal digit set in Unicode is a contiguous run of ten codepoints
// ending on the local '9'. Recording those end points lets a consumer check
// that all digits inside a script run come from one same decimal system.

use log::warn;

use crate::ucd::CategoryRange;

/// Collect the last codepoint of every run of ten decimal digits.
///
/// Only ranges carrying `decimal_category` participate. A range whose
/// length is not a multiple of ten is a data-consistency finding: it is
/// reported and then stepped anyway, matching best-effort generation.
/// The result is sorted ascending across all ranges.
pub fn digit_runs(ranges: &[CategoryRange], decimal_category: i32) -> Vec<u32> {
    let mut runs = Vec::new();
    for range in ranges {
        if range.category != decimal_category {
            continue;
        }
        if (range.last - range.first + 1) % 10 != 0 {
            warn!(
                "digit range {:#06x}..{:#06x} does not contain a multiple of 10 characters",
                range.first, range.last
            );
        }
        let mut first = range.first;
        while first < range.last {
            runs.push(first + 9);
            first += 10;
        }
    }
    runs.sort_unstable();
    runs
}
