//! Security seal usage audit.
//!
//! A log entry records the first and last seal numbers handed to a truck. The
//! number of seals used is `final - initial` when both numbers parse and the
//! range is not reversed. Anything else yields no count for that entry and
//! contributes zero to the grand total; it is never an error.

use serde::Serialize;

use crate::SealLogRecord;

/// Outcome of assessing one seal range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "count", rename_all = "snake_case")]
pub enum SealCount {
    Counted(u64),
    /// One of the identifiers is missing or has no leading integer.
    Unparseable,
    /// Final seal number is lower than the initial one.
    Inverted,
}

impl SealCount {
    /// Per-entry seal count, `None` when the range is invalid.
    pub const fn used(self) -> Option<u64> {
        match self {
            SealCount::Counted(count) => Some(count),
            SealCount::Unparseable | SealCount::Inverted => None,
        }
    }
}

/// Parses the leading base-10 integer of `text`.
///
/// Leading whitespace and a single sign are accepted, parsing stops at the
/// first non-digit (`"12abc"` is 12). Returns `None` when no digit follows,
/// or when the value does not fit in an `i64`.
pub fn parse_seal_number(text: &str) -> Option<i64> {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let end = rest
        .bytes()
        .position(|byte| !byte.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude: i128 = digits.parse().ok()?;
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

/// Assesses the seal range of one log entry.
pub fn assess(log: &SealLogRecord) -> SealCount {
    let initial = log.initial_strap.as_deref().and_then(parse_seal_number);
    let last = log.final_strap.as_deref().and_then(parse_seal_number);

    match (initial, last) {
        (Some(initial), Some(last)) if last >= initial => {
            SealCount::Counted(last.abs_diff(initial))
        }
        (Some(_), Some(_)) => SealCount::Inverted,
        _ => SealCount::Unparseable,
    }
}

/// Seals consumed by one log entry, `None` for an unparseable or reversed range.
pub fn seals_used(log: &SealLogRecord) -> Option<u64> {
    assess(log).used()
}

/// Grand total over all entries; invalid ranges count as zero.
pub fn total_seals_used<'a, I>(logs: I) -> u64
where
    I: IntoIterator<Item = &'a SealLogRecord>,
{
    logs.into_iter()
        .filter_map(seals_used)
        .fold(0u64, u64::saturating_add)
}
