//! # Display Ordering
//!
//! Records sort by three keys, each ascending:
//!
//! 1. type rank ([`ProjectType`](crate::ProjectType) declaration order),
//! 2. status rank ([`ProjectStatus`](crate::ProjectStatus) declaration order),
//! 3. name, compared lexicographically.
//!
//! An absent or unrecognized type or status ranks as [`UNRANKED`], after
//! every real rank. Records equal on all three keys compare equal; use a
//! stable sort so their relative order is preserved.

use std::cmp::Ordering;

use crate::field::Field;
use crate::record::Record;

/// Rank assigned to a missing or unrecognized type or status.
pub const UNRANKED: usize = usize::MAX;

/// Compare two records for display.
pub fn display_cmp(a: &Record, b: &Record) -> Ordering {
    let a_type = a.type_rank().unwrap_or(UNRANKED);
    let b_type = b.type_rank().unwrap_or(UNRANKED);
    a_type
        .cmp(&b_type)
        .then_with(|| {
            let a_status = a.status_rank().unwrap_or(UNRANKED);
            let b_status = b.status_rank().unwrap_or(UNRANKED);
            a_status.cmp(&b_status)
        })
        .then_with(|| name_key(a).cmp(&name_key(b)))
}

/// Stable sort into display order.
pub fn sort_for_display(records: &mut [Record]) {
    records.sort_by(display_cmp);
}

fn name_key(record: &Record) -> String {
    record
        .value(Field::Name)
        .map(ToString::to_string)
        .unwrap_or_default()
}
