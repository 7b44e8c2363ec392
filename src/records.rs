// records.rs - Record interning and layout.
//
// The per-codepoint scalar fields are combined into fixed-arity tuples and
// deduplicated: two codepoints with structurally equal tuples share one
// interned record. The catalog is built during the domain scan and frozen;
// afterwards records are addressed by index only.

use std::collections::HashMap;

use crate::error::GenError;
use crate::width::IntWidth;

/// Number of scalar fields in a record.
pub const RECORD_FIELDS: usize = 8;

/// Field names, in tuple order, used for the emitted record type.
pub const FIELD_NAMES: [&str; RECORD_FIELDS] = [
    "script",
    "chartype",
    "gbprop",
    "caseset",
    "other_case",
    "scriptx",
    "bidi",
    "bprops",
];

/// One interned property record.
pub type Record = [i32; RECORD_FIELDS];

/// The record catalog and the per-codepoint index into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTable {
    /// Per-codepoint record id.
    pub index: Vec<u32>,
    /// Records by id; id order is first-occurrence order, so row `i`
    /// always holds the record interned with id `i`.
    pub records: Vec<Record>,
}

/// Intern the tuples formed across the parallel per-codepoint columns.
///
/// All columns must have equal length. Ids are assigned in first-occurrence
/// order, which makes the result reproducible for identical input.
pub fn intern(columns: &[&[i32]; RECORD_FIELDS]) -> RecordTable {
    let n = columns[0].len();
    debug_assert!(columns.iter().all(|c| c.len() == n));

    let mut by_record: HashMap<Record, u32> = HashMap::new();
    let mut records: Vec<Record> = Vec::new();
    let mut index = Vec::with_capacity(n);

    for c in 0..n {
        let mut record = [0i32; RECORD_FIELDS];
        for (slot, column) in record.iter_mut().zip(columns.iter()) {
            *slot = column[c];
        }
        let id = match by_record.get(&record) {
            Some(&id) => id,
            None => {
                let id = records.len() as u32;
                by_record.insert(record, id);
                records.push(record);
                id
            }
        };
        index.push(id);
    }

    RecordTable { index, records }
}

/// Field widths and offsets of the emitted record structure.
///
/// Each field gets the narrowest type that holds its column across the
/// whole catalog. A field's start is rounded up to a multiple of its own
/// width, and the total is rounded up to a multiple of the first field's
/// width so that array indexing is uniform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLayout {
    pub widths: [IntWidth; RECORD_FIELDS],
    pub offsets: [usize; RECORD_FIELDS],
    /// Size in bytes of one record, including padding.
    pub size: usize,
}

impl RecordLayout {
    pub fn of(records: &[Record]) -> Result<RecordLayout, GenError> {
        let mut widths = [IntWidth::U8; RECORD_FIELDS];
        let mut offsets = [0usize; RECORD_FIELDS];
        let mut size = 0usize;

        for i in 0..RECORD_FIELDS {
            let width = IntWidth::for_values(
                FIELD_NAMES[i],
                records.iter().map(|r| r[i] as i64),
            )?;
            size = align_up(size, width.bytes());
            widths[i] = width;
            offsets[i] = size;
            size += width.bytes();
        }

        size = align_up(size, widths[0].bytes());
        Ok(RecordLayout {
            widths,
            offsets,
            size,
        })
    }
}

fn align_up(value: usize, to: usize) -> usize {
    (value + to - 1) & !(to - 1)
}
