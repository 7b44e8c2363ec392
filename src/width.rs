// width.rs - Minimal-width integer type selection.
//
// Every emitted table is stored at the narrowest fixed-width integer type
// that holds all of its values. The ladder mirrors the order a consumer
// prefers: unsigned before signed, narrow before wide.

use crate::error::GenError;

/// The fixed ladder of integer representations available to emitted tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    U8,
    U16,
    U32,
    I8,
    I16,
    I32,
}

/// Ladder in selection order; the first entry whose range covers a table's
/// values wins.
const LADDER: [(IntWidth, i64, i64); 6] = [
    (IntWidth::U8, 0, u8::MAX as i64),
    (IntWidth::U16, 0, u16::MAX as i64),
    (IntWidth::U32, 0, u32::MAX as i64),
    (IntWidth::I8, i8::MIN as i64, i8::MAX as i64),
    (IntWidth::I16, i16::MIN as i64, i16::MAX as i64),
    (IntWidth::I32, i32::MIN as i64, i32::MAX as i64),
];

impl IntWidth {
    /// Select the narrowest width whose range contains every value.
    ///
    /// An empty sequence selects [`IntWidth::U8`]. Fails with
    /// [`GenError::RangeExceeded`] when no 8/16/32-bit type suffices.
    pub fn for_values<I>(table: &str, values: I) -> Result<IntWidth, GenError>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut min = 0i64;
        let mut max = 0i64;
        for v in values {
            min = min.min(v);
            max = max.max(v);
        }
        for (width, lo, hi) in LADDER {
            if lo <= min && max <= hi {
                return Ok(width);
            }
        }
        Err(GenError::RangeExceeded {
            table: table.to_string(),
            min,
            max,
        })
    }

    /// Storage size in bytes.
    pub fn bytes(self) -> usize {
        match self {
            IntWidth::U8 | IntWidth::I8 => 1,
            IntWidth::U16 | IntWidth::I16 => 2,
            IntWidth::U32 | IntWidth::I32 => 4,
        }
    }

    /// Type name used in the emitted source.
    pub fn type_name(self) -> &'static str {
        match self {
            IntWidth::U8 => "u8",
            IntWidth::U16 => "u16",
            IntWidth::U32 => "u32",
            IntWidth::I8 => "i8",
            IntWidth::I16 => "i16",
            IntWidth::I32 => "i32",
        }
    }
}

/// Encoded size in bytes of a table at its minimal width.
pub fn table_bytes(name: &str, values: &[u32]) -> Result<usize, GenError> {
    let width = IntWidth::for_values(name, values.iter().map(|&v| v as i64))?;
    Ok(width.bytes() * values.len())
}
