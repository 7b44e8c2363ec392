// generate.rs - End-to-end table generation.
//
// Runs the full pipeline over the raw input arrays: auxiliary encoders
// first (caseless sets, script extensions, boolean properties, digit runs),
// then record interning across all scalar fields, then the two-stage
// compression of the record-index array. The result is a frozen value; no
// structure is mutated after this returns.

use crate::boolprops::{self, BoolPropSets};
use crate::caseless::{self, CaselessSets};
use crate::digits;
use crate::error::GenError;
use crate::records::{self, Record, RecordLayout, RECORD_FIELDS};
use crate::scriptx::{self, ScriptSets};
use crate::stage::{self, CompressedTable};
use crate::ucd::{Enumerations, UcdInput, MAX_UNICODE};

/// Everything the emitter needs, frozen after one batch run.
#[derive(Debug, Clone)]
pub struct UcdTables {
    /// Source data revision the tables were built from.
    pub version: String,
    pub caseless: CaselessSets,
    /// Length-prefixed at emission; held bare here.
    pub digit_sets: Vec<u32>,
    pub script_sets: ScriptSets,
    pub boolprop_sets: BoolPropSets,
    /// Record catalog in id order.
    pub records: Vec<Record>,
    pub layout: RecordLayout,
    pub stage: CompressedTable,
    /// Record for codepoints above the domain, for consumers that can
    /// be handed values beyond it.
    pub out_of_range: Record,
}

impl UcdTables {
    /// Resolve a codepoint to its interned record.
    ///
    /// This is the access pattern the emitted tables support; consumers
    /// reproduce it branch-free over the static arrays.
    pub fn lookup(&self, cp: u32) -> &Record {
        if cp >= MAX_UNICODE {
            return &self.out_of_range;
        }
        &self.records[self.stage.lookup(cp) as usize]
    }

    /// Total encoded size in bytes of the two-stage table and the record
    /// catalog, as minimized by the block-size search.
    pub fn total_size(&self) -> usize {
        self.stage.total_size
    }
}

/// Run the whole pipeline.
///
/// Consumes the input because the case-delta array is repaired in place and
/// the repaired values are what the records carry.
pub fn generate(mut input: UcdInput, enums: &Enumerations) -> Result<UcdTables, GenError> {
    let caseless = caseless::build(&mut input.other_case)?;
    let script_sets = scriptx::encode(&input.script_extensions, enums.script_set_words)?;
    let boolprop_sets = boolprops::encode(&input.bool_props, enums.bool_set_words)?;
    let digit_sets = digits::digit_runs(&input.digit_ranges, enums.category_id("Nd")?);

    let columns: [&[i32]; RECORD_FIELDS] = [
        &input.script,
        &input.category,
        &input.break_prop,
        &caseless.offsets,
        &input.other_case,
        &script_sets.offsets,
        &input.bidi_class,
        &boolprop_sets.index,
    ];
    let record_table = records::intern(&columns);
    let layout = RecordLayout::of(&record_table.records)?;

    let record_bytes = record_table.records.len() * layout.size;
    let stage = stage::compress_best(&record_table.index, record_bytes)?;

    let out_of_range = [
        enums.script_id("Unknown")?,
        enums.category_id("Cn")?,
        enums.break_id("Other")?,
        0,
        0,
        0,
        enums.bidi_id("L")?,
        0,
    ];

    Ok(UcdTables {
        version: input.version.unwrap_or_default(),
        caseless,
        digit_sets,
        script_sets,
        boolprop_sets,
        records: record_table.records,
        layout,
        stage,
        out_of_range,
    })
}
