// emit.rs - Serialization of the generated tables.
//
// Writes the frozen tables as a Rust source module the consumer compiles
// in. Table order is part of the reader contract: caseless sets, digit
// runs, script-extension bitmaps, boolean-property bitmaps, records,
// stage 1, stage 2. The consumer asserts the emitted block size against
// its own compile-time expectation; a mismatch there is correct behavior,
// not a generator bug.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use bitflags::bitflags;

use crate::error::GenError;
use crate::generate::UcdTables;
use crate::records::FIELD_NAMES;
use crate::width::IntWidth;

bitflags! {
    /// Selects which tables to write.
    ///
    /// Embedded test harnesses link a reduced artifact (the caseless sets
    /// are enough to exercise caseless matching); the full set is the
    /// default.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EmitTables: u32 {
        const CASELESS_SETS = 1 << 0;
        const DIGIT_SETS = 1 << 1;
        const SCRIPT_SETS = 1 << 2;
        const BOOLPROP_SETS = 1 << 3;
        const RECORDS = 1 << 4;
        const STAGE_TABLES = 1 << 5;
        const ALL = (1 << 6) - 1;
    }
}

const ELEMS_PER_LINE: usize = 16;

/// Write the selected tables to `path`, creating or truncating the file.
pub fn emit_file(path: &Path, tables: &UcdTables, which: EmitTables) -> Result<(), GenError> {
    let resource = || path.display().to_string();
    let file = File::create(path).map_err(|e| GenError::Resource {
        name: resource(),
        message: e.to_string(),
    })?;
    let mut out = BufWriter::new(file);
    write_tables(&mut out, tables, which).map_err(|e| GenError::Resource {
        name: resource(),
        message: e.to_string(),
    })
}

/// Render the selected tables to a string.
pub fn render(tables: &UcdTables, which: EmitTables) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    write_tables(&mut buf, tables, which).unwrap();
    String::from_utf8(buf).unwrap()
}

/// Write the selected tables to an arbitrary sink.
pub fn write_tables<W: Write>(
    out: &mut W,
    tables: &UcdTables,
    which: EmitTables,
) -> io::Result<()> {
    writeln!(
        out,
        "// Compressed Unicode character property tables.\n//"
    )?;
    writeln!(out, "// Generated file. Do not edit.\n//")?;
    writeln!(
        out,
        "// Total size: {} bytes, block size: {}.\n",
        tables.total_size(),
        tables.stage.block_size
    )?;
    writeln!(
        out,
        "pub const UNICODE_VERSION: &str = \"{}\";\n",
        tables.version
    )?;
    writeln!(
        out,
        "/// Sentinel larger than any codepoint; terminates each caseless set."
    )?;
    writeln!(out, "pub const NOTACHAR: u32 = 0xffffffff;\n")?;

    if which.contains(EmitTables::CASELESS_SETS) {
        write_caseless_sets(out, tables)?;
    }
    if which.contains(EmitTables::DIGIT_SETS) {
        write_digit_sets(out, tables)?;
    }
    if which.contains(EmitTables::SCRIPT_SETS) {
        write_bitsets(
            out,
            "UCD_SCRIPT_SETS",
            "script-extension bitmaps; bit i means script id i applies",
            &tables.script_sets.bitmaps,
            tables.script_sets.word_count,
        )?;
    }
    if which.contains(EmitTables::BOOLPROP_SETS) {
        write_bitsets(
            out,
            "UCD_BOOLPROP_SETS",
            "boolean-property bitmaps; bit i means property id i is set",
            &tables.boolprop_sets.bitmaps,
            tables.boolprop_sets.word_count,
        )?;
    }
    if which.contains(EmitTables::RECORDS) {
        write_records(out, tables)?;
    }
    if which.contains(EmitTables::STAGE_TABLES) {
        write_stage_tables(out, tables)?;
    }
    Ok(())
}

fn write_caseless_sets<W: Write>(out: &mut W, tables: &UcdTables) -> io::Result<()> {
    writeln!(
        out,
        "/// Sets of more than two codepoints that match each other caselessly,"
    )?;
    writeln!(
        out,
        "/// each terminated by NOTACHAR. Offset 0 is the empty set."
    )?;
    writeln!(out, "pub static UCD_CASELESS_SETS: &[u32] = &[")?;
    writeln!(out, "    NOTACHAR,")?;
    for set in &tables.caseless.sets {
        write!(out, "   ")?;
        for &member in set {
            write!(out, " 0x{:04x},", member)?;
        }
        writeln!(out, " NOTACHAR,")?;
    }
    writeln!(out, "];\n")?;
    Ok(())
}

fn write_digit_sets<W: Write>(out: &mut W, tables: &UcdTables) -> io::Result<()> {
    writeln!(
        out,
        "/// Codepoints of the '9' in each run of ten decimal digits, ascending."
    )?;
    writeln!(out, "/// The first element is the count of the rest.")?;
    writeln!(out, "pub static UCD_DIGIT_SETS: &[u32] = &[")?;
    write!(out, "    {},", tables.digit_sets.len())?;
    for (i, d) in tables.digit_sets.iter().enumerate() {
        if i % 8 == 0 {
            write!(out, "\n   ")?;
        }
        write!(out, " 0x{:05x},", d)?;
    }
    writeln!(out, "\n];\n")?;
    Ok(())
}

fn write_bitsets<W: Write>(
    out: &mut W,
    name: &str,
    doc: &str,
    bitmaps: &[u32],
    word_count: usize,
) -> io::Result<()> {
    writeln!(out, "/// Catalog of {}.", doc)?;
    writeln!(out, "pub static {}: &[u32] = &[", name)?;
    for entry in bitmaps.chunks(word_count) {
        write!(out, "   ")?;
        for word in entry {
            write!(out, " 0x{:08x},", word)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "];\n")?;
    Ok(())
}

fn write_records<W: Write>(out: &mut W, tables: &UcdTables) -> io::Result<()> {
    let tuple = record_tuple_type(&tables.layout.widths);
    writeln!(out, "/// One interned property record: ({}).", FIELD_NAMES.join(", "))?;
    writeln!(out, "/// {} bytes per record with field alignment.", tables.layout.size)?;
    writeln!(out, "pub type UcdRecord = {};\n", tuple)?;

    writeln!(out, "/// Record used for codepoints beyond the table domain.")?;
    write!(out, "pub const UCD_DUMMY_RECORD: UcdRecord = ")?;
    write_record(out, &tables.out_of_range)?;
    writeln!(out, ";\n")?;

    writeln!(out, "/// Record catalog, indexed by interned record id.")?;
    writeln!(out, "pub static UCD_RECORDS: &[UcdRecord] = &[")?;
    for (id, record) in tables.records.iter().enumerate() {
        write!(out, "    ")?;
        write_record(out, record)?;
        writeln!(out, ", // {}", id)?;
    }
    writeln!(out, "];\n")?;
    Ok(())
}

fn write_record<W: Write>(out: &mut W, record: &[i32]) -> io::Result<()> {
    write!(out, "(")?;
    for (i, value) in record.iter().enumerate() {
        if i > 0 {
            write!(out, ", ")?;
        }
        write!(out, "{}", value)?;
    }
    write!(out, ")")
}

fn write_stage_tables<W: Write>(out: &mut W, tables: &UcdTables) -> io::Result<()> {
    let stage = &tables.stage;
    writeln!(
        out,
        "/// Block size of the two-stage lookup; consumers must assert this"
    )?;
    writeln!(out, "/// matches their compiled-in expectation.")?;
    writeln!(
        out,
        "pub const UCD_BLOCK_SIZE: usize = {};\n",
        stage.block_size
    )?;

    let width = minimal_width("stage1", &stage.stage1);
    writeln!(out, "/// Stage 1: codepoint block number to stage-2 block index.")?;
    writeln!(out, "pub static UCD_STAGE1: &[{}] = &[", width.type_name())?;
    let per_line_span = stage.block_size * ELEMS_PER_LINE;
    for (i, line) in stage.stage1.chunks(ELEMS_PER_LINE).enumerate() {
        write!(out, "   ")?;
        for v in line {
            write!(out, " {:3},", v)?;
        }
        writeln!(out, " // U+{:04X}", i * per_line_span)?;
    }
    writeln!(out, "];\n")?;

    let width = minimal_width("stage2", &stage.stage2);
    writeln!(out, "/// Stage 2: deduplicated blocks of record ids.")?;
    writeln!(out, "pub static UCD_STAGE2: &[{}] = &[", width.type_name())?;
    for (n, block) in stage.stage2.chunks(stage.block_size).enumerate() {
        writeln!(out, "    // block {}", n)?;
        for line in block.chunks(ELEMS_PER_LINE) {
            write!(out, "   ")?;
            for v in line {
                write!(out, " {:3},", v)?;
            }
            writeln!(out)?;
        }
    }
    writeln!(out, "];")?;
    Ok(())
}

fn record_tuple_type(widths: &[IntWidth]) -> String {
    let names: Vec<&str> = widths.iter().map(|w| w.type_name()).collect();
    format!("({})", names.join(", "))
}

/// The widths here were already validated during generation, so the
/// selection cannot fail at emission time.
fn minimal_width(name: &str, values: &[u32]) -> IntWidth {
    IntWidth::for_values(name, values.iter().map(|&v| v as i64))
        .unwrap_or(IntWidth::U32)
}
