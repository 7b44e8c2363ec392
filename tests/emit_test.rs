// emit_test.rs - Integration tests for the emitted artifact.

mod common;

use std::fs;

use ucdgen::prelude::*;

fn tables() -> UcdTables {
    let enums = common::enums();
    generate(common::input(&enums), &enums).unwrap()
}

#[test]
fn emitted_file_round_trips_through_the_filesystem() {
    let tables = tables();
    let path = std::env::temp_dir().join("ucdgen_emit_test.rs");

    emit_file(&path, &tables, EmitTables::ALL).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(text, render(&tables, EmitTables::ALL));
    assert!(text.contains("pub const UNICODE_VERSION: &str = \"15.0.0\";"));
    assert!(text.contains(&format!(
        "pub const UCD_BLOCK_SIZE: usize = {};",
        tables.stage.block_size
    )));
}

#[test]
fn caseless_set_members_appear_in_the_artifact() {
    let text = render(&tables(), EmitTables::CASELESS_SETS);
    assert!(text.contains("0x004b, 0x006b, 0x212a, NOTACHAR,"));
}

#[test]
fn digit_table_is_length_prefixed() {
    let text = render(&tables(), EmitTables::DIGIT_SETS);
    let start = text.find("UCD_DIGIT_SETS").unwrap();
    let body = &text[start..];
    assert!(body.contains("2,"));
    assert!(body.contains("0x00039,"));
    assert!(body.contains("0x00669,"));
}

#[test]
fn stage_tables_are_stable_across_renders() {
    let tables = tables();
    assert_eq!(
        render(&tables, EmitTables::STAGE_TABLES),
        render(&tables, EmitTables::STAGE_TABLES)
    );
}

#[test]
fn record_type_reflects_field_widths() {
    let tables = tables();
    let text = render(&tables, EmitTables::RECORDS);
    // The case-delta column spans the Kelvin fold (delta -8383), so its
    // field widens to i16; the id fields stay u8.
    assert!(text.contains("pub type UcdRecord = (u8, u8, u8, u8, i16, u8, u8, u8);"));
}
