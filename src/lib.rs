//! # ucdgen
//!
//! Build-time compressor for Unicode character property tables.
//!
//! A table parser (not part of this crate) turns the Unicode data files
//! into dense per-codepoint arrays; `ucdgen` compresses them into a
//! two-stage lookup table plus auxiliary side tables, and emits the result
//! as a Rust source module. The emitted tables support O(1) branch-free
//! property lookup:
//!
//! ```text
//! UCD_RECORDS[UCD_STAGE2[UCD_STAGE1[cp / BLOCK] * BLOCK + cp % BLOCK]]
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use ucdgen::prelude::*;
//!
//! let enums = Enumerations::new(
//!     vec!["Unknown".into(), "Latin".into()],
//!     vec!["Zzzz".into(), "Latn".into()],
//!     vec!["Cn".into(), "Lu".into(), "Ll".into(), "Nd".into()],
//!     vec!["Other".into()],
//!     vec!["L".into()],
//!     vec!["ASCII".into(), "Bidi_Mirrored".into()],
//! );
//! let mut input = UcdInput::new(&enums).unwrap();
//! input.script[0x41] = enums.script_id("Latin").unwrap();
//! input.category[0x41] = enums.category_id("Lu").unwrap();
//! input.other_case[0x41] = 0x20;
//!
//! let tables = generate(input, &enums).unwrap();
//! let record = tables.lookup(0x41);
//! assert_eq!(record[0], enums.script_id("Latin").unwrap());
//! assert_eq!(record[4], 0x20);
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`ucd`] | Codepoint domain, symbol lists, raw input model |
//! | [`width`] | Minimal-width integer type selection |
//! | [`caseless`] | Multi-character caseless equivalence sets |
//! | [`scriptx`] | Script-extension catalog and bitmaps |
//! | [`boolprops`] | Boolean-property catalog and bitmaps |
//! | [`records`] | Record interning and layout |
//! | [`stage`] | Two-stage compression, block-size search |
//! | [`digits`] | Decimal-digit run extraction |
//! | [`generate`] | End-to-end pipeline |
//! | [`emit`] | Serialization of the generated tables |
//! | [`error`] | Error types |

pub mod boolprops;
pub mod caseless;
pub mod digits;
pub mod emit;
pub mod error;
pub mod generate;
pub mod prelude;
pub mod records;
pub mod scriptx;
pub mod stage;
pub mod ucd;
pub mod width;

#[cfg(test)]
mod testutil;
