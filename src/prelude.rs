// prelude.rs - Convenient re-exports for the generator API.
//
//! # Prelude
//!
//! ```
//! use ucdgen::prelude::*;
//!
//! let width = IntWidth::for_values("example", [0i64, 300]).unwrap();
//! assert_eq!(width.type_name(), "u16");
//! ```

pub use crate::emit::{emit_file, render, EmitTables};
pub use crate::error::GenError;
pub use crate::generate::{generate, UcdTables};
pub use crate::ucd::{
    CategoryRange, Enumerations, UcdInput, MAX_UNICODE, NOTACHAR,
};
pub use crate::width::IntWidth;
