#![deny(unsafe_code)]

//! Tabular I/O glue for the remapper.
//!
//! The core engine only sees `(id, name)` pairs and raw cell text; this
//! crate supplies both from row-oriented tabular files and writes rewritten
//! rows back out.

pub mod columns;
pub mod error;
pub mod mapping;
pub mod table;

pub use columns::column_index;
pub use error::{IngestError, Result};
pub use mapping::{mapping_entries, row_cell};
pub use table::{TableFormat, read_rows, write_rows};
