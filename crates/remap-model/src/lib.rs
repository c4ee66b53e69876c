#![deny(unsafe_code)]

//! Data model for item identifier remapping.
//!
//! The central type is [`MappingIndex`], a two-tier lookup table built once
//! from `(id, name)` pairs and shared read-only by every rewrite pass.

pub mod cell;
pub mod entry;
pub mod index;

pub use cell::CellValue;
pub use entry::MappingEntry;
pub use index::{MappingIndex, Resolution, ResolveTier};
