#![deny(unsafe_code)]

//! Cell rewriting engine.
//!
//! Parses the cell mini-syntax (segments separated by `&` or `|`, each a
//! group of `-`-joined identifier tokens with optional `$`-suffixes),
//! resolves every token through a [`remap_model::MappingIndex`], and
//! reassembles the cell with its original punctuation intact.

pub mod rewrite;
pub mod segment;

pub use rewrite::{DEFAULT_PREFIX, RewriteOptions, RewriteOutcome, rewrite, rewrite_text};
pub use segment::{Piece, Segment, split_segments};
