#![deny(unsafe_code)]

//! Command-line interface for the item remapper.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
