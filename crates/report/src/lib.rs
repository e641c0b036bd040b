//! Carton table ingestion and pallet report export.
//!
//! This crate is the thin I/O wrapper around the packing core:
//! - Carton table parser for CSV and JSON input, with row validation
//! - Packing report with summary printing and CSV/JSON export
//! - Input template generation

mod export;
mod parser;

pub use export::{write_template, PackingReport};
pub use parser::{CartonTableParser, ParseError, COLUMNS};
