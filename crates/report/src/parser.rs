//! Carton table ingestion.
//!
//! Reads a carton table from CSV or JSON, validates every row and silently
//! drops the rows the packing core must never see: empty shipment ids,
//! non-numeric values, non-positive quantities or dimensions. Dropped rows
//! are counted and logged, mirroring how the upstream tooling filtered its
//! uploads.

use std::fs;
use std::path::Path;

use palletizer_core::CartonLot;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when reading a carton table.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid table: {0}")]
    InvalidFormat(String),
}

/// Required columns, in template order.
pub const COLUMNS: [&str; 5] = ["shipment", "cartons", "length", "width", "height"];

/// A raw JSON input row before validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    shipment_id: String,
    cartons: u32,
    length: f64,
    width: f64,
    height: f64,
}

/// Parser for carton tables.
#[derive(Debug, Default)]
pub struct CartonTableParser;

impl CartonTableParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a carton table from a file, dispatching on the extension
    /// (`.csv` or `.json`).
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<CartonLot>, ParseError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        if extension != "csv" && extension != "json" {
            return Err(ParseError::UnsupportedFormat(format!(
                "'{}' (expected .csv or .json)",
                extension
            )));
        }

        let content = fs::read_to_string(path)?;
        if extension == "csv" {
            self.parse_csv(&content)
        } else {
            self.parse_json(&content)
        }
    }

    /// Parses a carton table from CSV text.
    ///
    /// The header row is matched case-insensitively after trimming; column
    /// order is free. Rows that fail validation are dropped, not fatal.
    pub fn parse_csv(&self, text: &str) -> Result<Vec<CartonLot>, ParseError> {
        let mut lines = text.lines().filter(|l| !l.trim().is_empty());

        let header = lines
            .next()
            .ok_or_else(|| ParseError::InvalidFormat("empty table".into()))?;
        let columns = column_indices(header)?;

        let mut lots = Vec::new();
        let mut dropped = 0usize;

        for line in lines {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            match parse_row(&fields, &columns) {
                Some(lot) => lots.push(lot),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            log::warn!("Dropped {} invalid carton row(s) from CSV input", dropped);
        }

        Ok(lots)
    }

    /// Parses a carton table from a JSON array of row objects.
    pub fn parse_json(&self, json: &str) -> Result<Vec<CartonLot>, ParseError> {
        let rows: Vec<RawRow> = serde_json::from_str(json)?;

        let mut lots = Vec::new();
        let mut dropped = 0usize;

        for row in rows {
            let lot = CartonLot::new(row.shipment_id, row.length, row.width, row.height)
                .with_quantity(row.cartons);
            if lot.validate().is_ok() {
                lots.push(lot);
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            log::warn!("Dropped {} invalid carton row(s) from JSON input", dropped);
        }

        Ok(lots)
    }
}

/// Maps each required column name to its position in the header row.
fn column_indices(header: &str) -> Result<[usize; 5], ParseError> {
    let names: Vec<String> = header
        .split(',')
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();

    let mut indices = [0usize; 5];
    for (slot, column) in COLUMNS.iter().enumerate() {
        let position = names
            .iter()
            .position(|n| n.as_str() == *column || (*column == "shipment" && n == "shipment_id"));
        match position {
            Some(i) => indices[slot] = i,
            None => return Err(ParseError::MissingColumn((*column).to_string())),
        }
    }

    Ok(indices)
}

/// Builds a validated lot from one CSV row, or drops it.
fn parse_row(fields: &[&str], columns: &[usize; 5]) -> Option<CartonLot> {
    let field = |slot: usize| fields.get(columns[slot]).copied();

    let shipment = field(0)?;
    let cartons: u32 = field(1)?.parse().ok()?;
    let length: f64 = field(2)?.parse().ok()?;
    let width: f64 = field(3)?.parse().ok()?;
    let height: f64 = field(4)?.parse().ok()?;

    let lot = CartonLot::new(shipment, length, width, height).with_quantity(cartons);
    lot.validate().ok().map(|_| lot)
}
