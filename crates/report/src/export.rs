//! Pallet report export.

use std::fs;
use std::io;
use std::path::Path;

use palletizer_core::{PackSummary, PalletSummary};

use crate::parser::COLUMNS;

/// Header of the flat CSV output.
const OUTPUT_HEADER: &str =
    "shipment,pallet_number,packed_cartons,details,height_used,length_used,width_used";

/// A finished packing run, ready for display or export.
#[derive(Debug, Clone)]
pub struct PackingReport {
    pallets: Vec<PalletSummary>,
}

impl PackingReport {
    /// Wraps an output sequence of pallets.
    pub fn new(pallets: Vec<PalletSummary>) -> Self {
        Self { pallets }
    }

    /// Returns the packed pallets.
    pub fn pallets(&self) -> &[PalletSummary] {
        &self.pallets
    }

    /// Returns true if nothing was packed.
    pub fn is_empty(&self) -> bool {
        self.pallets.is_empty()
    }

    /// Aggregate statistics across all pallets.
    pub fn summary(&self) -> PackSummary {
        PackSummary::from(self.pallets.as_slice())
    }

    /// Prints a per-pallet breakdown and totals to stdout.
    pub fn print_summary(&self) {
        println!("Palletization Summary:");
        println!("{:-<72}", "");

        for p in &self.pallets {
            println!(
                "{} pallet {}: {} cartons, height {:.1}, footprint {:.1}x{:.1} | {}",
                p.shipment_id,
                p.pallet_number,
                p.packed_cartons,
                p.height_used,
                p.length_used,
                p.width_used,
                p.details_label()
            );
        }

        let totals = self.summary();
        println!("{:-<72}", "");
        println!(
            "{} shipment(s), {} pallet(s), {} carton(s) packed",
            totals.shipments, totals.pallets, totals.cartons_packed
        );
    }

    /// Renders the report as flat CSV text.
    pub fn to_csv(&self) -> String {
        let mut out = String::from(OUTPUT_HEADER);
        out.push('\n');

        for p in &self.pallets {
            out.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                csv_field(&p.shipment_id),
                p.pallet_number,
                p.packed_cartons,
                csv_field(&p.details_label()),
                p.height_used,
                p.length_used,
                p.width_used
            ));
        }

        out
    }

    /// Writes the report as CSV.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.to_csv())
    }

    /// Writes the report as pretty-printed JSON.
    pub fn save_json(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.pallets).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}

/// Writes a header-only CSV template for the input table.
pub fn write_template(path: impl AsRef<Path>) -> io::Result<()> {
    fs::write(path, format!("{}\n", COLUMNS.join(",")))
}

/// Quotes a CSV field when it contains separators or quotes.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palletizer_core::PalletDetail;

    fn sample_pallet() -> PalletSummary {
        let mut p = PalletSummary::new("SHIP-A", 1);
        p.packed_cartons = 16;
        p.height_used = 130.0;
        p.length_used = 120.0;
        p.width_used = 100.0;
        p.details.push(PalletDetail::new("60x50x30", 4));
        p.details.push(PalletDetail::new("40x30x20", 12));
        p
    }

    #[test]
    fn test_csv_output() {
        let report = PackingReport::new(vec![sample_pallet()]);
        let csv = report.to_csv();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some(OUTPUT_HEADER));
        // The details field carries a comma, so it must be quoted
        assert_eq!(
            lines.next(),
            Some("SHIP-A,1,16,\"60x50x30: 4, 40x30x20: 12\",130,120,100")
        );
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_summary_totals() {
        let report = PackingReport::new(vec![sample_pallet()]);
        let totals = report.summary();

        assert_eq!(totals.shipments, 1);
        assert_eq!(totals.pallets, 1);
        assert_eq!(totals.cartons_packed, 16);
    }

    #[test]
    fn test_template_round_trip() {
        use crate::parser::CartonTableParser;

        let dir = std::env::temp_dir().join("palletizer-template-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("template.csv");

        write_template(&path).unwrap();
        let lots = CartonTableParser::new().parse_file(&path).unwrap();

        // Header only, no rows
        assert!(lots.is_empty());
    }
}
