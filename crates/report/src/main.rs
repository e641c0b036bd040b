//! Palletization CLI

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use palletizer_core::PalletSpec;
use palletizer_packing::{pack_shipments, LayerPacker};
use palletizer_report::{write_template, CartonTableParser, PackingReport};

#[derive(Parser)]
#[command(name = "pallet-runner")]
#[command(about = "Packs shipment cartons onto pallets with a greedy layer heuristic")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a carton table onto pallets
    Pack {
        /// Input carton table (.csv or .json)
        input: PathBuf,

        /// Output file for results (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for CSV results
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Pallet length
        #[arg(long, default_value_t = PalletSpec::STANDARD_LENGTH)]
        pallet_length: f64,

        /// Pallet width
        #[arg(long, default_value_t = PalletSpec::STANDARD_WIDTH)]
        pallet_width: f64,

        /// Maximum pallet load height
        #[arg(long, default_value_t = PalletSpec::STANDARD_HEIGHT)]
        pallet_height: f64,
    },

    /// Write an empty input template
    Template {
        /// Destination path
        #[arg(short, long, default_value = "carton_template.csv")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pack {
            input,
            output,
            csv,
            pallet_length,
            pallet_width,
            pallet_height,
        } => {
            let pallet = PalletSpec::new(pallet_length, pallet_width, pallet_height);
            pallet.validate()?;

            let lots = CartonTableParser::new().parse_file(&input)?;
            if lots.is_empty() {
                println!("No valid carton rows found in {}", input.display());
                return Ok(());
            }

            let packer = LayerPacker::new(pallet);
            let report = PackingReport::new(pack_shipments(&packer, lots));

            if report.is_empty() {
                println!("No cartons could be packed onto pallets.");
            } else {
                report.print_summary();
            }

            if let Some(path) = output {
                report.save_json(&path)?;
                println!("Results saved to: {}", path.display());
            }

            if let Some(path) = csv {
                report.save_csv(&path)?;
                println!("CSV saved to: {}", path.display());
            }
        }

        Commands::Template { output } => {
            write_template(&output)?;
            println!("Template written to: {}", output.display());
        }
    }

    Ok(())
}
