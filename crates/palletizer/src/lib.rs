//! # Palletizer
//!
//! Greedy layer-packing of shipment cartons onto fixed-size pallets.
//!
//! Carton lots are grouped by shipment id; each group is packed onto
//! successive pallets, whole layers of one carton size at a time, largest
//! cartons first, until the group is drained or nothing more fits.
//!
//! ## Quick Start
//!
//! ```rust
//! use palletizer::{pack_shipments, CartonLot, LayerPacker};
//!
//! let lots = vec![
//!     CartonLot::new("SHIP-A", 60.0, 50.0, 30.0).with_quantity(4),
//!     CartonLot::new("SHIP-A", 40.0, 30.0, 20.0).with_quantity(18),
//! ];
//!
//! let packer = LayerPacker::standard();
//! let pallets = pack_shipments(&packer, lots);
//! assert_eq!(pallets.len(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support for the data model

/// Core data model.
pub use palletizer_core as core;

/// Packing algorithms.
pub use palletizer_packing as packing;

// Re-export commonly used types at root level
pub use palletizer_core::{CartonLot, PackSummary, PalletDetail, PalletSpec, PalletSummary};
pub use palletizer_packing::{pack_shipments, select_orientation, LayerFit, LayerPacker};
