//! Packing result representation.

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cartons of one size packed onto a pallet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletDetail {
    /// Carton size label, e.g. `"60x50x30"`.
    pub carton_size: String,

    /// Number of cartons of this size on the pallet.
    pub packed: u32,
}

impl PalletDetail {
    /// Creates a new detail entry.
    pub fn new(carton_size: impl Into<String>, packed: u32) -> Self {
        Self {
            carton_size: carton_size.into(),
            packed,
        }
    }
}

impl fmt::Display for PalletDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.carton_size, self.packed)
    }
}

/// One packed pallet.
///
/// Built incrementally while a pallet is being filled, then appended to the
/// output sequence and no longer touched.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletSummary {
    /// Shipment this pallet belongs to.
    pub shipment_id: String,

    /// 1-based pallet number, sequential within the shipment.
    pub pallet_number: u32,

    /// Total cartons placed on this pallet.
    pub packed_cartons: u32,

    /// Per-carton-size breakdown, in placement order.
    pub details: Vec<PalletDetail>,

    /// Occupied stack height.
    pub height_used: f64,

    /// Occupied footprint length.
    pub length_used: f64,

    /// Occupied footprint width.
    pub width_used: f64,
}

impl PalletSummary {
    /// Creates an empty summary for the given shipment and pallet number.
    pub fn new(shipment_id: impl Into<String>, pallet_number: u32) -> Self {
        Self {
            shipment_id: shipment_id.into(),
            pallet_number,
            packed_cartons: 0,
            details: Vec::new(),
            height_used: 0.0,
            length_used: 0.0,
            width_used: 0.0,
        }
    }

    /// Returns true if nothing was placed on this pallet.
    pub fn is_empty(&self) -> bool {
        self.packed_cartons == 0
    }

    /// Flat text rendering of the per-size breakdown,
    /// e.g. `"60x50x30: 4, 40x30x20: 12"`.
    pub fn details_label(&self) -> String {
        let parts: Vec<String> = self.details.iter().map(|d| d.to_string()).collect();
        parts.join(", ")
    }
}

/// Aggregate statistics over an output sequence of pallets.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackSummary {
    /// Number of distinct shipments.
    pub shipments: usize,
    /// Total pallets used.
    pub pallets: usize,
    /// Total cartons packed across all pallets.
    pub cartons_packed: u64,
}

impl From<&[PalletSummary]> for PackSummary {
    fn from(pallets: &[PalletSummary]) -> Self {
        let shipments: BTreeSet<&str> =
            pallets.iter().map(|p| p.shipment_id.as_str()).collect();

        Self {
            shipments: shipments.len(),
            pallets: pallets.len(),
            cartons_packed: pallets.iter().map(|p| u64::from(p.packed_cartons)).sum(),
        }
    }
}
