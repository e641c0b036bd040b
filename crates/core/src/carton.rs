//! Carton lot types.

use nalgebra::Vector3;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A lot of identical cartons belonging to one shipment.
///
/// The lot tracks the remaining (not yet packed) carton count; the layering
/// engine drains it as cartons are committed to pallets.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CartonLot {
    /// Shipment identifier this lot belongs to.
    shipment_id: String,

    /// Dimensions (length, width, height).
    dimensions: Vector3<f64>,

    /// Remaining carton count.
    quantity: u32,
}

impl CartonLot {
    /// Creates a new carton lot with the given shipment id and dimensions.
    pub fn new(shipment_id: impl Into<String>, length: f64, width: f64, height: f64) -> Self {
        Self {
            shipment_id: shipment_id.into(),
            dimensions: Vector3::new(length, width, height),
            quantity: 1,
        }
    }

    /// Sets the carton count.
    pub fn with_quantity(mut self, n: u32) -> Self {
        self.quantity = n;
        self
    }

    /// Returns the shipment identifier.
    pub fn shipment_id(&self) -> &str {
        &self.shipment_id
    }

    /// Returns the dimensions (length, width, height).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the length.
    pub fn length(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the remaining carton count.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns true if no cartons remain in this lot.
    pub fn is_drained(&self) -> bool {
        self.quantity == 0
    }

    /// Volume of a single carton.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Human-readable size label, e.g. `"60x50x30"`.
    pub fn size_label(&self) -> String {
        format!(
            "{}x{}x{}",
            self.dimensions.x, self.dimensions.y, self.dimensions.z
        )
    }

    /// Removes packed cartons from the remaining quantity.
    ///
    /// Saturates at zero; the remaining count never goes negative.
    pub fn deduct(&mut self, packed: u32) {
        self.quantity = self.quantity.saturating_sub(packed);
    }

    /// Validates the lot for packing.
    pub fn validate(&self) -> Result<()> {
        if self.shipment_id.trim().is_empty() {
            return Err(Error::InvalidCarton(
                "Shipment identifier must not be empty".into(),
            ));
        }

        let finite = self.dimensions.iter().all(|d| d.is_finite());
        if !finite || self.dimensions.iter().any(|d| *d <= 0.0) {
            return Err(Error::InvalidCarton(format!(
                "All dimensions for '{}' must be positive",
                self.shipment_id
            )));
        }

        if self.quantity == 0 {
            return Err(Error::InvalidCarton(format!(
                "Quantity for '{}' must be at least 1",
                self.shipment_id
            )));
        }

        Ok(())
    }
}
