//! Pallet specification.

use nalgebra::Vector3;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fixed-size pallet cartons are packed onto.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletSpec {
    /// Dimensions (length, width, height).
    dimensions: Vector3<f64>,
}

impl PalletSpec {
    /// Standard pallet length in centimeters.
    pub const STANDARD_LENGTH: f64 = 122.0;
    /// Standard pallet width in centimeters.
    pub const STANDARD_WIDTH: f64 = 102.0;
    /// Standard maximum load height in centimeters.
    pub const STANDARD_HEIGHT: f64 = 194.0;

    /// Creates a pallet specification with the given dimensions.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            dimensions: Vector3::new(length, width, height),
        }
    }

    /// The standard 122 x 102 x 194 pallet.
    pub fn standard() -> Self {
        Self::new(
            Self::STANDARD_LENGTH,
            Self::STANDARD_WIDTH,
            Self::STANDARD_HEIGHT,
        )
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

    /// Returns the maximum load height.
    pub fn height(&self) -> f64 {
        self.dimensions.z
    }

    /// Validates the pallet dimensions.
    pub fn validate(&self) -> Result<()> {
        let finite = self.dimensions.iter().all(|d| d.is_finite());
        if !finite || self.dimensions.iter().any(|d| *d <= 0.0) {
            return Err(Error::InvalidPallet(
                "All dimensions must be positive".into(),
            ));
        }

        Ok(())
    }
}

impl Default for PalletSpec {
    fn default() -> Self {
        Self::standard()
    }
}
