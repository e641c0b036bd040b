//! Footprint orientation selection.

use palletizer_core::PalletSpec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An oriented carton footprint: the carton's length/width pair aligned
/// against the pallet's length/width axes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Orientation {
    /// Footprint extent along the pallet length axis.
    pub length: f64,
    /// Footprint extent along the pallet width axis.
    pub width: f64,
}

impl Orientation {
    /// Sentinel orientation for cartons that cannot be placed.
    pub const ZERO: Orientation = Orientation {
        length: 0.0,
        width: 0.0,
    };

    /// Creates a new orientation.
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }
}

/// How many cartons of one footprint fit in a single pallet layer, and in
/// which orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerFit {
    /// Cartons per layer in the chosen orientation.
    pub cartons_per_layer: u64,
    /// The chosen orientation.
    pub orientation: Orientation,
}

impl LayerFit {
    /// A fit for a carton that cannot be placed at all.
    pub fn unplaceable() -> Self {
        Self {
            cartons_per_layer: 0,
            orientation: Orientation::ZERO,
        }
    }

    /// Returns true if at least one carton fits per layer.
    pub fn is_placeable(&self) -> bool {
        self.cartons_per_layer > 0
    }
}

/// Selects the footprint orientation that maximizes cartons per layer.
///
/// Evaluates the carton's length/width pair against the pallet footprint in
/// both orientations and keeps the one with the strictly greater count; a
/// tie keeps the length-first orientation, so the choice is stable and
/// deterministic for a given input.
///
/// Non-finite or non-positive dimensions yield [`LayerFit::unplaceable`];
/// the caller is expected to skip such cartons, never to treat this as an
/// error.
pub fn select_orientation(pallet: &PalletSpec, length: f64, width: f64) -> LayerFit {
    if !length.is_finite() || !width.is_finite() || length <= 0.0 || width <= 0.0 {
        return LayerFit::unplaceable();
    }

    let mut best = LayerFit::unplaceable();

    for (l, w) in [(length, width), (width, length)] {
        let count_along_length = (pallet.length() / l).floor() as u64;
        let count_along_width = (pallet.width() / w).floor() as u64;
        let total = count_along_length.saturating_mul(count_along_width);

        if total > best.cartons_per_layer {
            best = LayerFit {
                cartons_per_layer: total,
                orientation: Orientation::new(l, w),
            };
        }
    }

    best
}
