//! Greedy layer-packing engine.

use palletizer_core::{CartonLot, PalletDetail, PalletSpec, PalletSummary};

use crate::orientation::select_orientation;

/// Greedy layer-packing engine for one shipment group at a time.
///
/// Pallets are filled with whole layers of one carton size at a time, largest
/// cartons first, until the group is drained or no remaining carton can be
/// placed. The algorithm is a heuristic: it commits the locally best-looking
/// placement per pass and never backtracks.
pub struct LayerPacker {
    pallet: PalletSpec,
}

impl LayerPacker {
    /// Creates a new packer for the given pallet.
    pub fn new(pallet: PalletSpec) -> Self {
        Self { pallet }
    }

    /// Creates a packer for the standard 122 x 102 x 194 pallet.
    pub fn standard() -> Self {
        Self::new(PalletSpec::standard())
    }

    /// Returns the pallet specification.
    pub fn pallet(&self) -> &PalletSpec {
        &self.pallet
    }

    /// Packs one shipment group onto successive pallets.
    ///
    /// All lots must share one shipment id; quantities are drained in place
    /// as cartons are committed, which is why the group is taken by value.
    /// Lots are processed in descending single-carton volume order (ties
    /// keep input order) so that larger cartons claim height budget first.
    ///
    /// Cartons that fit on no pallet in any orientation, or are taller than
    /// the pallet, are left out of every summary; once a full pass places
    /// nothing, the loop stops and the empty pallet is discarded.
    pub fn pack_group(&self, mut lots: Vec<CartonLot>) -> Vec<PalletSummary> {
        let Some(first) = lots.first() else {
            return Vec::new();
        };
        let shipment_id = first.shipment_id().to_string();
        debug_assert!(
            lots.iter().all(|l| l.shipment_id() == shipment_id),
            "pack_group expects lots of a single shipment"
        );

        // Stable sort keeps the input order among equal volumes.
        lots.sort_by(|a, b| {
            b.volume()
                .partial_cmp(&a.volume())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut pallets = Vec::new();
        let mut pallet_number = 1;

        while remaining_cartons(&lots) > 0 {
            let summary = self.fill_pallet(&mut lots, &shipment_id, pallet_number);

            // Named halt condition: a pass that placed nothing means every
            // remaining carton is unplaceable, so the loop must stop here
            // rather than spin on the same quantities forever.
            let placed_this_pass = !summary.is_empty();
            if !placed_this_pass {
                log::debug!(
                    "Shipment {}: {} cartons unplaceable, stopping",
                    shipment_id,
                    remaining_cartons(&lots)
                );
                break;
            }

            log::debug!(
                "Shipment {}: pallet {} holds {} cartons, height {:.1}",
                shipment_id,
                summary.pallet_number,
                summary.packed_cartons,
                summary.height_used
            );
            pallets.push(summary);
            pallet_number += 1;
        }

        pallets
    }

    /// Runs one pallet-construction pass over the sorted lots.
    fn fill_pallet(
        &self,
        lots: &mut [CartonLot],
        shipment_id: &str,
        pallet_number: u32,
    ) -> PalletSummary {
        let mut summary = PalletSummary::new(shipment_id, pallet_number);

        for lot in lots.iter_mut() {
            if lot.is_drained() {
                continue;
            }

            let fit = select_orientation(&self.pallet, lot.length(), lot.width());
            if !fit.is_placeable() {
                continue;
            }

            // A non-positive or non-finite height is as unplaceable as an
            // oversized footprint.
            let carton_height = lot.height();
            if !carton_height.is_finite() || carton_height <= 0.0 {
                continue;
            }

            let remaining_height = self.pallet.height() - summary.height_used;
            let max_layers = (remaining_height / carton_height).floor() as u64;
            if max_layers == 0 {
                continue;
            }

            let max_by_height = fit.cartons_per_layer.saturating_mul(max_layers);
            let to_pack = u64::from(lot.quantity()).min(max_by_height) as u32;
            if to_pack == 0 {
                continue;
            }

            let layers_used = u64::from(to_pack).div_ceil(fit.cartons_per_layer);
            let height_add = layers_used as f64 * carton_height;
            // Guard against layer rounding over-allocating the height budget;
            // the lot is skipped for this pallet rather than partially packed.
            if summary.height_used + height_add > self.pallet.height() {
                continue;
            }

            lot.deduct(to_pack);
            summary.height_used += height_add;
            summary.packed_cartons += to_pack;

            // Footprint extents of the fullest layer of this lot. The
            // pallet-level extents are the bounding box over all lots placed
            // on it, not a sum.
            let count_along_length =
                (self.pallet.length() / fit.orientation.length).floor() as u64;
            let first_layer = u64::from(to_pack).min(fit.cartons_per_layer);
            let rows_used = first_layer.div_ceil(count_along_length);

            let length_occupied = self
                .pallet
                .length()
                .min(count_along_length as f64 * fit.orientation.length);
            let width_occupied = self
                .pallet
                .width()
                .min(rows_used as f64 * fit.orientation.width);

            summary.length_used = summary.length_used.max(length_occupied);
            summary.width_used = summary.width_used.max(width_occupied);

            summary
                .details
                .push(PalletDetail::new(lot.size_label(), to_pack));
        }

        summary
    }
}

impl Default for LayerPacker {
    fn default() -> Self {
        Self::standard()
    }
}

/// Total cartons still waiting to be packed.
fn remaining_cartons(lots: &[CartonLot]) -> u64 {
    lots.iter().map(|l| u64::from(l.quantity())).sum()
}
