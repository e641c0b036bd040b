//! Shipment partitioning.

use std::collections::BTreeMap;

use palletizer_core::{CartonLot, PalletSummary};

use crate::packer::LayerPacker;

/// Partitions carton lots into per-shipment groups.
///
/// Each group owns an independent vector of its lots, since packing drains
/// quantities in place. Groups iterate in sorted shipment-id order, which
/// keeps the output stable for a given input table.
pub fn group_by_shipment(lots: Vec<CartonLot>) -> BTreeMap<String, Vec<CartonLot>> {
    let mut groups: BTreeMap<String, Vec<CartonLot>> = BTreeMap::new();

    for lot in lots {
        groups
            .entry(lot.shipment_id().to_string())
            .or_default()
            .push(lot);
    }

    groups
}

/// Packs every shipment group and concatenates the resulting pallets.
///
/// Groups are packed independently of one another; pallet numbers restart
/// at 1 within each shipment.
pub fn pack_shipments(packer: &LayerPacker, lots: Vec<CartonLot>) -> Vec<PalletSummary> {
    let mut pallets = Vec::new();

    for (shipment_id, group) in group_by_shipment(lots) {
        let packed = packer.pack_group(group);
        log::debug!("Shipment {}: {} pallets", shipment_id, packed.len());
        pallets.extend(packed);
    }

    pallets
}
