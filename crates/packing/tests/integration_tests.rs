//! Integration tests for palletizer-packing.

use approx::assert_relative_eq;
use palletizer_core::{CartonLot, PackSummary, PalletSpec};
use palletizer_packing::{pack_shipments, select_orientation, LayerPacker};

fn mixed_table() -> Vec<CartonLot> {
    vec![
        CartonLot::new("SHIP-A", 60.0, 50.0, 30.0).with_quantity(25),
        CartonLot::new("SHIP-A", 40.0, 30.0, 20.0).with_quantity(60),
        CartonLot::new("SHIP-A", 100.0, 100.0, 100.0).with_quantity(3),
        CartonLot::new("SHIP-B", 55.0, 45.0, 35.0).with_quantity(18),
        CartonLot::new("SHIP-B", 33.0, 33.0, 33.0).with_quantity(7),
    ]
}

mod conservation_tests {
    use super::*;

    #[test]
    fn test_packed_never_exceeds_input() {
        let lots = mixed_table();
        let initial: u64 = lots.iter().map(|l| u64::from(l.quantity())).sum();

        let pallets = pack_shipments(&LayerPacker::standard(), lots);
        let summary = PackSummary::from(pallets.as_slice());

        assert!(summary.cartons_packed <= initial);
    }

    #[test]
    fn test_fully_placeable_table_is_exhausted() {
        // Every size here fits the standard pallet, so equality must hold
        let lots = mixed_table();
        let initial: u64 = lots.iter().map(|l| u64::from(l.quantity())).sum();

        let pallets = pack_shipments(&LayerPacker::standard(), lots);
        let summary = PackSummary::from(pallets.as_slice());

        assert_eq!(summary.cartons_packed, initial);
    }

    #[test]
    fn test_unplaceable_quantities_stay_behind() {
        let lots = vec![
            CartonLot::new("SHIP-A", 50.0, 40.0, 250.0).with_quantity(5),
            CartonLot::new("SHIP-A", 60.0, 50.0, 30.0).with_quantity(4),
        ];

        let pallets = pack_shipments(&LayerPacker::standard(), lots);
        let summary = PackSummary::from(pallets.as_slice());

        assert_eq!(summary.cartons_packed, 4);
    }
}

mod bound_tests {
    use super::*;

    #[test]
    fn test_height_and_footprint_bounds() {
        let pallet = PalletSpec::standard();
        let pallets = pack_shipments(&LayerPacker::standard(), mixed_table());

        assert!(!pallets.is_empty());
        for p in &pallets {
            assert!(p.height_used <= pallet.height());
            assert!(p.length_used <= pallet.length());
            assert!(p.width_used <= pallet.width());
            assert!(p.packed_cartons > 0);
        }
    }

    #[test]
    fn test_detail_counts_sum_to_pallet_total() {
        let pallets = pack_shipments(&LayerPacker::standard(), mixed_table());

        for p in &pallets {
            let detail_sum: u32 = p.details.iter().map(|d| d.packed).sum();
            assert_eq!(detail_sum, p.packed_cartons);
        }
    }

    #[test]
    fn test_pallet_numbers_are_sequential_per_shipment() {
        let pallets = pack_shipments(&LayerPacker::standard(), mixed_table());

        for shipment in ["SHIP-A", "SHIP-B"] {
            let numbers: Vec<u32> = pallets
                .iter()
                .filter(|p| p.shipment_id == shipment)
                .map(|p| p.pallet_number)
                .collect();
            let expected: Vec<u32> = (1..=numbers.len() as u32).collect();
            assert_eq!(numbers, expected);
        }
    }
}

mod determinism_tests {
    use super::*;

    #[test]
    fn test_identical_input_identical_output() {
        let a = pack_shipments(&LayerPacker::standard(), mixed_table());
        let b = pack_shipments(&LayerPacker::standard(), mixed_table());

        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.shipment_id, y.shipment_id);
            assert_eq!(x.pallet_number, y.pallet_number);
            assert_eq!(x.packed_cartons, y.packed_cartons);
            assert_eq!(x.details, y.details);
            assert_relative_eq!(x.height_used, y.height_used);
            assert_relative_eq!(x.length_used, y.length_used);
            assert_relative_eq!(x.width_used, y.width_used);
        }
    }

    #[test]
    fn test_equal_volume_lots_keep_input_order() {
        // Same volume, different shapes; the stable sort must not swap them
        let lots = vec![
            CartonLot::new("SHIP-A", 60.0, 50.0, 30.0).with_quantity(2),
            CartonLot::new("SHIP-A", 50.0, 60.0, 30.0).with_quantity(2),
        ];

        let pallets = pack_shipments(&LayerPacker::standard(), lots);

        assert_eq!(pallets.len(), 1);
        assert_eq!(pallets[0].details[0].carton_size, "60x50x30");
        assert_eq!(pallets[0].details[1].carton_size, "50x60x30");
    }
}

mod orientation_property_tests {
    use super::*;

    #[test]
    fn test_selector_reference_case() {
        let fit = select_orientation(&PalletSpec::standard(), 50.0, 40.0);

        assert_eq!(fit.cartons_per_layer, 6);
        assert_relative_eq!(fit.orientation.length, 40.0);
        assert_relative_eq!(fit.orientation.width, 50.0);
    }

    #[test]
    fn test_selector_dominates_both_orientations() {
        let pallet = PalletSpec::standard();
        let sizes = [
            (50.0, 40.0),
            (61.0, 51.0),
            (122.0, 102.0),
            (7.5, 33.0),
            (90.0, 110.0),
        ];

        for (l, w) in sizes {
            let fit = select_orientation(&pallet, l, w);
            let as_given =
                (pallet.length() / l).floor() as u64 * (pallet.width() / w).floor() as u64;
            let rotated =
                (pallet.length() / w).floor() as u64 * (pallet.width() / l).floor() as u64;

            assert!(
                fit.cartons_per_layer >= as_given.max(rotated),
                "selector returned {} for {}x{}",
                fit.cartons_per_layer,
                l,
                w
            );
        }
    }
}

mod termination_tests {
    use super::*;

    #[test]
    fn test_pallet_count_bounded_by_quantity() {
        // Worst case is one carton per pallet; the loop must not run longer
        let lots = vec![CartonLot::new("SHIP-A", 100.0, 100.0, 100.0).with_quantity(9)];

        let pallets = pack_shipments(&LayerPacker::standard(), lots);

        assert_eq!(pallets.len(), 9);
        assert!(pallets.iter().all(|p| p.packed_cartons == 1));
    }

    #[test]
    fn test_all_unplaceable_yields_no_pallets() {
        let lots = vec![
            CartonLot::new("SHIP-A", 130.0, 110.0, 30.0).with_quantity(4),
            CartonLot::new("SHIP-A", 50.0, 40.0, 250.0).with_quantity(2),
        ];

        let pallets = pack_shipments(&LayerPacker::standard(), lots);

        assert!(pallets.is_empty());
    }
}
