//! # Palletizer Packing
//!
//! Greedy layer-packing algorithms for the palletizer engine.
//!
//! This crate turns a table of carton lots into a sequence of packed
//! pallets:
//!
//! - [`orientation::select_orientation`] picks the carton footprint
//!   orientation that maximizes cartons per pallet layer
//! - [`packer::LayerPacker`] fills pallets layer by layer for one shipment
//!   group, draining lot quantities until nothing more can be placed
//! - [`shipment::pack_shipments`] partitions a mixed table by shipment id
//!   and packs each group independently
//!
//! The whole computation is a deterministic, single-threaded fold over its
//! input; there is no randomness and no search beyond the greedy choice.

pub mod orientation;
pub mod packer;
pub mod shipment;

// Re-exports
pub use orientation::{select_orientation, LayerFit, Orientation};
pub use packer::LayerPacker;
pub use shipment::{group_by_shipment, pack_shipments};
pub use palletizer_core::{CartonLot, Error, PackSummary, PalletSpec, PalletSummary, Result};
