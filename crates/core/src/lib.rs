//! # Palletizer Core
//!
//! Core data model shared by the palletizer crates.
//!
//! This crate provides the types exchanged between the ingestion layer and
//! the layer-packing engine:
//!
//! - **[`CartonLot`]**: a quantity of identical cartons within a shipment
//! - **[`PalletSpec`]**: the fixed pallet dimensions
//! - **[`PalletSummary`]**: one packed pallet in the output sequence
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod carton;
pub mod error;
pub mod pallet;
pub mod result;

// Re-exports
pub use carton::CartonLot;
pub use error::{Error, Result};
pub use pallet::PalletSpec;
pub use result::{PackSummary, PalletDetail, PalletSummary};
