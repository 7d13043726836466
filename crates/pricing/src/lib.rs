//! `prepbill-pricing` — price resolution and per-line charge computation.
//!
//! Everything here is a deterministic function of its inputs: a catalog
//! snapshot plus the line's own fields. The same functions serve the live
//! customer-facing preview and the final authoritative invoice, so
//! recomputing with identical inputs must yield identical results.

pub mod line;
pub mod resolution;
pub mod services;

pub use line::{PricedLine, ShipmentLineItem, line_total, price_line};
pub use resolution::{
    CUSTOM_PLACEHOLDER_RATE, PalletOrigin, PlaceholderReason, PriceResolution,
    resolve_flat_rate, resolve_pallet_rate, resolve_product_rate,
};
pub use services::{ServiceAssignment, ServiceCharge, charge_services, service_charge};
