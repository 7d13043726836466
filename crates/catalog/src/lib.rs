//! `prepbill-catalog` — rate-card data model and read-only catalog lookup.
//!
//! The catalog is a snapshot of admin-configured pricing: tiered product
//! rates keyed by (service, tier, product type), flat rates for the
//! non-tiered shipment kinds, and per-unit add-on service prices. Lookups
//! never mutate the catalog, and a miss is a valid state ("no rate
//! configured yet"), not an error.

pub mod catalog;
pub mod rules;
pub mod tier;

pub use catalog::{InMemoryPricingCatalog, PricingCatalog};
pub use rules::{
    AdditionalServiceKind, AdditionalServicePricing, ContainerSize, FlatRateKind, FlatRatePricing,
    PricingRule, ProductType, Service,
};
pub use tier::{QuantityRange, Tier};
