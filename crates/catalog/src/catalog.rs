//! Read-only pricing catalog contract and in-memory snapshot.

use std::collections::HashMap;

use prepbill_core::OwnerId;

use crate::rules::{
    AdditionalServicePricing, FlatRateKind, FlatRatePricing, PricingRule, ProductType, Service,
};
use crate::tier::Tier;

/// Read-only rate lookup, scoped per catalog owner.
///
/// A `None` result means "no rate configured" - a valid terminal state, not
/// an error. Callers render a zero/placeholder price and flag the line for
/// admin review; shipment creation is never blocked by a missing rate.
pub trait PricingCatalog {
    /// Tiered product rate for a service/product-type/quantity combination.
    ///
    /// The tier is derived from `quantity` internally; callers never pass one.
    fn rule(
        &self,
        owner: OwnerId,
        service: Service,
        product_type: ProductType,
        quantity: u32,
    ) -> Option<&PricingRule>;

    /// The single authoritative flat-rate record for a kind.
    fn flat_rate(&self, owner: OwnerId, kind: FlatRateKind) -> Option<&FlatRatePricing>;

    /// Per-unit add-on service prices for an owner.
    fn additional_services(&self, owner: OwnerId) -> Option<&AdditionalServicePricing>;
}

/// In-memory catalog snapshot.
///
/// The portal's document store materializes one of these per pricing read;
/// the engine only ever sees the snapshot, so one aggregation call can never
/// observe a partially-applied catalog update.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPricingCatalog {
    rules: HashMap<(OwnerId, Service, Tier, ProductType), PricingRule>,
    flat_rates: HashMap<(OwnerId, FlatRateKind), FlatRatePricing>,
    services: HashMap<OwnerId, AdditionalServicePricing>,
}

impl InMemoryPricingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the rule for the rule's (service, tier,
    /// product_type) key. At most one rule exists per key per owner.
    pub fn upsert_rule(&mut self, owner: OwnerId, rule: PricingRule) {
        let key = (owner, rule.service, rule.tier, rule.product_type);
        self.rules.insert(key, rule);
    }

    /// Record a flat-rate entry; the latest `updated_at` per kind wins and
    /// stale writes are ignored, so reads always see one authoritative row.
    pub fn record_flat_rate(&mut self, owner: OwnerId, record: FlatRatePricing) {
        let key = (owner, record.kind);
        match self.flat_rates.get(&key) {
            Some(existing) if existing.updated_at > record.updated_at => {}
            _ => {
                self.flat_rates.insert(key, record);
            }
        }
    }

    pub fn set_additional_services(&mut self, owner: OwnerId, pricing: AdditionalServicePricing) {
        self.services.insert(owner, pricing);
    }
}

impl PricingCatalog for InMemoryPricingCatalog {
    fn rule(
        &self,
        owner: OwnerId,
        service: Service,
        product_type: ProductType,
        quantity: u32,
    ) -> Option<&PricingRule> {
        let tier = Tier::for_quantity(service, quantity);
        self.rules.get(&(owner, service, tier, product_type))
    }

    fn flat_rate(&self, owner: OwnerId, kind: FlatRateKind) -> Option<&FlatRatePricing> {
        self.flat_rates.get(&(owner, kind))
    }

    fn additional_services(&self, owner: OwnerId) -> Option<&AdditionalServicePricing> {
        self.services.get(&owner)
    }
}
