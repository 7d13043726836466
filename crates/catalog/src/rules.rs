//! Rate-card record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use prepbill_core::Money;

use crate::tier::{QuantityRange, Tier};

/// Tiered product shipping service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    /// Amazon FBA / Walmart WFS / Target TFS prep.
    FbaWfsTfs,
    /// Fulfilled-by-merchant prep.
    Fbm,
}

/// Product sizing class.
///
/// `Custom` products never resolve against the catalog: they carry a fixed
/// placeholder price until an administrator sets the real one during request
/// approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Standard,
    Large,
    Custom,
}

/// Ocean-freight container size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerSize {
    Ft20,
    Ft40,
    Ft40Hc,
    Ft45,
}

/// Non-tiered shipment categories priced by a single flat per-unit rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlatRateKind {
    BoxForwarding,
    PalletForwarding,
    Container(ContainerSize),
    Storage,
}

/// Per-unit add-on services a customer can request on a shipment line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdditionalServiceKind {
    BubbleWrap,
    StickerRemoval,
    WarningLabel,
}

impl AdditionalServiceKind {
    /// Billing unit shown next to the quantity on rate cards and invoices.
    pub fn unit_label(self) -> &'static str {
        match self {
            AdditionalServiceKind::BubbleWrap => "per foot",
            AdditionalServiceKind::StickerRemoval => "per item",
            AdditionalServiceKind::WarningLabel => "per label",
        }
    }
}

/// One tiered rate entry.
///
/// Invariant: `tier` and `quantity_range` are always a matched pair; the
/// constructor derives the range from the tier so callers cannot supply a
/// mismatched one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRule {
    pub service: Service,
    pub tier: Tier,
    pub quantity_range: QuantityRange,
    pub product_type: ProductType,
    /// Charged per ordered unit.
    pub rate: Money,
    /// Charged once per pack beyond the first.
    pub pack_surcharge: Money,
}

impl PricingRule {
    pub fn new(
        service: Service,
        tier: Tier,
        product_type: ProductType,
        rate: Money,
        pack_surcharge: Money,
    ) -> Self {
        Self {
            service,
            tier,
            quantity_range: tier.quantity_range(service),
            product_type,
            rate,
            pack_surcharge,
        }
    }
}

/// Single non-tiered rate for box forwarding, pallet forwarding, container
/// handling, or storage.
///
/// Admins may write many historical records for the same kind; only the
/// latest by `updated_at` is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRatePricing {
    pub kind: FlatRateKind,
    pub price: Money,
    /// Pallet count the rate was quoted against (pallet-base storage only).
    pub pallet_count: Option<u32>,
    pub updated_at: DateTime<Utc>,
}

/// Per-unit prices for the three add-on services, configured independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalServicePricing {
    pub bubble_wrap_per_foot: Money,
    pub sticker_removal_per_item: Money,
    pub warning_label_per_label: Money,
}

impl AdditionalServicePricing {
    pub fn price_for(&self, kind: AdditionalServiceKind) -> Money {
        match kind {
            AdditionalServiceKind::BubbleWrap => self.bubble_wrap_per_foot,
            AdditionalServiceKind::StickerRemoval => self.sticker_removal_per_item,
            AdditionalServiceKind::WarningLabel => self.warning_label_per_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_constructor_pairs_tier_with_its_range() {
        let rule = PricingRule::new(
            Service::FbaWfsTfs,
            Tier::SmallBusiness,
            ProductType::Standard,
            Money::from_cents(8),
            Money::from_cents(100),
        );
        assert_eq!(rule.quantity_range.lower, 501);
        assert_eq!(rule.quantity_range.upper, Some(1000));
    }

    #[test]
    fn service_kinds_carry_their_billing_unit() {
        assert_eq!(AdditionalServiceKind::BubbleWrap.unit_label(), "per foot");
        assert_eq!(AdditionalServiceKind::StickerRemoval.unit_label(), "per item");
        assert_eq!(AdditionalServiceKind::WarningLabel.unit_label(), "per label");
    }

    #[test]
    fn service_pricing_maps_each_kind() {
        let pricing = AdditionalServicePricing {
            bubble_wrap_per_foot: Money::from_cents(50),
            sticker_removal_per_item: Money::from_cents(20),
            warning_label_per_label: Money::from_cents(15),
        };
        assert_eq!(
            pricing.price_for(AdditionalServiceKind::BubbleWrap),
            Money::from_cents(50)
        );
        assert_eq!(
            pricing.price_for(AdditionalServiceKind::StickerRemoval),
            Money::from_cents(20)
        );
        assert_eq!(
            pricing.price_for(AdditionalServiceKind::WarningLabel),
            Money::from_cents(15)
        );
    }
}
