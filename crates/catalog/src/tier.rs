//! Quantity-to-tier resolution.
//!
//! The portal never passes a tier across the UI/engine boundary; the tier is
//! always derived from the ordered quantity. Boundaries are closed on the low
//! end and evaluated from the highest tier down, so every positive quantity
//! maps to exactly one tier per service - no gaps, no overlaps.

use serde::{Deserialize, Serialize};

use prepbill_core::ValueObject;

use crate::rules::Service;

/// Pricing bracket, selected automatically from order quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Premium,
    SmallBusiness,
    Standard,
    Starter,
}

/// Quantity bracket for a tier: inclusive lower bound, inclusive upper bound
/// (`None` = unbounded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuantityRange {
    pub lower: u32,
    pub upper: Option<u32>,
}

impl QuantityRange {
    pub fn contains(&self, quantity: u32) -> bool {
        quantity >= self.lower && self.upper.is_none_or(|upper| quantity <= upper)
    }
}

impl ValueObject for QuantityRange {}

/// Lower bounds for (Premium, SmallBusiness, Standard); Starter catches the
/// rest. Single source of truth for both resolution and range derivation.
fn tier_floors(service: Service) -> [u32; 3] {
    match service {
        Service::FbaWfsTfs => [1001, 501, 50],
        Service::Fbm => [101, 50, 25],
    }
}

impl Tier {
    /// Resolve the tier a quantity falls into for a given service.
    ///
    /// Highest tier whose floor the quantity meets wins.
    pub fn for_quantity(service: Service, quantity: u32) -> Tier {
        let [premium, small_business, standard] = tier_floors(service);
        if quantity >= premium {
            Tier::Premium
        } else if quantity >= small_business {
            Tier::SmallBusiness
        } else if quantity >= standard {
            Tier::Standard
        } else {
            Tier::Starter
        }
    }

    /// The quantity range `service` assigns to this tier.
    ///
    /// Derived from the same floors as [`Tier::for_quantity`], so the
    /// tier/range pair can never drift apart.
    pub fn quantity_range(self, service: Service) -> QuantityRange {
        let [premium, small_business, standard] = tier_floors(service);
        match self {
            Tier::Premium => QuantityRange {
                lower: premium,
                upper: None,
            },
            Tier::SmallBusiness => QuantityRange {
                lower: small_business,
                upper: Some(premium - 1),
            },
            Tier::Standard => QuantityRange {
                lower: standard,
                upper: Some(small_business - 1),
            },
            Tier::Starter => QuantityRange {
                lower: 1,
                upper: Some(standard - 1),
            },
        }
    }

    /// Display label used on invoices and rate cards.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Premium => "Premium",
            Tier::SmallBusiness => "Small Business",
            Tier::Standard => "Standard",
            Tier::Starter => "Starter",
        }
    }
}
