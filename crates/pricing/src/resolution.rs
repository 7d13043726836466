//! Price resolution states.
//!
//! A line's price is not always a real computed rate: Custom products and
//! pallet existing-inventory lines carry deliberate placeholders until an
//! administrator prices them, and a missing catalog row is a valid
//! "unpriced" state. Modeling these as tagged variants keeps a placeholder
//! from ever being mistaken for a computed price.

use serde::{Deserialize, Serialize};
use tracing::warn;

use prepbill_catalog::{FlatRateKind, PricingCatalog, ProductType, Service};
use prepbill_core::{Money, OwnerId};

/// Fixed unit price shown for Custom-type products pending admin pricing.
pub const CUSTOM_PLACEHOLDER_RATE: Money = Money::from_cents(100);

/// Why a line carries a placeholder price instead of a resolved rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderReason {
    /// Custom product type: fixed 1.00 until an admin prices the request.
    PendingAdminPricing,
    /// Pallet sourced from existing inventory: 0.00 until admin review.
    ExistingInventoryReview,
}

/// Outcome of a rate lookup for one shipment line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceResolution {
    /// A configured catalog rate applies.
    Resolved { rate: Money, pack_surcharge: Money },
    /// A provisional price the submitter sees; the authoritative price is
    /// set later by an administrator. Never recalculated by tier logic.
    Placeholder {
        value: Money,
        reason: PlaceholderReason,
    },
    /// No rate configured. Renders as zero; never blocks submission.
    Unpriced,
}

impl PriceResolution {
    /// The per-unit rate this resolution contributes to a line total.
    pub fn effective_rate(&self) -> Money {
        match self {
            PriceResolution::Resolved { rate, .. } => *rate,
            PriceResolution::Placeholder { value, .. } => *value,
            PriceResolution::Unpriced => Money::ZERO,
        }
    }

    /// Pack surcharge rate; only resolved catalog rates carry one.
    pub fn pack_surcharge(&self) -> Money {
        match self {
            PriceResolution::Resolved { pack_surcharge, .. } => *pack_surcharge,
            _ => Money::ZERO,
        }
    }

    /// True when the line must be surfaced to the admin pricing workflow.
    pub fn needs_admin_pricing(&self) -> bool {
        !matches!(self, PriceResolution::Resolved { .. })
    }
}

/// Where a pallet shipment originates; existing inventory is priced manually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PalletOrigin {
    NewShipment,
    ExistingInventory,
}

/// Resolve the rate for a tiered product line.
///
/// Custom products bypass tier resolution entirely and keep their fixed
/// placeholder; a catalog miss resolves to `Unpriced` rather than failing,
/// so shipment creation is never blocked by missing pricing.
pub fn resolve_product_rate(
    catalog: &impl PricingCatalog,
    owner: OwnerId,
    service: Service,
    product_type: ProductType,
    quantity: u32,
) -> PriceResolution {
    if product_type == ProductType::Custom {
        return PriceResolution::Placeholder {
            value: CUSTOM_PLACEHOLDER_RATE,
            reason: PlaceholderReason::PendingAdminPricing,
        };
    }

    match catalog.rule(owner, service, product_type, quantity) {
        Some(rule) => PriceResolution::Resolved {
            rate: rule.rate,
            pack_surcharge: rule.pack_surcharge,
        },
        None => {
            warn!(
                %owner,
                ?service,
                ?product_type,
                quantity,
                "no pricing rule configured; line flagged for admin pricing"
            );
            PriceResolution::Unpriced
        }
    }
}

/// Resolve a flat-rate kind (box forwarding, container handling, storage).
///
/// Flat kinds carry no pack surcharge.
pub fn resolve_flat_rate(
    catalog: &impl PricingCatalog,
    owner: OwnerId,
    kind: FlatRateKind,
) -> PriceResolution {
    match catalog.flat_rate(owner, kind) {
        Some(flat) => PriceResolution::Resolved {
            rate: flat.price,
            pack_surcharge: Money::ZERO,
        },
        None => {
            warn!(%owner, ?kind, "no flat rate configured; line flagged for admin pricing");
            PriceResolution::Unpriced
        }
    }
}

/// Resolve a pallet line.
///
/// Pallets forwarded from a new shipment use the flat pallet-forwarding
/// rate; pallets already sitting in inventory are deliberately priced 0.00
/// until an administrator reviews and charges them.
pub fn resolve_pallet_rate(
    catalog: &impl PricingCatalog,
    owner: OwnerId,
    origin: PalletOrigin,
) -> PriceResolution {
    match origin {
        PalletOrigin::NewShipment => {
            resolve_flat_rate(catalog, owner, FlatRateKind::PalletForwarding)
        }
        PalletOrigin::ExistingInventory => PriceResolution::Placeholder {
            value: Money::ZERO,
            reason: PlaceholderReason::ExistingInventoryReview,
        },
    }
}
