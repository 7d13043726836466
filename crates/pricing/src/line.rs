//! Shipment line totaling.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use prepbill_catalog::AdditionalServiceKind;
use prepbill_core::{DomainError, DomainResult, Money};

use crate::resolution::PriceResolution;

/// One product line inside a shipment request, as entered by the customer.
///
/// `quantity` is the ordered unit count; `pack_of` is how many units bundle
/// into one shipping pack (default 1). Requested add-on services carry no
/// quantities here - an admin assigns those during approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentLineItem {
    pub quantity: u32,
    pub pack_of: u32,
    pub pricing: PriceResolution,
    pub requested_services: BTreeSet<AdditionalServiceKind>,
}

impl ShipmentLineItem {
    pub fn new(quantity: u32, pricing: PriceResolution) -> Self {
        Self {
            quantity,
            pack_of: 1,
            pricing,
            requested_services: BTreeSet::new(),
        }
    }

    pub fn with_pack_of(mut self, pack_of: u32) -> Self {
        self.pack_of = pack_of;
        self
    }

    pub fn request_service(mut self, kind: AdditionalServiceKind) -> Self {
        self.requested_services.insert(kind);
        self
    }
}

/// A line after charge computation, ready for invoice aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedLine {
    pub quantity: u32,
    pub pack_of: u32,
    pub unit_price: Money,
    pub pack_surcharge: Money,
    pub total: Money,
    /// Set for placeholder/unpriced lines so the approval workflow can
    /// surface them ("admin can review and charge").
    pub needs_admin_pricing: bool,
    pub requested_services: BTreeSet<AdditionalServiceKind>,
}

/// Charge for one shipment line.
///
/// `total = rate * quantity + pack_surcharge * (pack_of - 1)`: the unit rate
/// applies per ordered unit regardless of packing, the first pack is free of
/// surcharge, and every additional pack is charged the surcharge once.
/// `pack_of` never shifts which tier applies - rate lookup happens on
/// `quantity` alone, before this function.
pub fn line_total(
    rate: Money,
    pack_surcharge: Money,
    quantity: u32,
    pack_of: u32,
) -> DomainResult<Money> {
    if quantity == 0 {
        return Err(DomainError::invalid_quantity(
            "quantity must be a positive integer",
        ));
    }
    if pack_of == 0 {
        return Err(DomainError::invalid_quantity(
            "pack size must be a positive integer",
        ));
    }

    let base = rate.checked_mul(u64::from(quantity))?;
    let surcharge = pack_surcharge.checked_mul(u64::from(pack_of - 1))?;
    base.checked_add(surcharge)
}

/// Price a shipment line from its resolution state.
///
/// Placeholder and unpriced lines flow through the same formula with their
/// effective rate (and zero surcharge), so a Custom line with quantity 10
/// previews as 10.00 pending admin pricing.
pub fn price_line(item: &ShipmentLineItem) -> DomainResult<PricedLine> {
    let unit_price = item.pricing.effective_rate();
    let pack_surcharge = item.pricing.pack_surcharge();
    let total = line_total(unit_price, pack_surcharge, item.quantity, item.pack_of)?;

    Ok(PricedLine {
        quantity: item.quantity,
        pack_of: item.pack_of,
        unit_price,
        pack_surcharge,
        total,
        needs_admin_pricing: item.pricing.needs_admin_pricing(),
        requested_services: item.requested_services.clone(),
    })
}
