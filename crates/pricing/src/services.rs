//! Additional-service charge computation.

use serde::{Deserialize, Serialize};
use tracing::warn;

use prepbill_catalog::{AdditionalServiceKind, AdditionalServicePricing};
use prepbill_core::{DomainResult, Money};

/// Admin-assigned quantity for one requested add-on service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAssignment {
    pub kind: AdditionalServiceKind,
    pub quantity: u32,
}

/// Computed charge for one add-on service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCharge {
    pub kind: AdditionalServiceKind,
    pub quantity: u32,
    pub unit_price: Money,
    pub amount: Money,
}

/// `quantity * unit_price`, cent-exact.
pub fn service_charge(quantity: u32, unit_price: Money) -> DomainResult<Money> {
    unit_price.checked_mul(u64::from(quantity))
}

/// Build the invoice's service-charge list from admin assignments.
///
/// Zero-quantity assignments are omitted entirely - the invoice shows the
/// absence of a service, never a 0.00 entry for it. A missing pricing
/// configuration contributes nothing and is left to admin follow-up.
pub fn charge_services(
    pricing: Option<&AdditionalServicePricing>,
    assignments: &[ServiceAssignment],
) -> DomainResult<Vec<ServiceCharge>> {
    let Some(pricing) = pricing else {
        if assignments.iter().any(|a| a.quantity > 0) {
            warn!("additional services requested but no service pricing configured");
        }
        return Ok(Vec::new());
    };

    let mut charges = Vec::new();
    for assignment in assignments {
        if assignment.quantity == 0 {
            continue;
        }
        let unit_price = pricing.price_for(assignment.kind);
        let amount = service_charge(assignment.quantity, unit_price)?;
        charges.push(ServiceCharge {
            kind: assignment.kind,
            quantity: assignment.quantity,
            unit_price,
            amount,
        });
    }
    Ok(charges)
}
