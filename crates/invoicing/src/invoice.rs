//! Invoice assembly and aggregation.
//!
//! An [`InvoiceDraft`] collects priced lines and service charges while the
//! shipment is being assembled; `totals()` gives the live preview and is a
//! pure function of the draft's current content. [`InvoiceDraft::finalize`]
//! runs the same aggregation once more and freezes the result - corrections
//! after that point mean issuing a new invoice.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use prepbill_core::{DomainError, Money};
use prepbill_pricing::{PricedLine, ServiceCharge};

use crate::discount::DiscountSource;

/// Fixed notice carried on every invoice. Tax is handled out-of-band and is
/// never computed here; a labeled notice (rather than a 0.00 tax line) keeps
/// the invoice from implying tax was calculated and found to be zero.
pub const TAX_NOTICE: &str = "Sales tax excluded";

/// Invoice identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(Uuid);

impl InvoiceId {
    /// Create a new identifier (UUIDv7, time-ordered). Prefer passing IDs
    /// explicitly in tests for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for InvoiceId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for InvoiceId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("InvoiceId: {}", e)))?;
        Ok(Self(uuid))
    }
}

/// Derived invoice figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub items_subtotal: Money,
    pub additional_services_total: Money,
    pub gross_total: Money,
    pub discount_amount: Money,
    pub grand_total: Money,
}

/// Aggregation: subtotal -> gross -> clamped discount -> grand total.
///
/// Infallible on purpose: missing rates already arrived as zero-priced
/// lines, malformed discounts resolve to zero, and sums saturate rather
/// than abort - nothing here may block issuing an invoice.
fn compute_totals(
    lines: &[PricedLine],
    service_charges: &[ServiceCharge],
    discount: &DiscountSource,
) -> Totals {
    let items_subtotal = lines
        .iter()
        .fold(Money::ZERO, |acc, line| acc.saturating_add(line.total));
    let additional_services_total = service_charges
        .iter()
        .fold(Money::ZERO, |acc, charge| acc.saturating_add(charge.amount));
    let gross_total = items_subtotal.saturating_add(additional_services_total);
    let discount_amount = discount.resolve(gross_total);
    let grand_total = gross_total.saturating_sub(discount_amount);

    Totals {
        items_subtotal,
        additional_services_total,
        gross_total,
        discount_amount,
        grand_total,
    }
}

/// Invoice under assembly: line items and charges being added, totals
/// recomputed live on every input change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    lines: Vec<PricedLine>,
    service_charges: Vec<ServiceCharge>,
    discount: DiscountSource,
}

impl InvoiceDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: PricedLine) {
        self.lines.push(line);
    }

    pub fn push_service_charge(&mut self, charge: ServiceCharge) {
        self.service_charges.push(charge);
    }

    pub fn set_discount(&mut self, discount: DiscountSource) {
        self.discount = discount;
    }

    pub fn lines(&self) -> &[PricedLine] {
        &self.lines
    }

    pub fn service_charges(&self) -> &[ServiceCharge] {
        &self.service_charges
    }

    /// Live preview of the totals for the draft's current content.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.lines, &self.service_charges, &self.discount)
    }

    /// Run the aggregation once and freeze the invoice.
    ///
    /// `issued_at` is passed in (not sampled here) so finalizing identical
    /// drafts yields byte-identical invoices.
    pub fn finalize(self, id: InvoiceId, issued_at: DateTime<Utc>) -> Invoice {
        let totals = compute_totals(&self.lines, &self.service_charges, &self.discount);
        Invoice {
            id,
            issued_at,
            lines: self.lines,
            service_charges: self.service_charges,
            totals,
        }
    }
}

/// A finalized, immutable invoice - exactly what a rendering layer (PDF,
/// HTML, print) consumes. Any correction produces a new invoice; external
/// payment status lives in the persistence layer, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    issued_at: DateTime<Utc>,
    lines: Vec<PricedLine>,
    service_charges: Vec<ServiceCharge>,
    totals: Totals,
}

impl Invoice {
    pub fn id(&self) -> InvoiceId {
        self.id
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn lines(&self) -> &[PricedLine] {
        &self.lines
    }

    pub fn service_charges(&self) -> &[ServiceCharge] {
        &self.service_charges
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// The tax-excluded notice every rendering of the invoice must carry.
    pub fn tax_notice(&self) -> &'static str {
        TAX_NOTICE
    }

    /// Lines awaiting manual pricing, for the admin review workflow.
    pub fn lines_needing_admin_pricing(&self) -> impl Iterator<Item = &PricedLine> {
        self.lines.iter().filter(|line| line.needs_admin_pricing)
    }
}
