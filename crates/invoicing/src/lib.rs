//! `prepbill-invoicing` — invoice aggregation.
//!
//! Sums priced shipment lines and add-on service charges into a gross total,
//! applies a clamped discount, and freezes the result as an immutable
//! `Invoice` for whatever rendering layer consumes it. Aggregation is
//! deterministic and idempotent: the live preview and the final authoritative
//! invoice run through the same pure computation and must agree bit-for-bit.

pub mod discount;
pub mod invoice;

pub use discount::{Discount, DiscountSource, RawDiscount};
pub use invoice::{Invoice, InvoiceDraft, InvoiceId, TAX_NOTICE, Totals};
