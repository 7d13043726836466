//! End-to-end billing flow: catalog snapshot -> rate resolution -> line
//! totals -> service charges -> finalized invoice.

use chrono::{TimeZone, Utc};
use prepbill_catalog::{
    AdditionalServiceKind, AdditionalServicePricing, FlatRateKind, FlatRatePricing,
    InMemoryPricingCatalog, PricingCatalog, PricingRule, ProductType, Service, Tier,
};
use prepbill_core::{Money, OwnerId};
use prepbill_invoicing::{DiscountSource, InvoiceDraft, InvoiceId, RawDiscount};
use prepbill_pricing::{
    PalletOrigin, ServiceAssignment, ShipmentLineItem, charge_services, price_line,
    resolve_pallet_rate, resolve_product_rate,
};

fn seeded_catalog(owner: OwnerId) -> InMemoryPricingCatalog {
    let mut catalog = InMemoryPricingCatalog::new();

    // FBA/WFS/TFS standard-size rate card: 0.10/unit + 1.00 per extra pack
    // in every tier (tiers priced identically to keep figures easy to audit).
    for tier in [Tier::Starter, Tier::Standard, Tier::SmallBusiness, Tier::Premium] {
        catalog.upsert_rule(
            owner,
            PricingRule::new(
                Service::FbaWfsTfs,
                tier,
                ProductType::Standard,
                Money::from_cents(10),
                Money::from_cents(100),
            ),
        );
    }

    catalog.record_flat_rate(
        owner,
        FlatRatePricing {
            kind: FlatRateKind::PalletForwarding,
            price: Money::from_cents(4_500),
            pallet_count: None,
            updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        },
    );

    catalog.set_additional_services(
        owner,
        AdditionalServicePricing {
            bubble_wrap_per_foot: Money::from_cents(50),
            sticker_removal_per_item: Money::from_cents(20),
            warning_label_per_label: Money::from_cents(15),
        },
    );

    catalog
}

#[test]
fn full_shipment_bills_to_the_expected_grand_total() {
    let owner = OwnerId::new();
    let catalog = seeded_catalog(owner);
    let mut draft = InvoiceDraft::new();

    // Line 1: 10 standard units, single pack -> 0.10 x 10 = 1.00. The
    // customer requests bubble wrap here; the quantity arrives later from
    // the admin assignment below.
    let resolution =
        resolve_product_rate(&catalog, owner, Service::FbaWfsTfs, ProductType::Standard, 10);
    let item = ShipmentLineItem::new(10, resolution)
        .request_service(AdditionalServiceKind::BubbleWrap);
    let line = price_line(&item).unwrap();
    assert_eq!(line.total, Money::from_cents(100));
    assert!(line.requested_services.contains(&AdditionalServiceKind::BubbleWrap));
    draft.push_line(line);

    // Line 2: same order packed in 3s -> 1.00 + 1.00 x 2 extra packs = 3.00.
    let resolution =
        resolve_product_rate(&catalog, owner, Service::FbaWfsTfs, ProductType::Standard, 10);
    let line = price_line(&ShipmentLineItem::new(10, resolution).with_pack_of(3)).unwrap();
    assert_eq!(line.total, Money::from_cents(300));
    draft.push_line(line);

    // Line 3: Custom product previews at the 1.00 placeholder -> 4.00.
    let resolution =
        resolve_product_rate(&catalog, owner, Service::FbaWfsTfs, ProductType::Custom, 4);
    let line = price_line(&ShipmentLineItem::new(4, resolution)).unwrap();
    assert_eq!(line.total, Money::from_cents(400));
    assert!(line.needs_admin_pricing);
    draft.push_line(line);

    // Line 4: pallet from existing inventory -> 0.00 pending admin review.
    let resolution = resolve_pallet_rate(&catalog, owner, PalletOrigin::ExistingInventory);
    let line = price_line(&ShipmentLineItem::new(2, resolution)).unwrap();
    assert_eq!(line.total, Money::ZERO);
    assert!(line.needs_admin_pricing);
    draft.push_line(line);

    // Admin-assigned add-on quantities: 5 ft bubble wrap (2.50), sticker
    // removal left at zero (absent), 4 warning labels (0.60).
    let charges = charge_services(
        catalog.additional_services(owner),
        &[
            ServiceAssignment {
                kind: AdditionalServiceKind::BubbleWrap,
                quantity: 5,
            },
            ServiceAssignment {
                kind: AdditionalServiceKind::StickerRemoval,
                quantity: 0,
            },
            ServiceAssignment {
                kind: AdditionalServiceKind::WarningLabel,
                quantity: 4,
            },
        ],
    )
    .unwrap();
    assert_eq!(charges.len(), 2);
    for charge in charges {
        draft.push_service_charge(charge);
    }

    // 10% off the gross.
    draft.set_discount(DiscountSource::Spec(RawDiscount::percent(10.0)));

    let invoice = draft.finalize(
        InvoiceId::new(),
        Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap(),
    );
    let totals = invoice.totals();

    // Items: 1.00 + 3.00 + 4.00 + 0.00 = 8.00; services: 2.50 + 0.60 = 3.10.
    assert_eq!(totals.items_subtotal, Money::from_cents(800));
    assert_eq!(totals.additional_services_total, Money::from_cents(310));
    assert_eq!(totals.gross_total, Money::from_cents(1_110));
    // 10% of 11.10 -> 1.11; grand 9.99.
    assert_eq!(totals.discount_amount, Money::from_cents(111));
    assert_eq!(totals.grand_total, Money::from_cents(999));
    assert_eq!(totals.grand_total.to_string(), "9.99");

    // Two lines await manual pricing; tax is a notice, never a computed line.
    assert_eq!(invoice.lines_needing_admin_pricing().count(), 2);
    assert_eq!(invoice.tax_notice(), "Sales tax excluded");
}

#[test]
fn missing_rates_never_block_invoice_creation() {
    let owner = OwnerId::new();
    let catalog = InMemoryPricingCatalog::new(); // nothing configured
    let mut draft = InvoiceDraft::new();

    let resolution =
        resolve_product_rate(&catalog, owner, Service::Fbm, ProductType::Large, 60);
    let line = price_line(&ShipmentLineItem::new(60, resolution)).unwrap();
    draft.push_line(line);

    let invoice = draft.finalize(
        InvoiceId::new(),
        Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap(),
    );
    assert_eq!(invoice.totals().grand_total, Money::ZERO);
    assert_eq!(invoice.lines_needing_admin_pricing().count(), 1);
}
