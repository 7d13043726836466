//! Discount interpretation and resolution.

use serde::{Deserialize, Serialize};
use tracing::warn;

use prepbill_core::{DomainError, DomainResult, Money};

/// Interpreted discount specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discount {
    /// Fixed amount off the gross total.
    Amount(Money),
    /// Percentage of the gross total, in basis points (1/100 of a percent).
    Percent { basis_points: u32 },
}

impl Discount {
    /// Whole-percent convenience constructor (15 -> 15.00%).
    pub fn percent(whole_percent: u32) -> Self {
        Discount::Percent {
            basis_points: whole_percent * 100,
        }
    }

    /// Discount amount against a gross total, before clamping.
    pub fn amount_against(&self, gross: Money) -> Money {
        match self {
            Discount::Amount(amount) => *amount,
            Discount::Percent { basis_points } => gross.percent_bps(*basis_points),
        }
    }
}

/// Discount record as the portal's document store persists it: a type tag
/// plus a plain number. Interpreted (and validated) into [`Discount`] at
/// this boundary; nothing downstream touches floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDiscount {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
}

impl RawDiscount {
    pub fn amount(value: f64) -> Self {
        Self {
            kind: "amount".to_owned(),
            value,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            kind: "percent".to_owned(),
            value,
        }
    }

    /// Validate and convert to a typed [`Discount`].
    ///
    /// Rejects unknown type tags and non-finite or negative values (a
    /// negative discount would be a surcharge, which this model does not
    /// support).
    pub fn interpret(&self) -> DomainResult<Discount> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(DomainError::invalid_discount(format!(
                "value {} is not a non-negative number",
                self.value
            )));
        }

        match self.kind.as_str() {
            "amount" => {
                let cents = (self.value * 100.0).round();
                if cents > u64::MAX as f64 {
                    return Err(DomainError::invalid_discount("amount out of range"));
                }
                Ok(Discount::Amount(Money::from_cents(cents as u64)))
            }
            "percent" => {
                let basis_points = (self.value * 100.0).round();
                if basis_points > u32::MAX as f64 {
                    return Err(DomainError::invalid_discount("percentage out of range"));
                }
                Ok(Discount::Percent {
                    basis_points: basis_points as u32,
                })
            }
            other => Err(DomainError::invalid_discount(format!(
                "unknown discount type {other:?}"
            ))),
        }
    }
}

/// Where an invoice's discount comes from, in precedence order: an explicit
/// admin-entered amount beats the stored spec, and no spec means no discount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountSource {
    #[default]
    None,
    /// Final amount entered directly by an administrator; used as-is.
    Explicit(Money),
    /// Stored `{type, value}` record, interpreted at aggregation time.
    Spec(RawDiscount),
}

impl DiscountSource {
    /// Resolve to a concrete discount amount, clamped to `[0, gross]`.
    ///
    /// A malformed spec must never block issuing an invoice: it logs and
    /// falls back to no discount.
    pub fn resolve(&self, gross: Money) -> Money {
        let amount = match self {
            DiscountSource::None => Money::ZERO,
            DiscountSource::Explicit(amount) => *amount,
            DiscountSource::Spec(raw) => match raw.interpret() {
                Ok(discount) => discount.amount_against(gross),
                Err(err) => {
                    warn!(%err, "uninterpretable discount; issuing invoice without one");
                    Money::ZERO
                }
            },
        };
        // A discount can never exceed the gross total; Money is already
        // non-negative, which covers the lower bound.
        amount.min(gross)
    }
}
