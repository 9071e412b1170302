//! Derived money figures for an order.

use serde::{Deserialize, Serialize};

use super::{LineItem, Money};

/// Charge rates applied when deriving totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargePolicy {
    /// Tax rate in basis points (800 = 8%).
    pub tax_rate_bps: u32,

    /// Flat service fee shown on the bill.
    pub service_fee: Money,
}

impl ChargePolicy {
    /// Creates a policy with the given rates.
    pub fn new(tax_rate_bps: u32, service_fee: Money) -> Self {
        Self {
            tax_rate_bps,
            service_fee,
        }
    }

    /// Tax owed on a subtotal.
    pub fn tax_on(&self, subtotal: Money) -> Money {
        subtotal.scale_bps(self.tax_rate_bps)
    }

    /// Grand total for a subtotal.
    ///
    /// Derived in one step from the subtotal rather than by adding the
    /// separately rounded tax, so the two figures can differ by a cent.
    /// The service fee is a displayed line only and is not added here.
    pub fn grand_total_on(&self, subtotal: Money) -> Money {
        subtotal.scale_bps(10_000 + self.tax_rate_bps)
    }
}

impl Default for ChargePolicy {
    fn default() -> Self {
        Self {
            tax_rate_bps: 800,
            service_fee: Money::zero(),
        }
    }
}

/// The four money figures derived from an order's lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of line totals.
    pub subtotal: Money,

    /// Tax on the subtotal.
    pub tax: Money,

    /// Flat service fee from the policy.
    pub service_fee: Money,

    /// Subtotal grown by the tax rate.
    pub grand_total: Money,
}

impl Totals {
    /// Derives totals from the given lines.
    ///
    /// Always recomputed from the current lines; nothing is cached.
    pub fn over(items: &[LineItem], policy: &ChargePolicy) -> Self {
        let subtotal = items
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total());
        Self {
            subtotal,
            tax: policy.tax_on(subtotal),
            service_fee: policy.service_fee,
            grand_total: policy.grand_total_on(subtotal),
        }
    }

    /// Totals of an empty order.
    pub fn empty(policy: &ChargePolicy) -> Self {
        Self::over(&[], policy)
    }
}
