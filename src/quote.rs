use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::policy::FinancingPolicy;
use crate::types::FinancingRequest;

/// headline financing quote for catalog cards and marketing banners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FinancingQuote {
    pub monthly_payment: Money,
    pub down_payment: Money,
    pub term_months: u32,
    pub total_debt: Money,
}

impl FinancingQuote {
    /// all-zero quote returned when the input cannot be priced
    pub fn zeroed() -> Self {
        Self::default()
    }
}

/// quote calculator
///
/// Simple-interest-on-total model: interest is charged once on the full
/// principal for the whole term and the result divided evenly. This is the
/// rough marketing estimate shown on catalog cards. It deliberately does
/// NOT match [`AmortizationEngine`](crate::AmortizationEngine), which
/// charges interest on the declining balance; the two are separate
/// products and their divergence is preserved.
#[derive(Debug, Clone)]
pub struct QuoteCalculator {
    policy: FinancingPolicy,
}

impl QuoteCalculator {
    pub fn new(policy: FinancingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &FinancingPolicy {
        &self.policy
    }

    /// compute the headline quote for a request
    ///
    /// Never fails: a non-positive price or a down payment above the price
    /// yields a zeroed quote. This backs live UI fields that recompute on
    /// every keystroke and must not throw into a rendering path.
    pub fn quote(&self, request: &FinancingRequest) -> FinancingQuote {
        if !request.vehicle_price.is_positive() {
            return FinancingQuote::zeroed();
        }

        let down_payment = self.policy.resolve_down_payment(request);
        let term_months = self.policy.resolve_term(request);

        let principal = match self.policy.compute_principal(request.vehicle_price, down_payment) {
            Ok(principal) => principal,
            Err(_) => return FinancingQuote::zeroed(),
        };

        let monthly_rate = self.policy.monthly_interest_rate.as_decimal();
        let total_interest = principal * monthly_rate * Decimal::from(term_months);
        let total_debt = principal + total_interest;
        let monthly_payment = total_debt / Decimal::from(term_months);

        FinancingQuote {
            monthly_payment,
            down_payment,
            term_months,
            total_debt,
        }
    }
}
