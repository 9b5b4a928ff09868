use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// financing request from a customer or catalog lookup
///
/// only the vehicle price is required; the down payment and term fall back
/// to policy defaults when not supplied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancingRequest {
    pub vehicle_price: Money,
    pub down_payment: Option<Money>,
    pub term_months: Option<u32>,
}

impl FinancingRequest {
    pub fn new(vehicle_price: Money) -> Self {
        Self {
            vehicle_price,
            down_payment: None,
            term_months: None,
        }
    }

    /// override the policy-default down payment
    pub fn with_down_payment(mut self, down_payment: Money) -> Self {
        self.down_payment = Some(down_payment);
        self
    }

    /// override the policy-default term
    pub fn with_term(mut self, term_months: u32) -> Self {
        self.term_months = Some(term_months);
        self
    }
}
