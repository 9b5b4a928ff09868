use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{FinancingError, Result};
use crate::types::FinancingRequest;

/// financing policy
///
/// The named constants that parameterize both calculators: default down
/// payment, default term, monthly interest rate, and the three fee
/// components folded into the financed principal. Passed explicitly to the
/// calculators so tests and multi-tenant deployments can vary the policy
/// without touching the calculation logic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancingPolicy {
    /// fraction of the vehicle price due upfront when the request carries
    /// no explicit down payment
    pub default_down_payment_rate: Rate,
    pub default_term_months: u32,
    /// interest rate per month, not per year
    pub monthly_interest_rate: Rate,
    /// flat contract-processing fee added to the principal
    pub administrative_fee: Money,
    /// flat fee for the GPS tracking device installed on financed vehicles
    pub tracking_device_fee: Money,
    /// insurance charged as a fraction of the vehicle price
    pub insurance_rate: Rate,
}

impl Default for FinancingPolicy {
    /// the dealership's standard policy: 60% down, 36 months, 1.5%/month,
    /// $386 administrative fee, $686 tracking device, 3% insurance
    fn default() -> Self {
        Self {
            default_down_payment_rate: Rate::from_percentage(dec!(60)),
            default_term_months: 36,
            monthly_interest_rate: Rate::from_percentage(dec!(1.5)),
            administrative_fee: Money::from_major(386),
            tracking_device_fee: Money::from_major(686),
            insurance_rate: Rate::from_percentage(dec!(3)),
        }
    }
}

impl FinancingPolicy {
    /// down payment for a request: explicit override, or the policy
    /// percentage of the vehicle price
    pub fn resolve_down_payment(&self, request: &FinancingRequest) -> Money {
        match request.down_payment {
            Some(down_payment) => down_payment,
            None => request.vehicle_price.apply_rate(self.default_down_payment_rate),
        }
    }

    /// term for a request: explicit positive override, or the policy default
    pub fn resolve_term(&self, request: &FinancingRequest) -> u32 {
        match request.term_months {
            Some(months) if months > 0 => months,
            _ => self.default_term_months,
        }
    }

    /// insurance fee derived from the vehicle price
    pub fn insurance_fee(&self, vehicle_price: Money) -> Money {
        vehicle_price.apply_rate(self.insurance_rate)
    }

    /// amount actually financed: vehicle balance after the down payment,
    /// plus administrative, tracking-device, and insurance fees
    ///
    /// This is the strict path used by contract issuance. A down payment
    /// larger than the price is rejected rather than producing a
    /// negative-balance contract.
    pub fn compute_principal(&self, vehicle_price: Money, down_payment: Money) -> Result<Money> {
        let vehicle_balance = vehicle_price - down_payment;
        if vehicle_balance.is_negative() {
            return Err(FinancingError::DownPaymentExceedsPrice {
                vehicle_price,
                down_payment,
            });
        }

        Ok(vehicle_balance
            + self.administrative_fee
            + self.tracking_device_fee
            + self.insurance_fee(vehicle_price))
    }
}
