use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{FinancingError, Result};
use crate::policy::FinancingPolicy;
use crate::types::FinancingRequest;

/// terminal balances below this many currency units snap to zero,
/// absorbing rounding drift accumulated across the schedule
const BALANCE_EPSILON: Decimal = dec!(0.1);

/// one installment row of an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-based installment number
    pub number: u32,
    pub due_date: DateTime<Utc>,
    /// printable label, e.g. "Installment 01 of 36"
    pub description: String,
    pub capital_payment: Money,
    /// total installment amount, constant across a level-payment schedule
    pub amount: Money,
    /// principal remaining after this installment
    pub balance: Money,
}

impl AmortizationEntry {
    pub fn interest_payment(&self) -> Money {
        self.amount - self.capital_payment
    }
}

/// full month-by-month amortization table for a financed vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub monthly_payment: Money,
    pub down_payment: Money,
    pub term_months: u32,
    pub total_debt: Money,
    pub entries: Vec<AmortizationEntry>,
}

impl AmortizationSchedule {
    /// zeroed schedule with no entries, returned when the input cannot be priced
    pub fn empty() -> Self {
        Self {
            monthly_payment: Money::ZERO,
            down_payment: Money::ZERO,
            term_months: 0,
            total_debt: Money::ZERO,
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// get entry for a specific installment number
    pub fn get_entry(&self, number: u32) -> Option<&AmortizationEntry> {
        self.entries.get(number.checked_sub(1)? as usize)
    }

    /// sum of capital portions across the schedule
    pub fn total_capital(&self) -> Money {
        self.entries
            .iter()
            .map(|e| e.capital_payment)
            .fold(Money::ZERO, |acc, x| acc + x)
    }

    /// pretty-printed JSON, for embedding into generated contract documents
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// amortization engine
///
/// Level-payment (annuity) model used for legal contracts and the detailed
/// simulator: every installment has the same total amount, with interest
/// computed on the remaining balance and the rest applied to capital.
#[derive(Debug, Clone)]
pub struct AmortizationEngine {
    policy: FinancingPolicy,
}

impl AmortizationEngine {
    pub fn new(policy: FinancingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &FinancingPolicy {
        &self.policy
    }

    /// build the schedule for a request, defensively
    ///
    /// Never fails: a non-positive price or a down payment above the price
    /// yields an empty schedule. This backs the interactive simulator,
    /// which recomputes on every keystroke.
    pub fn schedule(
        &self,
        request: &FinancingRequest,
        issuance_date: DateTime<Utc>,
    ) -> AmortizationSchedule {
        if !request.vehicle_price.is_positive() {
            return AmortizationSchedule::empty();
        }

        let down_payment = self.policy.resolve_down_payment(request);
        let principal = match self.policy.compute_principal(request.vehicle_price, down_payment) {
            Ok(principal) => principal,
            Err(_) => return AmortizationSchedule::empty(),
        };
        let term_months = self.policy.resolve_term(request);

        self.build(principal, down_payment, term_months, issuance_date)
    }

    /// build the schedule for a request, strictly
    ///
    /// Contract-issuance entry point: invalid input raises instead of
    /// zeroing, so a signing flow can never silently produce an empty or
    /// negative-balance contract.
    pub fn contract_schedule(
        &self,
        request: &FinancingRequest,
        issuance_date: DateTime<Utc>,
    ) -> Result<AmortizationSchedule> {
        if !request.vehicle_price.is_positive() {
            return Err(FinancingError::NonPositivePrice {
                vehicle_price: request.vehicle_price,
            });
        }
        if request.term_months == Some(0) {
            return Err(FinancingError::ZeroTerm);
        }

        let down_payment = self.policy.resolve_down_payment(request);
        let principal = self
            .policy
            .compute_principal(request.vehicle_price, down_payment)?;
        let term_months = self.policy.resolve_term(request);

        Ok(self.build(principal, down_payment, term_months, issuance_date))
    }

    fn build(
        &self,
        principal: Money,
        down_payment: Money,
        term_months: u32,
        issuance_date: DateTime<Utc>,
    ) -> AmortizationSchedule {
        let monthly_rate = self.policy.monthly_interest_rate.as_decimal();
        let monthly_payment = level_payment_amount(principal, monthly_rate, term_months);
        let total_debt = monthly_payment * Decimal::from(term_months);

        let mut entries = Vec::with_capacity(term_months as usize);
        let mut balance = principal;

        for number in 1..=term_months {
            let interest_payment = Money::from_decimal(balance.as_decimal() * monthly_rate);
            let capital_payment = monthly_payment - interest_payment;

            balance = balance - capital_payment;
            if balance.as_decimal() < BALANCE_EPSILON {
                balance = Money::ZERO;
            }

            entries.push(AmortizationEntry {
                number,
                due_date: add_months(issuance_date, number),
                description: format!("Installment {:02} of {:02}", number, term_months),
                capital_payment,
                amount: monthly_payment,
                balance,
            });
        }

        AmortizationSchedule {
            monthly_payment,
            down_payment,
            term_months,
            total_debt,
            entries,
        }
    }
}

/// level installment via the annuity formula
/// PMT = P * r * (1 + r)^n / ((1 + r)^n - 1)
fn level_payment_amount(principal: Money, monthly_rate: Decimal, term_months: u32) -> Money {
    if term_months == 0 {
        return principal;
    }

    if monthly_rate.is_zero() {
        return principal / Decimal::from(term_months);
    }

    let base = Decimal::ONE + monthly_rate;
    let mut compound = Decimal::ONE;
    for _ in 0..term_months {
        compound *= base;
    }

    let numerator = principal.as_decimal() * monthly_rate * compound;
    let denominator = compound - Decimal::ONE;

    Money::from_decimal(numerator / denominator)
}

/// add calendar months, clamping the day to the target month's length
fn add_months(date: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    let total = date.year() * 12 + date.month0() as i32 + months as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));

    date.with_day(1)
        .and_then(|d| d.with_year(year))
        .and_then(|d| d.with_month(month))
        .and_then(|d| d.with_day(day))
        .unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
