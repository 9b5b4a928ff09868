use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinancingError {
    #[error("down payment {down_payment} exceeds vehicle price {vehicle_price}")]
    DownPaymentExceedsPrice {
        vehicle_price: Money,
        down_payment: Money,
    },

    #[error("vehicle price must be positive: {vehicle_price}")]
    NonPositivePrice {
        vehicle_price: Money,
    },

    #[error("financing term must be at least one month")]
    ZeroTerm,
}

pub type Result<T> = std::result::Result<T, FinancingError>;
