pub mod decimal;
pub mod errors;
pub mod policy;
pub mod quote;
pub mod schedule;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{FinancingError, Result};
pub use policy::FinancingPolicy;
pub use quote::{FinancingQuote, QuoteCalculator};
pub use schedule::{AmortizationEngine, AmortizationEntry, AmortizationSchedule};
pub use types::FinancingRequest;

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
