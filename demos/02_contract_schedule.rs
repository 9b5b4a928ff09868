/// contract schedule - full amortization table for a purchase contract
use vehicle_financing_rs::chrono::Utc;
use vehicle_financing_rs::{AmortizationEngine, FinancingPolicy, FinancingRequest, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = AmortizationEngine::new(FinancingPolicy::default());

    // customer puts $15,000 down on a $20,000 vehicle over 48 months
    let request = FinancingRequest::new(Money::from_major(20_000))
        .with_down_payment(Money::from_major(15_000))
        .with_term(48);

    // strict entry point: a signing flow must not get an empty schedule
    let schedule = engine.contract_schedule(&request, Utc::now())?;

    println!("monthly payment: {}", schedule.monthly_payment.round_dp(2));
    println!("total debt:      {}", schedule.total_debt.round_dp(2));
    println!();

    for entry in &schedule.entries {
        println!(
            "{}  due {}  capital {:>10}  balance {:>10}",
            entry.description,
            entry.due_date.format("%Y-%m-%d"),
            entry.capital_payment.round_dp(2).to_string(),
            entry.balance.round_dp(2).to_string(),
        );
    }

    Ok(())
}
