/// headline quote - the "as low as $X/month" figure for catalog cards
use vehicle_financing_rs::{FinancingPolicy, FinancingRequest, Money, QuoteCalculator};

fn main() {
    let calculator = QuoteCalculator::new(FinancingPolicy::default());

    // a $20,000 vehicle with the standard 60% down, 36-month policy
    let request = FinancingRequest::new(Money::from_major(20_000));
    let quote = calculator.quote(&request);

    println!("down payment:    {}", quote.down_payment.round_dp(2));
    println!("term:            {} months", quote.term_months);
    println!("monthly payment: {}", quote.monthly_payment.round_dp(2));
    println!("total debt:      {}", quote.total_debt.round_dp(2));

    // a vehicle with no price yet quotes as zero instead of failing
    let unpriced = calculator.quote(&FinancingRequest::new(Money::ZERO));
    println!("unpriced quote:  {}", unpriced.monthly_payment);
}
