// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with logging to see canonical retries and failed scale reductions:
//   cargo run --example basic_usage --features logging

use dec128::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Dec128 Example ===\n");

    // Configure division and square root precision once at startup
    let cfg = DecimalConfig::new(8).unwrap();
    if let Err(e) = cfg.install() {
        eprintln!("Failed to install config: {}", e);
        return;
    }
    println!(
        "Default precision: {} digits\n",
        DecimalConfig::global().default_precision
    );

    // Build a small invoice
    let lines = [("Widget", "19.99", 3), ("Cable", "4.50", 2), ("Screw", "0.045", 40)];

    println!("Invoice lines:");
    let mut subtotal = Dec128::ZERO;
    for (name, price, qty) in lines {
        let price: Dec128 = price.parse().unwrap();
        let amount = price * Dec128::from(qty);
        println!("  {:<8} {:>3} x {:>7} = {:>8}", name, qty, price, amount);
        subtotal = subtotal + amount;
    }

    let tax_rate: Dec128 = "0.0825".parse().unwrap();
    let tax = (subtotal * tax_rate).round(2);
    let total = subtotal + tax;
    println!("\n  Subtotal: {:>10}", subtotal.format_fixed());
    println!("  Tax:      {:>10}", tax.format_fixed());
    println!("  Total:    {:>10}", total.round(2).format_fixed());

    // Split the bill three ways with every rounding mode
    println!("\n=== Splitting {} three ways ===", total);
    let share = total / Dec128::from(3);
    println!("  Exact share: {}", share);
    for mode in [
        RoundingMode::Down,
        RoundingMode::Up,
        RoundingMode::TowardZero,
        RoundingMode::AwayFromZero,
        RoundingMode::HalfTowardZero,
        RoundingMode::HalfAwayFromZero,
        RoundingMode::HalfEven,
    ] {
        println!("  {:<18} {}", format!("{:?}", mode), share.round_with(mode, 2));
    }

    // Errors travel with the value and are checked once
    println!("\n=== Sticky errors ===");
    let max = Dec128::from_uint128(Uint128::MAX, 0);
    let chain = (max * Dec128::from(2) + Dec128::ONE).sqrt().round(2);
    match chain.into_result() {
        Ok(v) => println!("  Unexpected value: {}", v),
        Err(e) => println!("  Chain failed: {}", e),
    }
    println!("  JSON form: {}", chain.format_json());
    println!("  sqrt(-4): {:?}", Dec128::from(-4).sqrt());

    println!("\n=== Example Complete ===");
}
