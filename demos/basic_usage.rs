// ============================================================================
// Basic Usage Example
// ============================================================================

use numeric_pair::prelude::*;
use rust_decimal::Decimal;

#[cfg(feature = "logging")]
fn init_logging() {
    if let Err(e) = numeric_pair::utils::init_logging(tracing::Level::TRACE) {
        eprintln!("logging disabled: {}", e);
    }
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

fn main() {
    init_logging();

    println!("=== Numeric Pair Example ===\n");

    // Integers with ordinary addition
    let native = NativeArithmetic::<i64>::new();
    let a = NumericPair::new(3i64, 4);
    let b = NumericPair::new(1i64, 2);
    println!("({}) + ({}) = {}", a, b, a.add(&b, &native));

    let mut cleared = a;
    cleared.clear_real(&native);
    println!("clear_real({}) = {}", a, cleared);

    // Same element type, max-plus semantics
    let traced = LoggingArithmetic::new("max-plus", MaxArithmetic);
    println!("max-plus: ({}) + ({}) = {}", a, b, a.add(&b, &traced));

    // Decimals with overflow detection
    let x = NumericPair::new(Decimal::MAX, Decimal::ONE);
    match x.checked_add(&NumericPair::new(Decimal::ONE, Decimal::ONE), &DecimalArithmetic) {
        Ok(sum) => println!("decimal sum: {}", sum),
        Err(e) => println!("decimal sum rejected: {}", e),
    }

    println!("\n=== Health Checks ===");
    for kind in FailureKind::ALL {
        println!("  {:<16} -> {:?}", kind.as_str(), run_check(kind));
    }

    match run_checks(&CheckConfig::all()) {
        Ok(report) => println!("\nReport {} at {}: {}", report.id(), report.checked_at(), report),
        Err(reason) => println!("\nInvalid check configuration: {}", reason),
    }

    if let Err(reason) = run_checks(&CheckConfig::new(Vec::new())) {
        println!("Empty configuration rejected: {}", reason);
    }
}
