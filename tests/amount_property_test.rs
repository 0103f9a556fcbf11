mod common;

use paysera_redirect::domain::amount::Amount;
use paysera_redirect::domain::payment::PaymentRequest;
use paysera_redirect::error::PayseraError;
use rand::Rng;
use rust_decimal::Decimal;

/// round(a * 100), half away from zero, computed on the integer mantissa.
fn expected_minor_units(units: i64, scale: u32) -> i64 {
    // a = units / 10^scale, so a * 100 = units * 100 / 10^scale
    let numerator = units as i128 * 100;
    let denominator = 10i128.pow(scale);
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder * 2 >= denominator {
        (quotient + 1) as i64
    } else {
        quotient as i64
    }
}

#[test]
fn test_minor_units_matches_rounding_for_random_amounts() {
    let mut rng = rand::thread_rng();

    for _ in 0..10_000 {
        let scale = rng.gen_range(0..=6u32);
        let units = rng.gen_range(1..=1_000_000_000_000i64);
        let value = Decimal::new(units, scale);

        let amount = Amount::new(value).unwrap();
        assert_eq!(
            amount.to_minor_units().unwrap(),
            expected_minor_units(units, scale),
            "amount {value}"
        );
    }
}

#[test]
fn test_non_positive_amounts_are_rejected() {
    let mut rng = rand::thread_rng();

    for _ in 0..1_000 {
        let value = Decimal::new(-rng.gen_range(0..=1_000_000i64), rng.gen_range(0..=4u32));
        assert!(matches!(
            PaymentRequest::new("1001", value),
            Err(PayseraError::InvalidAmount(_))
        ));
    }
}

#[test]
fn test_minor_units_reach_the_gateway() {
    let config = common::site_config();
    let builder = common::builder();

    for (value, expected) in [
        (Decimal::new(1999, 2), "1999"),
        (Decimal::new(1, 2), "1"),
        (Decimal::new(10_005, 3), "1001"),
        (Decimal::new(42, 0), "4200"),
    ] {
        let request = PaymentRequest::new("1001", value).unwrap();
        let params = builder.parameters(&request, &config, common::ORIGIN).unwrap();
        assert_eq!(params.get("amount"), Some(expected), "amount {value}");
    }
}
