//! Integration tests for money types

use core_kernel::{Currency, Money, Rate};
use rust_decimal_macros::dec;

#[test]
fn money_serde_roundtrip() {
    let m = Money::new(dec!(1234.56), Currency::PHP);
    let json = serde_json::to_string(&m).unwrap();
    let back: Money = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn money_display_uses_currency_precision() {
    let usd = Money::new(dec!(1234.5), Currency::USD);
    assert_eq!(usd.to_string(), "$ 1234.50");

    let jpy = Money::new(dec!(1200), Currency::JPY);
    assert_eq!(jpy.to_string(), "¥ 1200");
}

#[test]
fn compounded_rates_apply_sequentially() {
    // 10% off, then 10% tax on the reduced amount
    let subtotal = Money::new(dec!(1000), Currency::USD);
    let discount = Rate::from_percentage(dec!(10)).apply(&subtotal);
    let after_discount = subtotal - discount;
    let tax = Rate::from_percentage(dec!(10)).apply(&after_discount);

    assert_eq!(discount.amount(), dec!(100));
    assert_eq!(tax.amount(), dec!(90));
    assert_eq!((after_discount + tax).amount(), dec!(990));
}

#[test]
fn zero_rate_applies_to_nothing() {
    let amount = Money::new(dec!(500), Currency::USD);
    let charge = Rate::zero().apply(&amount);
    assert!(charge.is_zero());
}
