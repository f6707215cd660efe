#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ──────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
}

#[test]
fn test_format_amount_no_commas() {
    assert_eq!(format_amount(dec!(999.99)), "$999.99");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "$-42.50");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_pads_to_two_decimals() {
    assert_eq!(format_amount(dec!(1.5)), "$1.50");
    assert_eq!(format_amount(dec!(3200)), "$3,200.00");
}

#[test]
fn test_format_amount_rounds_half_up() {
    assert_eq!(format_amount(dec!(2.675)), "$2.68");
    assert_eq!(format_amount(dec!(0.004)), "$0.00");
}

#[test]
fn test_format_amount_tiny_negative_is_not_signed() {
    assert_eq!(format_amount(dec!(-0.001)), "$0.00");
}

#[test]
fn test_format_amount_negative_large() {
    assert_eq!(format_amount(dec!(-99999.01)), "$-99,999.01");
}

// ── format_percent ────────────────────────────────────────────

#[test]
fn test_format_percent_one_decimal() {
    assert_eq!(format_percent(dec!(55.3125)), "55.3");
    assert_eq!(format_percent(dec!(107.5)), "107.5");
    assert_eq!(format_percent(dec!(100)), "100.0");
    assert_eq!(format_percent(dec!(0)), "0.0");
}

#[test]
fn test_format_percent_rounds_half_away_from_zero() {
    assert_eq!(format_percent(dec!(12.25)), "12.3");
    assert_eq!(format_percent(dec!(-12.25)), "-12.3");
    assert_eq!(format_percent(dec!(99.96)), "100.0");
}

// ── percent ───────────────────────────────────────────────────

#[test]
fn test_percent() {
    assert_eq!(percent(dec!(430), dec!(400)), dec!(107.5));
    assert_eq!(percent(dec!(1770), dec!(3200)), dec!(55.3125));
}

#[test]
fn test_percent_saturates_instead_of_overflowing() {
    assert_eq!(percent(Decimal::MAX, dec!(0.01)), Decimal::MAX);
    assert_eq!(percent(Decimal::MAX, dec!(1)), Decimal::MAX);
    assert_eq!(percent(Decimal::MIN, dec!(0.01)), Decimal::MIN);
}
