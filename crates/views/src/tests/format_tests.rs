use super::*;

#[test]
fn brl_uses_brazilian_separators() {
    assert_eq!(format_brl(Some(Decimal::new(12345, 1))), "R$ 1.234,50");
    assert_eq!(format_brl_f64(1234.5), "R$ 1.234,50");
    assert_eq!(format_brl(Some(Decimal::from(1_000_000))), "R$ 1.000.000,00");
    assert_eq!(format_brl(Some(Decimal::new(99, 2))), "R$ 0,99");
    assert_eq!(format_brl(Some(Decimal::ZERO)), "R$ 0,00");
}

#[test]
fn brl_rounds_half_away_from_zero() {
    assert_eq!(format_brl(Some(Decimal::new(10005, 3))), "R$ 10,01");
    assert_eq!(format_brl(Some(Decimal::new(-10005, 3))), "-R$ 10,01");
    assert_eq!(format_brl(Some(Decimal::new(-4, 3))), "R$ 0,00");
}

#[test]
fn negative_amounts_carry_the_sign_before_the_symbol() {
    assert_eq!(format_brl(Some(Decimal::new(-123456, 2))), "-R$ 1.234,56");
}

#[test]
fn missing_and_non_finite_amounts_render_empty() {
    assert_eq!(format_brl(None), "");
    assert_eq!(format_brl_f64(f64::NAN), "");
    assert_eq!(format_brl_f64(f64::INFINITY), "");
    assert_eq!(format_plain_brl(None), "");
}

#[test]
fn legacy_money_has_no_grouping() {
    assert_eq!(format_plain_brl(Some(Decimal::new(123456, 2))), "R$ 1234.56");
    assert_eq!(format_plain_brl(Some(Decimal::from(50))), "R$ 50.00");
}

#[test]
fn shipping_is_free_unless_positive() {
    assert_eq!(format_shipping(Some(Decimal::new(1990, 2))), "R$ 19.90");
    assert_eq!(format_shipping(Some(Decimal::ZERO)), "Grátis");
    assert_eq!(format_shipping(None), "Grátis");
}

#[test]
fn counts_group_thousands() {
    assert_eq!(format_count(Some(1357)), "1.357");
    assert_eq!(format_count(Some(999)), "999");
    assert_eq!(format_count(Some(-1_234_567)), "-1.234.567");
    assert_eq!(format_count(Some(i64::MIN)), "-9.223.372.036.854.775.808");
    assert_eq!(format_count(None), "");
}

#[test]
fn dates_render_day_first() {
    assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 1, 2)), "02/01/2024");
    assert_eq!(format_date(None), "");
}

#[test]
fn quantities_render_plainly() {
    assert_eq!(format_quantity(Some(2)), "2");
    assert_eq!(format_quantity(None), "");
}
