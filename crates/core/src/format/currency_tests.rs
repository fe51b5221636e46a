use super::*;
use rstest::rstest;
use rust_decimal_macros::dec;

fn formatter(tag: &str) -> LocaleFormatter {
    LocaleFormatter::new(tag.parse().unwrap())
}

#[rstest]
#[case("en_US", dec!(1234.5), "$1,234.50")]
#[case("en_US", dec!(0), "$0.00")]
#[case("en_US", dec!(10.71), "$10.71")]
#[case("en_US", dec!(1234567.891), "$1,234,567.89")]
#[case("en_US", dec!(-1234.5), "-$1,234.50")]
#[case("en_GB", dec!(1234.5), "£1,234.50")]
#[case("en_SG", dec!(1234.5), "$1,234.50")]
#[case("de_DE", dec!(1234.5), "1.234,50\u{a0}€")]
#[case("de_DE", dec!(-1234.5), "-1.234,50\u{a0}€")]
#[case("fr_FR", dec!(1234.5), "1\u{202f}234,50\u{a0}€")]
#[case("id_ID", dec!(1234.5), "Rp1.234,50")]
#[case("ja_JP", dec!(1234.4), "￥1,234")]
#[case("ja_JP", dec!(-1234), "-￥1,234")]
fn test_locale_formatting(#[case] tag: &str, #[case] amount: Decimal, #[case] expected: &str) {
    assert_eq!(formatter(tag).format(amount), expected);
}

#[rstest]
#[case(dec!(0.125), "$0.12")]
#[case(dec!(0.135), "$0.14")]
#[case(dec!(2.5), "$2.50")]
#[case(dec!(0.005), "$0.00")]
#[case(dec!(0.015), "$0.02")]
fn test_half_even_display_rounding(#[case] amount: Decimal, #[case] expected: &str) {
    assert_eq!(formatter("en_US").format(amount), expected);
}

#[test]
fn test_yen_rounds_half_even_to_whole_units() {
    let yen = formatter("ja_JP");
    assert_eq!(yen.format(dec!(2.5)), "￥2");
    assert_eq!(yen.format(dec!(3.5)), "￥4");
}

#[test]
fn test_amount_rounding_to_zero_is_unsigned() {
    assert_eq!(formatter("en_US").format(dec!(-0.001)), "$0.00");
    assert_eq!(formatter("ja_JP").format(dec!(-0.4)), "￥0");
}

#[test]
fn test_grouping_boundaries() {
    let usd = formatter("en_US");
    assert_eq!(usd.format(dec!(999)), "$999.00");
    assert_eq!(usd.format(dec!(1000)), "$1,000.00");
    assert_eq!(usd.format(dec!(100000)), "$100,000.00");
    assert_eq!(usd.format(dec!(1000000)), "$1,000,000.00");
}

#[test]
fn test_largest_amount_formats() {
    assert_eq!(
        formatter("en_US").format(Decimal::MAX),
        "$79,228,162,514,264,337,593,543,950,335.00"
    );
}

#[test]
fn test_unknown_locale_formats_as_en_us() {
    let fallback = formatter("pt_BR");
    assert_eq!(fallback.currency(), Currency::Usd);
    assert_eq!(fallback.format(dec!(15)), "$15.00");
}

#[test]
fn test_format_money_uses_money_currency() {
    let usd = formatter("en_US");
    assert_eq!(
        usd.format_money(&Money::new(dec!(1500), Currency::Jpy)),
        "￥1,500"
    );
    assert_eq!(
        usd.format_money(&Money::new(dec!(3.5), Currency::Eur)),
        "€3.50"
    );
}

#[test]
fn test_host_formatter_reads_locale_at_call_time() {
    let host = HostFormatter;

    temp_env::with_vars(
        [
            ("LC_ALL", Some("en_US.UTF-8")),
            ("LC_MONETARY", None),
            ("LANG", None),
        ],
        || assert_eq!(host.format(dec!(10)), "$10.00"),
    );

    temp_env::with_vars(
        [
            ("LC_ALL", Some("de_DE.UTF-8")),
            ("LC_MONETARY", None),
            ("LANG", None),
        ],
        || {
            assert_eq!(host.currency(), Currency::Eur);
            assert_eq!(host.format(dec!(10)), "10,00\u{a0}€");
        },
    );
}

#[test]
fn test_host_formatter_without_locale_is_en_us() {
    temp_env::with_vars_unset(["LC_ALL", "LC_MONETARY", "LANG"], || {
        assert_eq!(HostFormatter.format(dec!(0)), "$0.00");
    });
}
