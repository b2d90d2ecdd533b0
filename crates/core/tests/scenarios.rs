//! End-to-end money scenarios: build a context from settings, then convert,
//! compute, allocate and format.

use bigmoney_core::{
    AppConfig, CurrencyCode, Money, MoneyContext, MoneyError, Ratios, SymbolFormatter,
};
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn code(s: &str) -> CurrencyCode {
    CurrencyCode::new(s).unwrap()
}

#[fixture]
fn context() -> MoneyContext {
    let config = AppConfig::default()
        .with_rate("USD", Decimal::ONE)
        .with_rate("RUB", dec!(35.2448))
        .with_rate("EUR", Decimal::ONE / dec!(1.3485))
        .with_rate("JPY", dec!(102.02));
    MoneyContext::from_config(&config).unwrap()
}

#[rstest]
fn eur_to_usd(context: MoneyContext) {
    let usd = context
        .convert(&context.money_in(100, code("EUR")), Some(&code("USD")))
        .unwrap();

    assert_eq!(usd.currency(), &code("USD"));
    assert_eq!(usd.value_of().to_string(), "134.85");
    assert_eq!(usd.to_string(), "134.85");
    assert_eq!(usd.format(&context, None), "134.85 USD");
    assert_eq!(usd.format(&context, Some("$ %decimal")), "$ 134.85");
}

#[rstest]
fn arithmetic_after_conversion(context: MoneyContext) {
    let usd = context
        .convert(&context.money_in(100, code("EUR")), None)
        .unwrap();
    assert_eq!(usd.plus(100).unwrap().to_string(), "234.85");
    assert_eq!(usd.times(2).unwrap().to_string(), "269.7");
    assert_eq!(usd.minus(&usd).unwrap().to_string(), "0");
}

#[rstest]
#[case("JPY", "¥13757.4")]
#[case("RUB", "4752.76 RUB")]
#[case("EUR", "€100")]
fn symbol_formatting(context: MoneyContext, #[case] target: &str, #[case] expected: &str) {
    let context = context.with_formatter(SymbolFormatter::default());
    let money = context
        .convert(&context.money_in(100, code("EUR")), Some(&code(target)))
        .unwrap();
    assert_eq!(money.format(&context, None), expected);
}

#[rstest]
fn default_template_uses_currency(context: MoneyContext) {
    let money = context.money_in(100, code("EUR"));
    assert_eq!(context.format(&money, None), "100 EUR");
}

#[rstest]
fn allocate_one_two_one(context: MoneyContext) {
    let shares = context.money(100).allocate([1_u32, 2, 1]).unwrap();
    let amounts: Vec<_> = shares.iter().map(Money::amount).collect();
    assert_eq!(amounts, vec![dec!(25), dec!(50), dec!(25)]);
    assert_eq!(amounts.iter().sum::<Decimal>(), dec!(100));
}

#[rstest]
fn allocate_converted_amount(context: MoneyContext) {
    // 134.85000... USD carries a sub-cent tail from the EUR rate
    let usd = context
        .convert(&context.money_in(100, code("EUR")), None)
        .unwrap();
    let shares = usd.allocate(Ratios::Count(4)).unwrap();

    assert_eq!(shares.len(), 4);
    let sum: Decimal = shares.iter().map(Money::amount).sum();
    assert_eq!(sum, usd.amount());
    let displayed: Vec<_> = shares.iter().map(ToString::to_string).collect();
    assert_eq!(displayed, vec!["33.72", "33.71", "33.71", "33.71"]);
}

#[rstest]
fn unknown_rate(context: MoneyContext) {
    let err = context
        .convert(&context.money_in(1, code("XYZ")), Some(&code("USD")))
        .unwrap_err();
    assert_eq!(err, MoneyError::UnknownRate("XYZ".to_string()));
    assert_eq!(err.to_string(), "Unknown rate for \"XYZ\" currency");
}

#[rstest]
fn conversion_identity(context: MoneyContext) {
    let money = context.money_in(dec!(12.3456), code("RUB"));
    assert_eq!(context.convert(&money, Some(&code("RUB"))).unwrap(), money);
}

#[rstest]
fn round_trip_within_rounding(context: MoneyContext) {
    let money = context.money(dec!(250.10));
    let back = context
        .convert(&context.convert(&money, Some(&code("JPY"))).unwrap(), None)
        .unwrap();
    assert_eq!(back.rounded(), money.rounded());
}

#[rstest]
fn rebuilt_context_sees_new_rates(context: MoneyContext) {
    let money = context.money(10);
    assert!(context.convert(&money, Some(&code("GBP"))).is_err());

    let config = AppConfig::default().with_rate("GBP", dec!(0.8));
    let updated = MoneyContext::from_config(&config).unwrap();
    let gbp = updated.convert(&money, Some(&code("GBP"))).unwrap();
    assert_eq!(gbp.amount(), dec!(8));
}
