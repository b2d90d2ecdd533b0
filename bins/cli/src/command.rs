//! Command parsing and execution.

use anyhow::{Context, bail};
use rust_decimal::Decimal;

use bigmoney_core::money::parse_decimal;
use bigmoney_core::{CurrencyCode, Money, MoneyContext, Ratios};

/// One CLI invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Convert an amount, to base when `to` is absent.
    Convert {
        /// Amount to convert.
        money: Money,
        /// Target currency.
        to: Option<CurrencyCode>,
    },
    /// Split an amount by ratios or into equal shares.
    Allocate {
        /// Amount to split.
        money: Money,
        /// How to split it.
        ratios: Ratios,
    },
    /// Format an amount, with an optional template override.
    Format {
        /// Amount to format.
        money: Money,
        /// Template override.
        template: Option<String>,
    },
    /// List the rate table.
    Rates,
}

const USAGE: &str = "usage: bigmoney <convert|allocate|split|format|rates> ...";

impl Command {
    /// Parses arguments (without the program name).
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let Some((name, rest)) = args.split_first() else {
            bail!(USAGE);
        };

        match (name.as_str(), rest) {
            ("convert", [amount, from]) => Ok(Self::Convert {
                money: money(amount, from)?,
                to: None,
            }),
            ("convert", [amount, from, to]) => Ok(Self::Convert {
                money: money(amount, from)?,
                to: Some(currency(to)?),
            }),
            ("allocate", [amount, code, ratios @ ..]) if !ratios.is_empty() => {
                let weights = ratios
                    .iter()
                    .map(|ratio| decimal(ratio))
                    .collect::<anyhow::Result<Vec<Decimal>>>()?;
                Ok(Self::Allocate {
                    money: money(amount, code)?,
                    ratios: Ratios::Weights(weights),
                })
            }
            ("split", [amount, code, count]) => {
                let count: usize = count
                    .parse()
                    .with_context(|| format!("invalid share count {count:?}"))?;
                Ok(Self::Allocate {
                    money: money(amount, code)?,
                    ratios: Ratios::Count(count),
                })
            }
            ("format", [amount, code]) => Ok(Self::Format {
                money: money(amount, code)?,
                template: None,
            }),
            ("format", [amount, code, template]) => Ok(Self::Format {
                money: money(amount, code)?,
                template: Some(template.clone()),
            }),
            ("rates", []) => Ok(Self::Rates),
            _ => bail!(USAGE),
        }
    }

    /// Runs the command, returning output lines.
    pub fn run(&self, context: &MoneyContext) -> anyhow::Result<Vec<String>> {
        match self {
            Self::Convert { money, to } => {
                let converted = context.convert(money, to.as_ref())?;
                Ok(vec![context.format(&converted, None)])
            }
            Self::Allocate { money, ratios } => Ok(money
                .allocate(ratios.clone())?
                .iter()
                .map(|share| context.format(share, None))
                .collect()),
            Self::Format { money, template } => {
                Ok(vec![context.format(money, template.as_deref())])
            }
            Self::Rates => {
                let rates = context.rates();
                let mut lines = vec![format!("{} 1 (base)", rates.base())];
                for code in rates.currencies() {
                    lines.push(format!("{code} {}", rates.rate(code)?));
                }
                Ok(lines)
            }
        }
    }
}

fn decimal(value: &str) -> anyhow::Result<Decimal> {
    Ok(parse_decimal(value)?)
}

fn currency(code: &str) -> anyhow::Result<CurrencyCode> {
    Ok(CurrencyCode::new(code)?)
}

fn money(amount: &str, code: &str) -> anyhow::Result<Money> {
    Ok(Money::new(decimal(amount)?, currency(code)?))
}
