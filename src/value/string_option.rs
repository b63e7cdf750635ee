//! `stagger(...)` / `rand(...)` string options.
//!
//! Grammar (whitespace-insensitive, case-insensitive keywords):
//!
//! ```text
//! option  := stagger | rand
//! stagger := "stagger(" operand ")" | "stagger(" operand "," operand ")"
//! operand := rand | amount
//! rand    := "rand(" amount "," amount ")"
//! amount  := number unit?
//! ```
//!
//! A one-argument stagger is a step from base `0`. Evaluation for bit `i` yields
//! `base + i * step`; the unit of a unit-bearing base wins over the unit of the step.

use crate::foundation::core::BitIndex;
use crate::foundation::error::{BurstError, BurstResult};
use crate::foundation::math::{Rng64, split_float_prefix};
use crate::value::model::Value;

const UNITS: &[&str] = &[
    "px", "%", "rem", "em", "ex", "cm", "ch", "mm", "in", "pt", "pc", "vh", "vw", "vmin", "deg",
];

/// Number with an optional explicit unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Amount {
    /// Numeric part.
    pub value: f64,
    /// Explicit unit, if one was written.
    pub unit: Option<String>,
}

/// `rand(min, max)` bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct RandRange {
    /// Lower bound.
    pub min: Amount,
    /// Upper bound.
    pub max: Amount,
}

/// One argument of a stagger expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// Literal amount.
    Amount(Amount),
    /// Random amount, drawn once per evaluation.
    Rand(RandRange),
}

/// Parsed string option.
#[derive(Clone, Debug, PartialEq)]
pub enum StringOption {
    /// `stagger(base, step)`.
    Stagger {
        /// Value for bit 0.
        base: Operand,
        /// Increment per bit.
        step: Operand,
    },
    /// `rand(min, max)`.
    Rand(RandRange),
}

impl StringOption {
    /// Parse `text` as a string option.
    ///
    /// Returns `Ok(None)` for plain strings that mention neither `stagger` nor `rand(`.
    pub fn parse(text: &str) -> BurstResult<Option<Self>> {
        let lower = text.trim().to_ascii_lowercase();
        if !lower.contains("stagger") && !lower.contains("rand(") {
            return Ok(None);
        }
        if let Some(body) = call_body(&lower, "stagger") {
            let args = split_args(body)?;
            let (base, step) = match args.as_slice() {
                [step] => (
                    Operand::Amount(Amount {
                        value: 0.0,
                        unit: None,
                    }),
                    parse_operand(step)?,
                ),
                [base, step] => (parse_operand(base)?, parse_operand(step)?),
                _ => {
                    return Err(BurstError::expression(format!(
                        "stagger takes one or two arguments: '{text}'"
                    )));
                }
            };
            return Ok(Some(Self::Stagger { base, step }));
        }
        if call_body(&lower, "rand").is_some() {
            return parse_rand(&lower).map(|r| Some(Self::Rand(r)));
        }
        Err(BurstError::expression(format!(
            "malformed string option '{text}'"
        )))
    }

    /// Evaluate for bit `index`, drawing randomness from `rng`.
    pub(crate) fn eval(&self, index: BitIndex, rng: &mut Rng64) -> Value {
        match self {
            Self::Stagger { base, step } => {
                let base = base.eval(rng);
                let step = step.eval(rng);
                let number = base.value + index.as_f64() * step.value;
                with_unit(number, base.unit.or(step.unit))
            }
            Self::Rand(range) => {
                let a = range.eval(rng);
                with_unit(a.value, a.unit)
            }
        }
    }
}

impl Operand {
    fn eval(&self, rng: &mut Rng64) -> Amount {
        match self {
            Self::Amount(a) => a.clone(),
            Self::Rand(r) => r.eval(rng),
        }
    }
}

impl RandRange {
    fn eval(&self, rng: &mut Rng64) -> Amount {
        Amount {
            value: rng.range(self.min.value, self.max.value),
            unit: self.max.unit.clone().or_else(|| self.min.unit.clone()),
        }
    }
}

/// Parse and evaluate `text` for bit `index`.
///
/// Plain strings come back as [`Value::Text`] unchanged.
pub fn eval_string_option(text: &str, index: BitIndex, seed: u64) -> BurstResult<Value> {
    match StringOption::parse(text)? {
        None => Ok(Value::Text(text.to_string())),
        Some(opt) => {
            let mut rng = Rng64::new(seed);
            Ok(opt.eval(index, &mut rng))
        }
    }
}

fn with_unit(number: f64, unit: Option<String>) -> Value {
    match unit {
        Some(unit) => Value::Text(format!("{number}{unit}")),
        None => Value::Number(number),
    }
}

fn call_body<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    text.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn split_args(body: &str) -> BurstResult<Vec<&str>> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    BurstError::expression(format!("unbalanced ')' in '{body}'"))
                })?;
            }
            ',' if depth == 0 => {
                out.push(body[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(BurstError::expression(format!("unbalanced '(' in '{body}'")));
    }
    out.push(body[start..].trim());
    if out.iter().any(|a| a.is_empty()) {
        return Err(BurstError::expression(format!("empty argument in '{body}'")));
    }
    Ok(out)
}

fn parse_operand(text: &str) -> BurstResult<Operand> {
    if text.starts_with("rand") {
        return parse_rand(text).map(Operand::Rand);
    }
    parse_amount(text).map(Operand::Amount)
}

fn parse_rand(text: &str) -> BurstResult<RandRange> {
    let body = call_body(text, "rand")
        .ok_or_else(|| BurstError::expression(format!("malformed rand '{text}'")))?;
    match split_args(body)?.as_slice() {
        [min, max] => Ok(RandRange {
            min: parse_amount(min)?,
            max: parse_amount(max)?,
        }),
        _ => Err(BurstError::expression(format!(
            "rand takes exactly two arguments: '{text}'"
        ))),
    }
}

fn parse_amount(text: &str) -> BurstResult<Amount> {
    let (value, rest) = split_float_prefix(text)
        .ok_or_else(|| BurstError::expression(format!("expected a number, got '{text}'")))?;
    let unit = match rest.trim() {
        "" => None,
        u if UNITS.contains(&u) => Some(u.to_string()),
        u => {
            return Err(BurstError::expression(format!(
                "unknown unit '{u}' in '{text}'"
            )));
        }
    };
    Ok(Amount { value, unit })
}

#[cfg(test)]
#[path = "../../tests/unit/value/string_option.rs"]
mod tests;
