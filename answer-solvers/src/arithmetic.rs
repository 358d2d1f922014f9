//! Arithmetic solver: `+ - * /`, unary minus, parentheses and decimal numbers, parsed with nom.

use answer_core::{Answer, Result, Solver};
use async_trait::async_trait;
use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize, verify},
    error::{Error, ErrorKind},
    multi::fold_many0,
    sequence::{delimited, pair, preceded},
    IResult,
};

/// Value plus the number of binary operators applied to produce it.
type Eval = (f64, u32);

/// Largest magnitude printed without a fractional part.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Deepest nesting of parentheses and unary minus accepted; deeper input has no answer.
pub const MAX_NESTING: u32 = 64;

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// `0`, `12`, `3.25`; no sign, exponent or special values, and no leading zeros (`01` is not a number).
fn number(input: &str) -> IResult<&str, Eval> {
    map_res(
        verify(
            recognize(pair(digit1, opt(pair(char('.'), digit1)))),
            |s: &str| !(s.len() > 1 && s.starts_with('0') && !s.starts_with("0.")),
        ),
        |s: &str| s.parse::<f64>().map(|v| (v, 0)),
    )(input)
}

fn parens<'a>(depth: u32) -> impl FnMut(&'a str) -> IResult<&'a str, Eval> {
    move |input: &'a str| delimited(char('('), ws(expr(depth)), char(')'))(input)
}

fn negate<'a>(depth: u32) -> impl FnMut(&'a str) -> IResult<&'a str, Eval> {
    move |input: &'a str| map(preceded(char('-'), factor(depth)), |(v, ops)| (-v, ops))(input)
}

fn factor<'a>(depth: u32) -> impl FnMut(&'a str) -> IResult<&'a str, Eval> {
    move |input: &'a str| {
        if depth > MAX_NESTING {
            return Err(nom::Err::Failure(Error::new(input, ErrorKind::TooLarge)));
        }
        ws(alt((number, parens(depth + 1), negate(depth + 1))))(input)
    }
}

fn term<'a>(depth: u32) -> impl FnMut(&'a str) -> IResult<&'a str, Eval> {
    move |input: &'a str| {
        let (input, first) = factor(depth)(input)?;
        fold_many0(
            pair(one_of("*/"), factor(depth)),
            move || first,
            |(acc, ops), (op, (v, n))| {
                let value = if op == '*' { acc * v } else { acc / v };
                (value, ops + n + 1)
            },
        )(input)
    }
}

fn expr<'a>(depth: u32) -> impl FnMut(&'a str) -> IResult<&'a str, Eval> {
    move |input: &'a str| {
        let (input, first) = term(depth)(input)?;
        fold_many0(
            pair(one_of("+-"), term(depth)),
            move || first,
            |(acc, ops), (op, (v, n))| {
                let value = if op == '+' { acc + v } else { acc - v };
                (value, ops + n + 1)
            },
        )(input)
    }
}

/// Evaluates `text` as an arithmetic expression. A trailing `=` is allowed.
///
/// Returns `None` unless the whole text parses, at least one binary operator is applied (a bare number is not a
/// question), and the result is finite (division by zero yields `None`). Nesting of parentheses or unary minus
/// deeper than [`MAX_NESTING`] yields `None`.
pub fn evaluate(text: &str) -> Option<f64> {
    let text = text.trim();
    let text = text.strip_suffix('=').unwrap_or(text);
    let (_, (value, ops)) = all_consuming(ws(expr(0)))(text).ok()?;
    (ops > 0 && value.is_finite()).then_some(value)
}

/// Integers print without a fractional part; other values with up to 10 decimals, trailing zeros trimmed.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        return format!("{}", value as i64);
    }
    let s = format!("{:.10}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// [`Solver`] answering arithmetic expressions with their value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticSolver;

impl ArithmeticSolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Solver for ArithmeticSolver {
    async fn solve(&self, text: &str) -> Result<Option<Answer>> {
        Ok(evaluate(text).map(|value| Answer::new(format_number(value))))
    }
}
