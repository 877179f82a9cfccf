//! Parse bounded threshold properties written in BLTL notation.
//!
//! A property consists of a bounded eventually operator followed by a single comparison of the
//! SoS benefit against an integer baseline. The following forms are all equivalent:
//!
//! ```text
//! F<=10 (benefit >= 100)
//! <>[0,10] benefit >= 100
//! eventually[<=10] sos_benefit >= 100
//! ```
//!
//! A property can be prefixed with `!` or `not`, which sets the negation flag of the resulting
//! [`ThresholdChecker`]. The flag does not change the verdicts of the checker.
//!
//! ```rust
//! use simsos_checker::parse_property;
//!
//! let checker = parse_property("!F<=10 (benefit < -5)").unwrap();
//!
//! assert_eq!(checker.base_tick(), 10);
//! assert_eq!(checker.base_benefit(), -5);
//! assert!(checker.is_negated());
//! ```

use std::str::FromStr;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, space0};
use nom::combinator::{map_res, opt, recognize};
use nom::sequence::{delimited, pair, preceded, terminated, tuple};
use nom::IResult;
use thiserror::Error;

use crate::checkers::ThresholdChecker;
use crate::comparison::Comparison;

/// Error categories that can be produced by [`parse_property`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("Invalid syntax")]
    Syntax,

    #[error("Unexpected trailing input")]
    TrailingInput,
}

/// The error type for parsing a property string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error parsing property: {kind} at \"{rest}\"")]
pub struct ParsePropertyError {
    kind: ErrorKind,
    rest: String,
}

impl ParsePropertyError {
    fn syntax(rest: &str) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            rest: rest.to_owned(),
        }
    }

    fn trailing(rest: &str) -> Self {
        Self {
            kind: ErrorKind::TrailingInput,
            rest: rest.to_owned(),
        }
    }

    /// Return the [`ErrorKind`] for this error
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return the remaining input at the point where parsing failed
    pub fn rest(&self) -> &str {
        &self.rest
    }
}

struct Property {
    negated: bool,
    horizon: i64,
    comparison: Comparison,
    baseline: i64,
}

fn integer(input: &str) -> IResult<&str, i64> {
    let mut parser = map_res(recognize(pair(opt(tag("-")), digit1)), i64::from_str);
    parser(input)
}

fn negation(input: &str) -> IResult<&str, bool> {
    let mut parser = opt(terminated(alt((tag("!"), tag("not"))), space0));
    let (rest, op) = parser(input)?;

    Ok((rest, op.is_some()))
}

fn eventually(input: &str) -> IResult<&str, &str> {
    alt((tag("eventually"), tag("<>"), tag("F")))(input)
}

fn upper_bound(input: &str) -> IResult<&str, i64> {
    preceded(pair(tag("<="), space0), integer)(input)
}

fn interval(input: &str) -> IResult<&str, i64> {
    let lower = tuple((tag("0"), space0, tag(","), space0));
    let bound = alt((upper_bound, preceded(lower, integer)));
    let mut parser = delimited(pair(tag("["), space0), bound, pair(space0, tag("]")));

    parser(input)
}

fn horizon(input: &str) -> IResult<&str, i64> {
    alt((upper_bound, interval))(input)
}

fn comparison(input: &str) -> IResult<&str, Comparison> {
    let ops = alt((tag("<="), tag(">="), tag("=="), tag("<"), tag(">"), tag("=")));
    let mut parser = map_res(delimited(space0, ops, space0), Comparison::from_str);

    parser(input)
}

fn threshold(input: &str) -> IResult<&str, (Comparison, i64)> {
    let variable = alt((tag("sos_benefit"), tag("benefit")));
    let mut parser = preceded(variable, pair(comparison, integer));

    parser(input)
}

fn body(input: &str) -> IResult<&str, (Comparison, i64)> {
    let parens = delimited(pair(tag("("), space0), threshold, pair(space0, tag(")")));
    alt((parens, threshold))(input)
}

fn property(input: &str) -> IResult<&str, Property> {
    let mut parser = tuple((
        preceded(space0, negation),
        terminated(eventually, space0),
        terminated(horizon, space0),
        terminated(body, space0),
    ));

    let (rest, (negated, _, horizon, (comparison, baseline))) = parser(input)?;
    let property = Property {
        negated,
        horizon,
        comparison,
        baseline,
    };

    Ok((rest, property))
}

/// Parse a property string into a [`ThresholdChecker`].
///
/// # Examples
///
/// ```rust
/// use simsos_checker::{parse_property, Comparison};
///
/// let checker = parse_property("<>[0,25] benefit = 7").unwrap();
///
/// assert_eq!(checker.base_tick(), 25);
/// assert_eq!(checker.comparison(), Comparison::EqualTo);
///
/// assert!(parse_property("G<=10 (benefit > 1)").is_err());
/// ```
pub fn parse_property(input: &str) -> Result<ThresholdChecker, ParsePropertyError> {
    match property(input) {
        Ok(("", parsed)) => {
            let mut checker = ThresholdChecker::new(parsed.horizon, parsed.baseline, parsed.comparison);

            if parsed.negated {
                checker.set_negation();
            }

            Ok(checker)
        }
        Ok((rest, _)) => Err(ParsePropertyError::trailing(rest)),
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => Err(ParsePropertyError::syntax(err.input)),
        Err(nom::Err::Incomplete(_)) => Err(ParsePropertyError::syntax(input)),
    }
}

impl FromStr for ThresholdChecker {
    type Err = ParsePropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_property(s)
    }
}
