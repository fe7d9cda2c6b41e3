use super::{Comparison, Filter};
use anyhow::{Result, anyhow};
use featuretiles_derive::context;
use featuretiles_geometry::GeoValue;
use nom::{
	IResult, Parser,
	branch::alt,
	bytes::complete::{tag, tag_no_case, take_while, take_while1},
	character::complete::{char, multispace0, satisfy},
	combinator::{all_consuming, cut, map, map_res, not, peek, recognize, value},
	error::context,
	multi::many0,
	number::complete::recognize_float,
	sequence::{delimited, pair, preceded, terminated},
};
use nom_language::error::{VerboseError, convert_error};

type ParseResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

fn ws<'a, O, P>(inner: P) -> impl Parser<&'a str, Output = O, Error = VerboseError<&'a str>>
where
	P: Parser<&'a str, Output = O, Error = VerboseError<&'a str>>,
{
	delimited(multispace0, inner, multispace0)
}

fn keyword<'a>(word: &'static str) -> impl Parser<&'a str, Output = &'a str, Error = VerboseError<&'a str>> {
	terminated(tag_no_case(word), not(peek(take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_'))))
}

fn parse_attribute(input: &str) -> ParseResult<'_, String> {
	context(
		"parsing attribute",
		recognize(pair(
			take_while1(|c: char| c.is_ascii_alphabetic() || c == '_'),
			take_while(|c: char| c.is_ascii_alphanumeric() || "_.:".contains(c)),
		)),
	)
	.parse(input)
	.map(|(rest, name)| (rest, name.to_string()))
}

fn parse_comparison(input: &str) -> ParseResult<'_, Comparison> {
	context(
		"parsing comparison operator",
		alt((
			value(Comparison::Le, tag("<=")),
			value(Comparison::Ge, tag(">=")),
			value(Comparison::Ne, tag("!=")),
			value(Comparison::Ne, tag("<>")),
			value(Comparison::Lt, tag("<")),
			value(Comparison::Gt, tag(">")),
			value(Comparison::Eq, tag("==")),
			value(Comparison::Eq, tag("=")),
		)),
	)
	.parse(input)
}

fn parse_quoted<'a>(input: &'a str, quote: char, doubled: &'static str) -> ParseResult<'a, String> {
	delimited(
		char(quote),
		many0(alt((value(quote, tag(doubled)), satisfy(|c| c != quote)))),
		cut(char(quote)),
	)
	.map(|chars| chars.into_iter().collect::<String>())
	.parse(input)
}

/// A quoted string; the quote character is escaped by doubling it.
fn parse_string(input: &str) -> ParseResult<'_, String> {
	alt((
		|i| parse_quoted(i, '\'', "''"),
		|i| parse_quoted(i, '"', "\"\""),
	))
	.parse(input)
}

fn number_from_text(text: &str) -> Result<GeoValue, std::num::ParseFloatError> {
	if let Ok(u) = text.parse::<u64>() {
		Ok(GeoValue::UInt(u))
	} else if let Ok(i) = text.parse::<i64>() {
		Ok(GeoValue::Int(i))
	} else {
		text.parse::<f64>().map(GeoValue::Double)
	}
}

fn parse_number(input: &str) -> ParseResult<'_, GeoValue> {
	map_res(recognize_float, number_from_text).parse(input)
}

fn parse_literal(input: &str) -> ParseResult<'_, GeoValue> {
	context(
		"parsing literal",
		alt((
			map(parse_string, GeoValue::String),
			value(GeoValue::Bool(true), keyword("true")),
			value(GeoValue::Bool(false), keyword("false")),
			value(GeoValue::Null, keyword("null")),
			parse_number,
		)),
	)
	.parse(input)
}

fn parse_compare(input: &str) -> ParseResult<'_, Filter> {
	context(
		"parsing comparison",
		(ws(parse_attribute), cut(ws(parse_comparison)), cut(ws(parse_literal))),
	)
	.parse(input)
	.map(|(rest, (attribute, comparison, value))| {
		(
			rest,
			Filter::Compare {
				attribute,
				comparison,
				value,
			},
		)
	})
}

fn parse_term(input: &str) -> ParseResult<'_, Filter> {
	alt((
		delimited(ws(char('(')), parse_or, cut(ws(char(')')))),
		parse_compare,
	))
	.parse(input)
}

fn parse_and(input: &str) -> ParseResult<'_, Filter> {
	(parse_term, many0(preceded(ws(keyword("and")), cut(parse_term))))
		.map(|(first, rest)| {
			rest
				.into_iter()
				.fold(first, |a, b| Filter::And(Box::new(a), Box::new(b)))
		})
		.parse(input)
}

fn parse_or(input: &str) -> ParseResult<'_, Filter> {
	(parse_and, many0(preceded(ws(keyword("or")), cut(parse_and))))
		.map(|(first, rest)| {
			rest
				.into_iter()
				.fold(first, |a, b| Filter::Or(Box::new(a), Box::new(b)))
		})
		.parse(input)
}

#[context("Failed to parse filter expression '{input}'")]
pub fn parse_filter(input: &str) -> Result<Filter> {
	match all_consuming(ws(parse_or)).parse(input) {
		Ok((_, filter)) => Ok(filter),
		Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(anyhow!(convert_error(input, e))),
		Err(nom::Err::Incomplete(_)) => Err(anyhow!("incomplete filter expression")),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn compare(attribute: &str, comparison: Comparison, value: GeoValue) -> Filter {
		Filter::Compare {
			attribute: attribute.to_string(),
			comparison,
			value,
		}
	}

	#[rstest]
	#[case("a = 1", compare("a", Comparison::Eq, GeoValue::UInt(1)))]
	#[case("a==-2", compare("a", Comparison::Eq, GeoValue::Int(-2)))]
	#[case("a <> 1.5", compare("a", Comparison::Ne, GeoValue::Double(1.5)))]
	#[case("  a >= 1e3 ", compare("a", Comparison::Ge, GeoValue::Double(1000.0)))]
	#[case("name = 'O''Brien'", compare("name", Comparison::Eq, GeoValue::from("O'Brien")))]
	#[case("name = \"x y\"", compare("name", Comparison::Eq, GeoValue::from("x y")))]
	#[case("flag != TRUE", compare("flag", Comparison::Ne, GeoValue::Bool(true)))]
	#[case("addr:street = null", compare("addr:street", Comparison::Eq, GeoValue::Null))]
	fn comparisons(#[case] input: &str, #[case] expected: Filter) {
		assert_eq!(parse_filter(input).unwrap(), expected);
	}

	#[test]
	fn precedence() {
		let filter = parse_filter("a = 1 OR b = 2 AND c = 3").unwrap();
		assert_eq!(
			filter,
			Filter::Or(
				Box::new(compare("a", Comparison::Eq, GeoValue::UInt(1))),
				Box::new(Filter::And(
					Box::new(compare("b", Comparison::Eq, GeoValue::UInt(2))),
					Box::new(compare("c", Comparison::Eq, GeoValue::UInt(3))),
				)),
			)
		);
	}

	#[test]
	fn parentheses() {
		let filter = parse_filter("(a = 1 OR b = 2) AND c = 3").unwrap();
		assert!(matches!(filter, Filter::And(..)));
	}

	#[test]
	fn keywords_need_word_boundary() {
		let filter = parse_filter("a = 1 AND android = 2").unwrap();
		assert!(matches!(filter, Filter::And(..)));
		let filter = parse_filter("orange = 1").unwrap();
		assert_eq!(filter, compare("orange", Comparison::Eq, GeoValue::UInt(1)));
	}

	#[rstest]
	#[case("")]
	#[case("a")]
	#[case("a =")]
	#[case("= 1")]
	#[case("a = 'open")]
	#[case("a = 1 AND")]
	#[case("(a = 1")]
	#[case("a = 1 b = 2")]
	#[case("1 = a")]
	#[case("a = nullx")]
	fn invalid(#[case] input: &str) {
		let err = parse_filter(input).unwrap_err();
		assert!(err.to_string().starts_with("Failed to parse filter expression"));
	}
}
