use lute_tokens::reserved::Reserved;
use lute_tokens::token::Token;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, alphanumeric1, char, digit1};
use nom::combinator::{all_consuming, map, map_res, opt, recognize, value};
use nom::error::{context, VerboseError};
use nom::multi::{many0_count, separated_list1};
use nom::sequence::{delimited, pair, tuple};
use nom::{Finish, IResult};

type Result<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Finds the token that `text` represents.
///
/// Until a delimiter has been reached only reserved tokens can be recognized, and text that could
/// still grow into more than one reserved token is left undecided. Once delimited, the text is
/// matched against the reserved catalog and then every literal shape.
pub fn classify(text: &str, delimited: bool) -> Option<Token> {
    if !delimited {
        if Reserved::is_ambiguous_prefix(text) {
            return None;
        }
        return Reserved::find(text).map(Token::from);
    }
    if let Some(reserved) = Reserved::find(text) {
        return Some(reserved.into());
    }
    parse_literal(text).finish().ok().map(|(_, token)| token)
}

fn parse_literal(src: &str) -> Result<Token> {
    context(
        "literal",
        alt((
            // before identifiers, which would otherwise claim `true` and `false`
            all_consuming(parse_boolean),
            all_consuming(parse_identifier),
            all_consuming(parse_integer),
            all_consuming(parse_integer_array),
            all_consuming(parse_float),
            all_consuming(parse_float_array),
            all_consuming(parse_empty_array),
            all_consuming(parse_unit),
        )),
    )(src)
}

fn recognize_identifier(src: &str) -> Result<&str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_")))),
    ))(src)
}

fn parse_identifier(src: &str) -> Result<Token> {
    context(
        "identifier",
        map(recognize_identifier, |id: &str| {
            Token::Identifier(id.to_string())
        }),
    )(src)
}

fn parse_boolean(src: &str) -> Result<Token> {
    context(
        "boolean",
        alt((
            value(Token::Boolean(true), tag("true")),
            value(Token::Boolean(false), tag("false")),
        )),
    )(src)
}

fn integer_value(src: &str) -> Result<i32> {
    map_res(recognize(pair(opt(char('-')), digit1)), |digits: &str| {
        digits.parse::<i32>()
    })(src)
}

fn float_value(src: &str) -> Result<f32> {
    map_res(
        recognize(tuple((opt(char('-')), digit1, char('.'), digit1))),
        |digits: &str| digits.parse::<f32>(),
    )(src)
}

fn parse_integer(src: &str) -> Result<Token> {
    context("integer", map(integer_value, Token::Integer))(src)
}

fn parse_float(src: &str) -> Result<Token> {
    context("float", map(float_value, Token::Float))(src)
}

fn parse_integer_array(src: &str) -> Result<Token> {
    context(
        "integer array",
        map(
            delimited(char('['), separated_list1(char(','), integer_value), char(']')),
            Token::IntegerArray,
        ),
    )(src)
}

fn parse_float_array(src: &str) -> Result<Token> {
    context(
        "float array",
        map(
            delimited(char('['), separated_list1(char(','), float_value), char(']')),
            Token::FloatArray,
        ),
    )(src)
}

fn parse_empty_array(src: &str) -> Result<Token> {
    context("empty array", value(Token::IntegerArray(vec![]), tag("[]")))(src)
}

fn parse_unit(src: &str) -> Result<Token> {
    context("unit", value(Token::Unit, tag("()")))(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_reserved_wins_over_identifier() {
        assert_eq!(classify("list", true), Some(Token::from(Reserved::List)));
        assert_eq!(classify("hd", true), Some(Token::from(Reserved::Head)));
        assert_eq!(
            classify("lists", true),
            Some(Token::Identifier("lists".to_string()))
        );
    }

    #[test]
    fn test_undelimited_only_commits_reserved() {
        assert_eq!(classify(":", false), None);
        assert_eq!(classify(":=", false), Some(Token::from(Reserved::Assign)));
        assert_eq!(classify("x", false), None);
        assert_eq!(classify("5", false), None);
        assert_eq!(classify("(", false), None);
        assert_eq!(classify("(", true), Some(Token::from(Reserved::LeftParen)));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(classify("42", true), Some(Token::Integer(42)));
        assert_eq!(classify("-7", true), Some(Token::Integer(-7)));
        assert_eq!(classify("2.5", true), Some(Token::Float(2.5)));
        assert_eq!(classify("2.", true), None);
        assert_eq!(classify(".50", true), None);
        assert_eq!(classify("2.532.50", true), None);
    }

    #[test]
    fn test_overflowing_integer_is_not_recognized() {
        assert_eq!(classify("2147483647", true), Some(Token::Integer(i32::MAX)));
        assert_eq!(classify("2147483648", true), None);
    }

    #[test]
    fn test_arrays() {
        assert_eq!(
            classify("[1,2,3]", true),
            Some(Token::IntegerArray(vec![1, 2, 3]))
        );
        assert_eq!(
            classify("[1.5,-2.0]", true),
            Some(Token::FloatArray(vec![1.5, -2.0]))
        );
        assert_eq!(classify("[]", true), Some(Token::IntegerArray(vec![])));
        assert_eq!(classify("[1,2.0]", true), None);
        assert_eq!(classify("[1,]", true), None);
    }

    #[test]
    fn test_boolean_and_unit() {
        assert_eq!(classify("true", true), Some(Token::Boolean(true)));
        assert_eq!(classify("false", true), Some(Token::Boolean(false)));
        assert_eq!(
            classify("truth", true),
            Some(Token::Identifier("truth".to_string()))
        );
        assert_eq!(classify("()", true), Some(Token::Unit));
    }
}
