use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_till1},
    character::complete::{space0, space1},
    combinator::{all_consuming, map, value},
    sequence::{delimited, separated_pair},
};
use redwood_tree::Color;

/// One non-blank line of the format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Null,
    Node { token: &'a str, color: Color },
}

/// Parses a whole line. Indentation and trailing blanks are accepted but
/// carry no meaning.
pub(crate) fn parse_line(input: &str) -> IResult<&str, Line<'_>> {
    all_consuming(delimited(
        space0,
        alt((node, value(Line::Null, tag("null")))),
        space0,
    ))(input)
}

fn node(input: &str) -> IResult<&str, Line<'_>> {
    map(
        separated_pair(take_till1(char::is_whitespace), space1, color),
        |(token, color)| Line::Node { token, color },
    )(input)
}

fn color(input: &str) -> IResult<&str, Color> {
    alt((
        value(Color::Red, tag("red")),
        value(Color::Black, tag("black")),
    ))(input)
}
