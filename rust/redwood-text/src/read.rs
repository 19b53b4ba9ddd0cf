use std::{fmt::Display, io, str::FromStr};

use redwood_tree::{Tree, TreeBuilder};
use tracing::debug;

use crate::{
    RedwoodTextError,
    line::{Line, parse_line},
};

/// Parses a tree from its text form.
///
/// Blank lines are skipped. The tree is assembled separately and returned
/// only once the whole input has been accepted, so a caller replacing an
/// existing tree with the result never observes a partial load.
pub fn parse<T>(input: &str) -> Result<Tree<T>, RedwoodTextError>
where
    T: Ord + FromStr,
    T::Err: Display,
{
    let mut builder = TreeBuilder::new();

    for (index, text) in input.lines().enumerate() {
        let line = index + 1;
        if text.trim().is_empty() {
            continue;
        }
        if builder.is_complete() {
            return Err(RedwoodTextError::TrailingInput { line });
        }

        let (_, parsed) = parse_line(text).map_err(|_| RedwoodTextError::Malformed { line })?;
        match parsed {
            Line::Null => builder.null()?,
            Line::Node { token, color } => {
                let value = token
                    .parse::<T>()
                    .map_err(|error| RedwoodTextError::InvalidValue {
                        line,
                        token: token.to_string(),
                        reason: error.to_string(),
                    })?;
                builder.node(value, color)?;
            }
        }
    }

    if !builder.is_complete() {
        return Err(RedwoodTextError::UnexpectedEnd);
    }

    let tree = builder.finish()?;
    debug!(len = tree.len(), "parsed tree");
    Ok(tree)
}

/// Reads a tree from `reader` until its end.
pub fn read_from<T, R>(mut reader: R) -> Result<Tree<T>, RedwoodTextError>
where
    T: Ord + FromStr,
    T::Err: Display,
    R: io::Read,
{
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse(&input)
}
