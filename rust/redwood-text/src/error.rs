use redwood_tree::RedwoodTreeError;
use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug)]
pub enum RedwoodTextError {
    /// A line is neither `null` nor `<value> <red|black>`
    #[error("Line {line}: expected `null` or `<value> <red|black>`")]
    Malformed {
        /// The 1-based line number
        line: usize,
    },

    /// A value token could not be parsed into the value type
    #[error("Line {line}: invalid value `{token}`: {reason}")]
    InvalidValue {
        /// The 1-based line number
        line: usize,
        /// The offending token
        token: String,
        /// Why the token was rejected
        reason: String,
    },

    /// Input continues after the tree is complete
    #[error("Line {line}: unexpected input after the end of the tree")]
    TrailingInput {
        /// The 1-based line number
        line: usize,
    },

    /// Input ended before the tree was complete
    #[error("Input ended before the tree was complete")]
    UnexpectedEnd,

    /// The lines describe a shape that is not a valid search tree
    #[error("Invalid tree: {0}")]
    Tree(#[from] RedwoodTreeError),

    /// A value could not be formatted
    #[error("A value could not be formatted")]
    Format(#[from] std::fmt::Error),

    /// Reading or writing failed
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
