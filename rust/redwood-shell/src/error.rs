use std::io;

use redwood_text::RedwoodTextError;
use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug)]
pub enum RedwoodShellError {
    /// The line is not a well-formed command
    #[error("Incorrect command: {0}")]
    IncorrectCommand(String),

    /// A tree file could not be parsed
    #[error("Incorrect format: {0}")]
    IncorrectFormat(#[from] RedwoodTextError),

    /// A tree file could not be opened for reading
    #[error("Could not open a file for reading: {0}")]
    OpenForReading(#[source] io::Error),

    /// A tree file could not be opened or written
    #[error("Could not open a file for writing: {0}")]
    OpenForWriting(#[source] io::Error),

    /// Talking to the terminal failed
    #[error("Output failure: {0}")]
    Output(#[from] io::Error),
}
