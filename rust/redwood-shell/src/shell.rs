use std::io::{BufRead, Write};

use rand::Rng;
use tracing::warn;

use crate::{Command, Flow, RedwoodShellError, Session};

/// Printed once when the shell starts.
pub const BANNER: &str = "Red-black tree shell\n";

/// The list of commands.
pub const HELP: &str = "\
Commands:
  gentree n\t\tgenerate a random tree with n nodes
  readtree fileName\tread a tree from a file \"fileName\"
  writetree fileName\twrite a tree into a file \"fileName\"
  add n\t\t\tadd an integer value n to a tree
  remove n\t\tremove an integer value n from a tree
  sumtier n\t\tget sum of nodes on one tier
  check\t\t\tverify the red-black invariants
  init\t\t\tinitialize a tree
  show\t\t\tdisplay a tree
  help\t\t\tprint this text
  quit\t\t\tquit
";

/// Reads commands from `input` and executes them until `quit` or the end of
/// the input.
///
/// Rejected commands and unusable files are reported on `out` and do not end
/// the session; only a failure to write to `out` does.
pub fn run<R, I, W>(session: &mut Session<R>, mut input: I, out: &mut W) -> Result<(), RedwoodShellError>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    out.write_all(BANNER.as_bytes())?;
    out.write_all(HELP.as_bytes())?;

    let prompt = session.settings().prompt.clone();
    let mut line = String::new();

    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let outcome = Command::parse(&line).and_then(|command| match command {
            Some(command) => session.execute(&command, out),
            None => Ok(Flow::Continue),
        });

        match outcome {
            Ok(Flow::Continue) => (),
            Ok(Flow::Quit) => break,
            Err(error) => report(error, out)?,
        }
    }

    out.flush()?;
    Ok(())
}

fn report<W: Write>(error: RedwoodShellError, out: &mut W) -> Result<(), RedwoodShellError> {
    match error {
        RedwoodShellError::IncorrectCommand(line) => {
            warn!(%line, "rejected command");
            writeln!(out, "Incorrect command.")?;
            out.write_all(HELP.as_bytes())?;
        }
        RedwoodShellError::IncorrectFormat(reason) => {
            warn!(%reason, "rejected tree file");
            writeln!(out, "Incorrect format.")?;
        }
        error @ (RedwoodShellError::OpenForReading(_) | RedwoodShellError::OpenForWriting(_)) => {
            warn!(%error, "file unavailable");
            writeln!(out, "{error}")?;
        }
        RedwoodShellError::Output(error) => return Err(RedwoodShellError::Output(error)),
    }
    Ok(())
}
