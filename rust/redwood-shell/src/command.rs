use std::path::PathBuf;

use nom::{
    IResult,
    character::complete::{alpha1, char, digit1, space0},
    combinator::{all_consuming, map_res, opt, recognize, rest},
    sequence::{delimited, pair, preceded},
};

use crate::{Integer, RedwoodShellError};

/// A command word. Words may be abbreviated to any prefix; an abbreviation
/// resolves to the first word in [`Keyword::ALL`] that it starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyword {
    /// `gentree n`
    GenTree,
    /// `readtree file`
    ReadTree,
    /// `writetree file`
    WriteTree,
    /// `add n`
    Add,
    /// `sumtier n`
    SumTier,
    /// `quit`
    Quit,
    /// `init`
    Init,
    /// `show`
    Show,
    /// `help`
    Help,
    /// `remove n`
    Remove,
    /// `check`
    Check,
}

impl Keyword {
    /// Every keyword, in abbreviation priority order.
    pub const ALL: [Keyword; 11] = [
        Keyword::GenTree,
        Keyword::ReadTree,
        Keyword::WriteTree,
        Keyword::Add,
        Keyword::SumTier,
        Keyword::Quit,
        Keyword::Init,
        Keyword::Show,
        Keyword::Help,
        Keyword::Remove,
        Keyword::Check,
    ];

    /// The full command word.
    pub fn name(self) -> &'static str {
        match self {
            Keyword::GenTree => "gentree",
            Keyword::ReadTree => "readtree",
            Keyword::WriteTree => "writetree",
            Keyword::Add => "add",
            Keyword::SumTier => "sumtier",
            Keyword::Quit => "quit",
            Keyword::Init => "init",
            Keyword::Show => "show",
            Keyword::Help => "help",
            Keyword::Remove => "remove",
            Keyword::Check => "check",
        }
    }

    /// Resolves a (possibly abbreviated) command word.
    pub fn resolve(word: &str) -> Option<Keyword> {
        if word.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|keyword| keyword.name().starts_with(word))
    }
}

/// A parsed shell command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replace the tree with up to `n` random values
    GenTree(usize),
    /// Replace the tree with one read from a file
    ReadTree(PathBuf),
    /// Write the tree into a file
    WriteTree(PathBuf),
    /// Insert a value unless it is present
    Add(Integer),
    /// Remove a value if it is present
    Remove(Integer),
    /// Print the sum of one tier
    SumTier(usize),
    /// Print whether the tree upholds its invariants
    Check,
    /// Empty the tree
    Init,
    /// Print the tree
    Show,
    /// Print the list of commands
    Help,
    /// Leave the shell
    Quit,
}

impl Command {
    /// Parses one input line, with or without its line ending. Blank lines
    /// yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, RedwoodShellError> {
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            return Ok(None);
        }

        let incorrect = || RedwoodShellError::IncorrectCommand(line.trim().to_string());

        let (arguments, word) = keyword_word(line).map_err(|_| incorrect())?;
        let keyword = Keyword::resolve(word).ok_or_else(incorrect)?;

        let command = match keyword {
            Keyword::GenTree => Command::GenTree(finish(count, arguments).ok_or_else(incorrect)?),
            Keyword::SumTier => Command::SumTier(finish(count, arguments).ok_or_else(incorrect)?),
            Keyword::Add => Command::Add(finish(integer, arguments).ok_or_else(incorrect)?),
            Keyword::Remove => Command::Remove(finish(integer, arguments).ok_or_else(incorrect)?),
            Keyword::ReadTree => Command::ReadTree(finish(path, arguments).ok_or_else(incorrect)?),
            Keyword::WriteTree => {
                Command::WriteTree(finish(path, arguments).ok_or_else(incorrect)?)
            }
            Keyword::Quit | Keyword::Init | Keyword::Show | Keyword::Help | Keyword::Check => {
                finish(space0, arguments).ok_or_else(incorrect)?;
                match keyword {
                    Keyword::Quit => Command::Quit,
                    Keyword::Init => Command::Init,
                    Keyword::Show => Command::Show,
                    Keyword::Help => Command::Help,
                    _ => Command::Check,
                }
            }
        };

        Ok(Some(command))
    }
}

/// Runs `parser` over the whole of `input`.
fn finish<'a, O>(
    parser: impl FnMut(&'a str) -> IResult<&'a str, O>,
    input: &'a str,
) -> Option<O> {
    all_consuming(parser)(input).ok().map(|(_, output)| output)
}

fn keyword_word(input: &str) -> IResult<&str, &str> {
    preceded(space0, alpha1)(input)
}

/// A non-negative decimal number; it must start with a digit.
fn count(input: &str) -> IResult<&str, usize> {
    delimited(space0, map_res(digit1, str::parse), space0)(input)
}

fn integer(input: &str) -> IResult<&str, Integer> {
    delimited(
        space0,
        map_res(recognize(pair(opt(char('-')), digit1)), str::parse),
        space0,
    )(input)
}

/// The rest of the line, trimmed. Must not be empty.
fn path(input: &str) -> IResult<&str, PathBuf> {
    map_res(rest, |rest: &str| match rest.trim() {
        "" => Err("missing file name"),
        name => Ok(PathBuf::from(name)),
    })(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Option<Command> {
        Command::parse(line).ok().flatten()
    }

    #[test]
    fn full_commands_are_parsed() {
        assert_eq!(parse("gentree 10"), Some(Command::GenTree(10)));
        assert_eq!(parse("  add 7  "), Some(Command::Add(Integer(7))));
        assert_eq!(parse("add -7"), Some(Command::Add(Integer(-7))));
        assert_eq!(parse("remove 3"), Some(Command::Remove(Integer(3))));
        assert_eq!(parse("sumtier 0"), Some(Command::SumTier(0)));
        assert_eq!(
            parse("writetree my tree.txt"),
            Some(Command::WriteTree(PathBuf::from("my tree.txt")))
        );
        assert_eq!(parse("check"), Some(Command::Check));
        assert_eq!(parse("quit"), Some(Command::Quit));
    }

    #[test]
    fn abbreviations_pick_the_first_match() {
        assert_eq!(parse("g 1"), Some(Command::GenTree(1)));
        assert_eq!(
            parse("r in.txt"),
            Some(Command::ReadTree(PathBuf::from("in.txt")))
        );
        assert_eq!(parse("rem 1"), Some(Command::Remove(Integer(1))));
        assert_eq!(parse("s 2"), Some(Command::SumTier(2)));
        assert_eq!(parse("sh"), Some(Command::Show));
        assert_eq!(parse("h"), Some(Command::Help));
        assert_eq!(parse("i"), Some(Command::Init));
        assert_eq!(parse("c"), Some(Command::Check));
    }

    #[test]
    fn line_endings_are_ignored() {
        for ending in ["\n", "\r\n"] {
            let parse_line = |command: &str| parse(&format!("{command}{ending}"));

            assert_eq!(parse_line("quit"), Some(Command::Quit));
            assert_eq!(parse_line("show "), Some(Command::Show));
            assert_eq!(parse_line("c"), Some(Command::Check));
            assert_eq!(parse_line("gentree 10"), Some(Command::GenTree(10)));
            assert_eq!(parse_line("sumtier 2 "), Some(Command::SumTier(2)));
            assert_eq!(parse_line("add 2"), Some(Command::Add(Integer(2))));
            assert_eq!(parse_line("remove -4"), Some(Command::Remove(Integer(-4))));
            assert_eq!(
                parse_line("readtree in.txt"),
                Some(Command::ReadTree(PathBuf::from("in.txt")))
            );
            assert_eq!(
                parse_line("writetree out.txt"),
                Some(Command::WriteTree(PathBuf::from("out.txt")))
            );
        }
    }

    #[test]
    fn rejected_lines_are_reported_without_their_ending() {
        assert!(matches!(
            Command::parse("add x\r\n"),
            Err(RedwoodShellError::IncorrectCommand(line)) if line == "add x"
        ));
        assert!(matches!(
            Command::parse("show all\n"),
            Err(RedwoodShellError::IncorrectCommand(line)) if line == "show all"
        ));
    }

    #[test]
    fn blank_lines_are_not_commands() {
        assert!(matches!(Command::parse("   "), Ok(None)));
        assert!(matches!(Command::parse(""), Ok(None)));
        assert!(matches!(Command::parse("\n"), Ok(None)));
        assert!(matches!(Command::parse("  \r\n"), Ok(None)));
    }

    #[test]
    fn malformed_commands_are_rejected() {
        for line in [
            "frobnicate",
            "gentreee 3",
            "gentree",
            "gentree -3",
            "gentree x",
            "add",
            "add 3x",
            "readtree",
            "writetree   ",
            "show everything",
            "42",
        ] {
            assert!(
                matches!(
                    Command::parse(line),
                    Err(RedwoodShellError::IncorrectCommand(_))
                ),
                "{line:?} should be rejected"
            );
        }
    }
}
