use std::{fs::File, io::Write};

use rand::Rng;
use redwood_tree::Tree;
use tracing::debug;

use crate::{Command, HELP, Integer, RedwoodShellError, Settings};

/// Whether the shell keeps reading commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command
    Continue,
    /// Stop reading commands
    Quit,
}

/// The state a shell operates on: one tree, the settings and the random
/// source used by `gentree`.
pub struct Session<R> {
    tree: Tree<Integer>,
    settings: Settings,
    rng: R,
}

impl<R: Rng> Session<R> {
    /// Creates a session holding an empty tree.
    pub fn new(settings: Settings, rng: R) -> Self {
        Self {
            tree: Tree::new(),
            settings,
            rng,
        }
    }

    /// The tree this session works on.
    pub fn tree(&self) -> &Tree<Integer> {
        &self.tree
    }

    /// The settings this session was created with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Applies `command`, printing its outcome to `out`.
    pub fn execute<W: Write>(
        &mut self,
        command: &Command,
        out: &mut W,
    ) -> Result<Flow, RedwoodShellError> {
        debug!(?command, "executing");

        match command {
            Command::GenTree(count) => {
                self.generate(*count);
                self.show(out)?;
            }
            Command::ReadTree(path) => {
                let file = File::open(path).map_err(RedwoodShellError::OpenForReading)?;
                // The current tree survives a failed read
                self.tree = redwood_text::read_from(file)?;
                self.show(out)?;
            }
            Command::WriteTree(path) => {
                let file = File::create(path).map_err(RedwoodShellError::OpenForWriting)?;
                redwood_text::write_to(&self.tree, file)
                    .map_err(RedwoodShellError::OpenForWriting)?;
            }
            Command::Add(value) => {
                self.tree.add(*value);
                self.show(out)?;
            }
            Command::Remove(value) => {
                self.tree.remove(value);
                self.show(out)?;
            }
            Command::SumTier(depth) => {
                writeln!(out, "{}", self.tree.sum_one_tier(*depth))?;
            }
            Command::Check => match self.tree.validate() {
                Ok(black_height) => writeln!(out, "ok (black height {black_height})")?,
                Err(error) => writeln!(out, "{error}")?,
            },
            Command::Init => {
                self.tree.clear();
                self.show(out)?;
            }
            Command::Show => self.show(out)?,
            Command::Help => out.write_all(HELP.as_bytes())?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Replaces the tree with distinct random values drawn from
    /// `1..=value_limit`.
    fn generate(&mut self, count: usize) {
        let distinct = usize::try_from(self.settings.value_limit).unwrap_or(0);
        let target = count.min(self.settings.max_generated).min(distinct);

        self.tree.clear();
        while self.tree.len() < target {
            let value = self.rng.gen_range(1..=self.settings.value_limit);
            self.tree.add(Integer(value));
        }
        debug!(requested = count, generated = target, "generated tree");
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<(), RedwoodShellError> {
        redwood_text::write_to(&self.tree, out)?;
        Ok(())
    }
}
