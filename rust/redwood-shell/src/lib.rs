#![warn(missing_docs)]

//! An interactive, line-oriented shell around a [`redwood_tree::Tree`] of
//! [`Integer`]s.
//!
//! The shell reads one command per line, applies it to a single tree and
//! prints the result. Command words may be abbreviated to any prefix; see
//! [`HELP`] for the full list.
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use redwood_shell::{Session, Settings, run};
//!
//! let mut session = Session::new(Settings::default(), ChaCha8Rng::seed_from_u64(7));
//! let mut output = Vec::new();
//! run(&mut session, "add 2\nadd 1\nsumtier 1\nquit\n".as_bytes(), &mut output)?;
//!
//! assert_eq!(session.tree().len(), 2);
//! assert!(String::from_utf8(output)?.contains("Command>1\n"));
//! # Ok::<(), anyhow::Error>(())
//! ```

mod error;
pub use error::*;

mod settings;
pub use settings::*;

mod value;
pub use value::*;

mod command;
pub use command::*;

mod session;
pub use session::*;

mod shell;
pub use shell::*;
