use std::path::PathBuf;

use clap::Parser;

/// Default for [`Settings::max_generated`].
pub const DEFAULT_MAX_GENERATED: usize = 100;

/// Default for [`Settings::value_limit`].
pub const DEFAULT_VALUE_LIMIT: i64 = 100;

/// Default for [`Settings::prompt`].
pub const DEFAULT_PROMPT: &str = "Command>";

/// Configuration of the shell, read from the command line and environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "redwood")]
#[command(bin_name = "redwood")]
#[command(about = "An interactive shell around a red-black tree", long_about = None)]
pub struct Settings {
    /// Seed for `gentree`; drawn from the operating system when absent
    #[arg(long, env = "REDWOOD_SEED")]
    pub seed: Option<u64>,

    /// Upper bound on the number of values `gentree` inserts
    #[arg(long, env = "REDWOOD_MAX_GENERATED", default_value_t = DEFAULT_MAX_GENERATED)]
    pub max_generated: usize,

    /// `gentree` draws values from `1..=value_limit`
    #[arg(long, env = "REDWOOD_VALUE_LIMIT", default_value_t = DEFAULT_VALUE_LIMIT)]
    pub value_limit: i64,

    /// Printed before every command
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Read commands from this file instead of standard input
    #[arg(long)]
    pub script: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            max_generated: DEFAULT_MAX_GENERATED,
            value_limit: DEFAULT_VALUE_LIMIT,
            prompt: DEFAULT_PROMPT.to_string(),
            script: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let settings = Settings::try_parse_from([
            "redwood",
            "--seed",
            "9",
            "--max-generated",
            "20",
            "--prompt",
            "> ",
        ])
        .unwrap();
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.max_generated, 20);
        assert_eq!(settings.value_limit, DEFAULT_VALUE_LIMIT);
        assert_eq!(settings.prompt, "> ");
        assert_eq!(settings.script, None);
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Settings::command().debug_assert();
    }
}
