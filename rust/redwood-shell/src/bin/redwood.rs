use std::{
    fs::File,
    io::{self, BufReader},
};

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use redwood_shell::{Session, Settings, run};
use tracing_subscriber::EnvFilter;

pub fn main() -> Result<()> {
    // Logs go to stderr so that stdout carries only the shell's output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let settings = Settings::parse();
    let rng = match settings.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let script = settings.script.clone();
    let mut session = Session::new(settings, rng);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Could not open script {}", path.display()))?;
            run(&mut session, BufReader::new(file), &mut out)?;
        }
        None => run(&mut session, io::stdin().lock(), &mut out)?,
    }

    Ok(())
}
