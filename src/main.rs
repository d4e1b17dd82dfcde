use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use log::{info, warn};

use skewline::{
    config::{Cli, Config, Mode},
    harness::run_batch_file,
    interactive::run_interactive,
    solver::{ClosestApproach, Parametric},
};

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let config = Config::try_from(Cli::parse())?;

    match config.mode {
        Mode::Interactive => {
            let stdin = io::stdin();
            run_interactive(stdin.lock(), io::stdout(), &Parametric, config.epsilon)?;
        }
        Mode::Batch { test_file } => {
            let tally = run_batch_file(
                &test_file,
                io::stdout().lock(),
                &Parametric,
                &ClosestApproach,
                config.epsilon,
            )
            .with_context(|| format!("Failed to run test cases from {}", test_file.display()))?;
            if tally.all_passed() {
                info!("Finished: {tally}");
            } else {
                warn!("Solvers disagree, {tally} test cases passed");
            }
        }
    }
    Ok(())
}
