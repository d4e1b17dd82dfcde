use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nutype::nutype;
use thiserror::Error;

pub const DEFAULT_EPSILON: f64 = 0.01;
pub const DEFAULT_TEST_FILE: &str = "../testCases.txt";

/// Largest distance between two candidate points that still counts as an intersection.
#[nutype(
    validate(finite, greater = 0.0),
    derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Display, Into),
    default = 0.01
)]
pub struct Tolerance(f64);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Tolerance must be a positive finite number, got {value}")]
    BadTolerance {
        value: f64,
        #[source]
        source: ToleranceError,
    },
}

#[derive(Debug, Parser)]
#[command(name = "skewline", about = "Find where two lines in 3D space intersect")]
pub struct Cli {
    /// Maximum distance between the candidate points on each line
    #[arg(long, global = true, default_value_t = DEFAULT_EPSILON)]
    pub epsilon: f64,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Cross-check the solver against the reference solver on a file of test cases
    Test {
        /// Case count followed by 12 coordinates per case
        #[arg(long, default_value = DEFAULT_TEST_FILE)]
        file: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Read one pair of lines from stdin
    Interactive,
    Batch { test_file: PathBuf },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub epsilon: Tolerance,
    pub mode: Mode,
}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let epsilon = Tolerance::try_new(cli.epsilon).map_err(|source| {
            ConfigError::BadTolerance {
                value: cli.epsilon,
                source,
            }
        })?;
        let mode = match cli.command {
            None => Mode::Interactive,
            Some(Command::Test { file }) => Mode::Batch { test_file: file },
        };
        Ok(Self { epsilon, mode })
    }
}
