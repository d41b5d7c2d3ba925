use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

pub type RunResult<T> = Result<T, BenchError>;

/// Fatal conditions of a sweep. None of these are recovered from: the binary reports the
/// message and exits non-zero.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("cannot find executable {}", .0.display())]
    ExecutableNotFound(PathBuf),

    #[error("{} is not an executable file", .0.display())]
    NotExecutable(PathBuf),

    #[error("failed to launch {}: {source}", .exe.display())]
    Spawn {
        exe: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("i/o error while running {}: {source}", .exe.display())]
    Io {
        exe: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} violated the timing protocol: {source}", .exe.display())]
    MalformedTiming {
        exe: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("no samples recorded for measurement `{name}`")]
    EmptySampleSet { name: String },

    #[error("measurement `{name}` has {new} new samples but {baseline} baseline samples")]
    LengthMismatch {
        name: String,
        new: usize,
        baseline: usize,
    },

    #[error(
        "measurement `{name}` has {new} new samples but {baseline} baseline samples \
         in iteration {iteration}"
    )]
    IterationMismatch {
        name: String,
        iteration: usize,
        new: usize,
        baseline: usize,
    },

    #[error("measurement `{name}` was never reported by the baseline")]
    MissingMeasurement { name: String },

    #[error("iteration count must be at least 1")]
    NoIterations,
}
