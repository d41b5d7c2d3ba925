use std::path::PathBuf;

use log::{debug, info, warn};

use crate::error::{BenchError, RunResult};
use crate::runner::{check_executable, run_once};
use crate::schema::{ResultsTable, Variant};

pub const DEFAULT_ITERATIONS: usize = 5;

/// Everything one sweep needs; nothing is read from process-wide state.
#[derive(Clone, Debug)]
pub struct SweepConfig {
    pub new_exe: PathBuf,
    pub baseline_exe: PathBuf,
    /// Argument handed to both executables, as given on the command line.
    pub input: String,
    /// Suffix removed from `input` before it is passed on (e.g. `.m`).
    pub strip_suffix: Option<String>,
    pub iterations: usize,
}

impl SweepConfig {
    pub fn new(new_exe: impl Into<PathBuf>, baseline_exe: impl Into<PathBuf>, input: &str) -> Self {
        Self {
            new_exe: new_exe.into(),
            baseline_exe: baseline_exe.into(),
            input: input.to_string(),
            strip_suffix: None,
            iterations: DEFAULT_ITERATIONS,
        }
    }

    /// The argument actually passed to the executables.
    pub fn target(&self) -> &str {
        match self.strip_suffix.as_deref() {
            Some(suffix) if !suffix.is_empty() => {
                self.input.strip_suffix(suffix).unwrap_or(self.input.as_str())
            }
            _ => &self.input,
        }
    }

    pub fn exe(&self, variant: Variant) -> &PathBuf {
        match variant {
            Variant::New => &self.new_exe,
            Variant::Baseline => &self.baseline_exe,
        }
    }
}

/// Raw samples of a finished sweep, one table per variant.
#[derive(Clone, Debug, Default)]
pub struct SweepResults {
    pub new: ResultsTable,
    pub baseline: ResultsTable,
    pub iterations: usize,
}

impl SweepResults {
    pub fn table_mut(&mut self, variant: Variant) -> &mut ResultsTable {
        match variant {
            Variant::New => &mut self.new,
            Variant::Baseline => &mut self.baseline,
        }
    }
}

/// Runs both variants `cfg.iterations` times, strictly one process at a time: each
/// iteration runs the new variant to completion, then the baseline.
///
/// Both executables are checked before the first run. Any run error aborts the sweep.
pub fn run_sweep(cfg: &SweepConfig) -> RunResult<SweepResults> {
    if cfg.iterations == 0 {
        return Err(BenchError::NoIterations);
    }
    check_executable(&cfg.new_exe)?;
    check_executable(&cfg.baseline_exe)?;

    let target = cfg.target();
    let mut results = SweepResults {
        iterations: cfg.iterations,
        ..Default::default()
    };

    for iteration in 1..=cfg.iterations {
        info!("Iteration: {iteration}");
        for variant in [Variant::New, Variant::Baseline] {
            debug!("running {} variant", variant.as_str());
            run_once(cfg.exe(variant), target, iteration, results.table_mut(variant))?;
        }
    }

    let extra: Vec<&str> = results
        .baseline
        .names()
        .filter(|name| !results.new.contains(name))
        .collect();
    if !extra.is_empty() {
        warn!("baseline-only timings not reported: {extra:?}");
    }

    Ok(results)
}
