//! Comparative timing harness.
//!
//! Runs a "new" and a "baseline" executable against the same input a fixed number of
//! times, collects the `TIMING_<name>: <seconds>` lines each prints on stdout (plus the
//! harness-measured `end_to_end` wall clock), and reports summary statistics with a
//! new-minus-baseline comparison.

pub mod compare;
pub mod error;
pub mod harness;
pub mod parser;
pub mod report;
pub mod runner;
pub mod schema;
pub mod stats;

pub use error::{BenchError, RunResult};
pub use harness::{run_sweep, SweepConfig, SweepResults};
pub use report::{build_report, Report};
