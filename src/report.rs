//! Report building and text rendering.

use std::fmt;

use crate::compare::compare;
use crate::error::{BenchError, RunResult};
use crate::harness::SweepResults;
use crate::schema::{ComparisonRecord, Delta, ResultsTable, Summary, SummaryDiff};
use crate::stats::summarize;

/// Everything shown for one measurement name.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementReport {
    pub name: String,
    pub baseline: Summary,
    pub new: Summary,
    /// New-minus-baseline on each summary statistic; this is the "Diff" line.
    pub diff: SummaryDiff,
    pub per_iteration: ComparisonRecord,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    pub measurements: Vec<MeasurementReport>,
    /// Render each measurement's per-iteration comparison below its Diff line.
    pub show_iterations: bool,
}

impl Report {
    pub fn get(&self, name: &str) -> Option<&MeasurementReport> {
        self.measurements.iter().find(|m| m.name == name)
    }

    pub fn with_iterations(mut self, show: bool) -> Self {
        self.show_iterations = show;
        self
    }
}

/// Builds the report over every name the new variant reported, in lexicographic order.
///
/// Fails on the first name that cannot be compared (absent from the baseline, unequal
/// sample counts overall or within one iteration, no samples); no partial report is
/// produced.
pub fn build_report(new: &ResultsTable, baseline: &ResultsTable) -> RunResult<Report> {
    let mut measurements = Vec::with_capacity(new.len());

    for name in new.names() {
        let new_samples = new.get(name).unwrap_or_default();
        let base_samples = baseline
            .get(name)
            .ok_or_else(|| BenchError::MissingMeasurement {
                name: name.to_string(),
            })?;

        let new_stats = summarize(name, new_samples)?;
        let base_stats = summarize(name, base_samples)?;
        let per_iteration = compare(name, new_samples, base_samples)?;
        check_iterations(
            name,
            new.iterations(name).unwrap_or_default(),
            baseline.iterations(name).unwrap_or_default(),
        )?;

        measurements.push(MeasurementReport {
            name: name.to_string(),
            baseline: base_stats,
            new: new_stats,
            diff: SummaryDiff::between(&new_stats, &base_stats),
            per_iteration,
        });
    }

    Ok(Report {
        measurements,
        show_iterations: false,
    })
}

/// Positional pairing is only sound when both variants reported `name` equally often in
/// every iteration.
fn check_iterations(name: &str, new: &[usize], baseline: &[usize]) -> RunResult<()> {
    let Some(last) = new.iter().chain(baseline).copied().max() else {
        return Ok(());
    };
    for iteration in 1..=last {
        let in_new = new.iter().filter(|&&i| i == iteration).count();
        let in_base = baseline.iter().filter(|&&i| i == iteration).count();
        if in_new != in_base {
            return Err(BenchError::IterationMismatch {
                name: name.to_string(),
                iteration,
                new: in_new,
                baseline: in_base,
            });
        }
    }
    Ok(())
}

impl SweepResults {
    pub fn report(&self) -> RunResult<Report> {
        build_report(&self.new, &self.baseline)
    }
}

fn write_summary(f: &mut fmt::Formatter<'_>, label: &str, s: &Summary) -> fmt::Result {
    writeln!(
        f,
        "  {label:<6} mean {:.2}\t\tmin {:.2}\t\tmax {:.2}\t\tstd {:.2}",
        s.mean, s.min, s.max, s.std_dev
    )
}

struct Pct<'a>(&'a Delta);

impl fmt::Display for Pct<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}({:.2}%)", self.0.delta, 100.0 * self.0.percentage)
    }
}

impl fmt::Display for MeasurementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Timing: {}", self.name)?;
        write_summary(f, "Stock:", &self.baseline)?;
        write_summary(f, "New:", &self.new)?;
        writeln!(
            f,
            "  Diff:  mean {}\tmin {}\tmax {}\t\tstd {}",
            Pct(&self.diff.mean),
            Pct(&self.diff.min),
            Pct(&self.diff.max),
            Pct(&self.diff.std_dev)
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.measurements {
            write!(f, "{m}")?;
            if self.show_iterations {
                for (i, d) in m.per_iteration.iter().enumerate() {
                    writeln!(f, "    #{}: {:.4}({:.2}%)", i + 1, d.delta, 100.0 * d.percentage)?;
                }
            }
        }
        Ok(())
    }
}
