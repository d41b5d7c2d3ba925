use crate::error::{BenchError, RunResult};
use crate::schema::Summary;

/// Min, max, mean and population standard deviation of `samples`.
///
/// Values are taken as-is; negative or implausible durations are not rejected.
pub fn summarize(name: &str, samples: &[f64]) -> RunResult<Summary> {
    if samples.is_empty() {
        return Err(BenchError::EmptySampleSet {
            name: name.to_string(),
        });
    }

    let count = samples.len() as f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &s in samples {
        min = min.min(s);
        max = max.max(s);
        sum += s;
    }
    let mean = sum / count;

    let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / count;

    Ok(Summary {
        min,
        max,
        mean,
        std_dev: variance.sqrt(),
    })
}
