use crate::error::{BenchError, RunResult};
use crate::schema::{ComparisonRecord, Delta};

/// Element-wise `new - baseline` with the difference as a fraction of the baseline.
///
/// Where `baseline[i] == 0` the percentage is reported as 0; read a 0% next to a non-zero
/// delta as "baseline was zero", not "unchanged".
pub fn compare(name: &str, new: &[f64], baseline: &[f64]) -> RunResult<ComparisonRecord> {
    if new.len() != baseline.len() {
        return Err(BenchError::LengthMismatch {
            name: name.to_string(),
            new: new.len(),
            baseline: baseline.len(),
        });
    }

    Ok(new
        .iter()
        .zip(baseline)
        .map(|(&n, &b)| Delta::between(n, b))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_and_percentage() {
        let rec = compare("t", &[5.0], &[4.0]).unwrap();
        assert_eq!(rec.len(), 1);
        assert_eq!(rec[0].delta, 1.0);
        assert_eq!(rec[0].percentage, 0.25);
    }

    #[test]
    fn zero_baseline_reports_zero_percent() {
        let rec = compare("t", &[3.5], &[0.0]).unwrap();
        assert_eq!(rec[0].delta, 3.5);
        assert_eq!(rec[0].percentage, 0.0);
    }

    #[test]
    fn keeps_positional_pairing() {
        let rec = compare("t", &[1.0, 3.0], &[2.0, 2.0]).unwrap();
        assert_eq!(rec[0].delta, -1.0);
        assert_eq!(rec[0].percentage, -0.5);
        assert_eq!(rec[1].delta, 1.0);
        assert_eq!(rec[1].percentage, 0.5);
    }

    #[test]
    fn unequal_lengths_are_an_error() {
        match compare("phase1", &[1.0, 2.0], &[1.0]) {
            Err(BenchError::LengthMismatch {
                name,
                new,
                baseline,
            }) => {
                assert_eq!(name, "phase1");
                assert_eq!(new, 2);
                assert_eq!(baseline, 1);
            }
            other => panic!("expected LengthMismatch, got {other:?}"),
        }
    }
}
