use std::collections::BTreeMap;

/// Measurement name the harness records itself: wall-clock time of one whole invocation.
pub const END_TO_END: &str = "end_to_end";

/// Which of the two benchmarked programs a run belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    New,
    Baseline,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::New => "new",
            Variant::Baseline => "baseline",
        }
    }
}

/// Per-variant mapping from measurement name to its samples, in seconds.
///
/// Samples for one name are kept in the order they were observed, which is iteration
/// order; report building pairs them positionally against the other variant. Each sample
/// also carries the (1-based) iteration it was observed in, so a name missing from one
/// variant's run can be told apart from a shifted pairing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultsTable {
    samples: BTreeMap<String, Series>,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Series {
    seconds: Vec<f64>,
    iterations: Vec<usize>,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one sample; repeated names are never deduplicated.
    pub fn record(&mut self, name: &str, iteration: usize, seconds: f64) {
        let series = self.samples.entry(name.to_string()).or_default();
        series.seconds.push(seconds);
        series.iterations.push(iteration);
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.samples.get(name).map(|s| s.seconds.as_slice())
    }

    /// Iteration of each sample returned by [`ResultsTable::get`], position for position.
    pub fn iterations(&self, name: &str) -> Option<&[usize]> {
        self.samples.get(name).map(|s| s.iterations.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.samples.contains_key(name)
    }

    /// Measurement names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.samples.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Summary statistics over one measurement's samples (population definitions).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

/// One new-minus-baseline difference.
///
/// `percentage` is a fraction of the baseline (0.25 means +25%). A zero baseline yields a
/// percentage of exactly 0 even when `delta` is not zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Delta {
    pub delta: f64,
    pub percentage: f64,
}

impl Delta {
    pub fn between(new: f64, baseline: f64) -> Self {
        let delta = new - baseline;
        let percentage = if baseline == 0.0 { 0.0 } else { delta / baseline };
        Self { delta, percentage }
    }
}

/// Per-iteration differences for one measurement name.
pub type ComparisonRecord = Vec<Delta>;

/// Difference between the new and the baseline summary, statistic by statistic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryDiff {
    pub mean: Delta,
    pub min: Delta,
    pub max: Delta,
    pub std_dev: Delta,
}

impl SummaryDiff {
    pub fn between(new: &Summary, baseline: &Summary) -> Self {
        Self {
            mean: Delta::between(new.mean, baseline.mean),
            min: Delta::between(new.min, baseline.min),
            max: Delta::between(new.max, baseline.max),
            std_dev: Delta::between(new.std_dev, baseline.std_dev),
        }
    }
}
