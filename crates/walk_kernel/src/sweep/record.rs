//! CSV row type for sweep results.

use serde::{Deserialize, Serialize};

/// One measured point of a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepRecord {
    /// Number of random walks generated per trial.
    pub n: usize,

    /// Walk length.
    #[serde(rename = "T")]
    pub steps: usize,

    /// Fastest trial in nanoseconds.
    pub time_ns: u64,
}

impl SweepRecord {
    /// Column names, in serialisation order.
    pub const HEADER: [&'static str; 3] = ["n", "T", "time_ns"];
}
