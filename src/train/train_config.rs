use serde::{Serialize, Deserialize};

/// Configuration for a `train_loop` run.
///
/// - `epochs`       — number of full passes over the training set
/// - `report_every` — log one progress line every this many epochs; `0`
///                    disables progress logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    #[serde(default)]
    pub report_every: usize,
}

impl TrainConfig {
    pub fn new(epochs: usize) -> Self {
        TrainConfig { epochs, report_every: 0 }
    }

    pub fn with_report_every(mut self, report_every: usize) -> Self {
        self.report_every = report_every;
        self
    }
}
