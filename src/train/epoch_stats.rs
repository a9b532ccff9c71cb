use serde::{Serialize, Deserialize};

/// Statistics for one completed epoch of `train_loop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    pub total_epochs: usize,
    /// Sum of the per-sample errors measured during the epoch.
    pub error: f64,
    pub elapsed_ms: u64,
}
