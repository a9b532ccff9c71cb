use std::time::Instant;

use tracing::info;

use crate::error::Result;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_network;

/// Trains `network` for `config.epochs` epochs and returns the statistics of
/// every epoch, oldest first.
///
/// Every epoch checks all samples before training, so a training set that
/// does not match the network fails in the first epoch without changing it.
pub fn train_loop(
    network: &mut Network,
    inputs: &[Vec<f64>],
    expected_outputs: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<Vec<EpochStats>> {
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();
        let error = train_network(network, inputs, expected_outputs)?;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        if config.report_every > 0 && (epoch % config.report_every == 0 || epoch == config.epochs) {
            info!(epoch, total_epochs = config.epochs, error, "epoch complete");
        }

        history.push(EpochStats {
            epoch,
            total_epochs: config.epochs,
            error,
            elapsed_ms,
        });
    }

    Ok(history)
}
