pub mod error;
pub mod activation;
pub mod rng;
pub mod graph;
pub mod loss;
pub mod layers;
pub mod network;
pub mod train;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use activation::{Activation, ActivationFunction};
pub use rng::RandomWeight;
pub use graph::{Node, NodeId, Weight, WeightId};
pub use layers::dense::Layer;
pub use network::{Network, NetworkDescriptor};
pub use train::{train_loop, train_network, train_step, EpochStats, TrainConfig};
