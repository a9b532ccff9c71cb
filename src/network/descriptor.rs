use serde::{Serialize, Deserialize};

use crate::activation::Activation;
use crate::error::{NetworkError, Result};

/// Topology and initial state of a network.
///
/// - `layers`          — total layer count, input and output included
/// - `nodes_per_layer` — size of the input layer and of every hidden layer
/// - `output_nodes`    — size of the output layer; `0` means `nodes_per_layer`
/// - `learning_rate`   — step size shared by every weight
/// - `activation`      — activation applied by every non-input node
/// - `biases`          — optional flat list, consumed layer by layer from the
///                       first hidden layer, node by node
/// - `initial_weights` — optional flat list, consumed layer by layer, node by
///                       node, each node's outgoing edges in child order
///
/// An absent or empty list falls back to zero biases and random weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    pub layers: usize,
    pub nodes_per_layer: usize,
    #[serde(default)]
    pub output_nodes: usize,
    pub learning_rate: f64,
    #[serde(default)]
    pub activation: Activation,
    #[serde(default)]
    pub biases: Option<Vec<f64>>,
    #[serde(default)]
    pub initial_weights: Option<Vec<f64>>,
}

impl NetworkDescriptor {
    pub fn new(layers: usize, nodes_per_layer: usize, learning_rate: f64) -> NetworkDescriptor {
        NetworkDescriptor {
            layers,
            nodes_per_layer,
            output_nodes: 0,
            learning_rate,
            activation: Activation::Sigmoid,
            biases: None,
            initial_weights: None,
        }
    }

    pub fn with_output_nodes(mut self, output_nodes: usize) -> Self {
        self.output_nodes = output_nodes;
        self
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn with_biases(mut self, biases: Vec<f64>) -> Self {
        self.biases = Some(biases);
        self
    }

    pub fn with_initial_weights(mut self, weights: Vec<f64>) -> Self {
        self.initial_weights = Some(weights);
        self
    }

    pub fn output_node_count(&self) -> usize {
        if self.output_nodes == 0 { self.nodes_per_layer } else { self.output_nodes }
    }

    /// Node count of every layer, input first.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![self.nodes_per_layer; self.layers.saturating_sub(1)];
        sizes.push(self.output_node_count());
        sizes
    }

    pub fn validate(&self) -> Result<()> {
        if self.layers < 2 {
            return Err(NetworkError::Topology(format!(
                "need an input and an output layer, got {} layer(s)",
                self.layers
            )));
        }
        if self.nodes_per_layer == 0 {
            return Err(NetworkError::Topology("nodes_per_layer must be at least 1".into()));
        }
        Ok(())
    }

    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn load_json(path: &str) -> Result<NetworkDescriptor> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
