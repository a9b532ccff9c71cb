use std::sync::Arc;

use tracing::debug;

use crate::activation::ActivationFunction;
use crate::error::Result;
use crate::graph::Weight;
use crate::layers::dense::Layer;
use crate::network::descriptor::NetworkDescriptor;
use crate::network::list_reader::ListReader;
use crate::rng::RandomWeight;

/// A fully connected feed-forward network.
///
/// Layers own their nodes; every edge lives in one arena addressed by
/// `WeightId`. Topology is fixed at construction. A training step runs, in
/// order: `set_input`, `forward_propagate`, `set_error_terms_from_expected`,
/// `backward_propagate`, `update_weights`.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    weights: Vec<Weight>,
}

impl Network {
    /// Builds a network with an entropy-seeded weight source.
    pub fn new(descriptor: &NetworkDescriptor) -> Result<Network> {
        Network::with_rng(descriptor, &mut RandomWeight::new())
    }

    /// Builds a network with the descriptor's built-in activation.
    pub fn with_rng(descriptor: &NetworkDescriptor, rng: &mut RandomWeight) -> Result<Network> {
        let activation: Arc<dyn ActivationFunction> = Arc::new(descriptor.activation.clone());
        Network::with_activation(descriptor, activation, rng)
    }

    /// Builds a network whose nodes share a caller-supplied activation.
    pub fn with_activation(
        descriptor: &NetworkDescriptor,
        activation: Arc<dyn ActivationFunction>,
        rng: &mut RandomWeight,
    ) -> Result<Network> {
        descriptor.validate()?;

        let mut network = Network { layers: Vec::new(), weights: Vec::new() };
        for size in descriptor.layer_sizes() {
            let layer = Layer::new(size, Arc::clone(&activation), descriptor.learning_rate);
            network.add_layer(layer, rng);
        }

        let weights = non_empty(&descriptor.initial_weights);
        if let Some(values) = weights {
            network.set_weights(values)?;
        }
        let biases = non_empty(&descriptor.biases);
        if let Some(values) = biases {
            network.set_biases(values)?;
        }

        debug!(
            layers = ?descriptor.layer_sizes(),
            edges = network.weights.len(),
            explicit_weights = weights.is_some(),
            explicit_biases = biases.is_some(),
            "built network"
        );
        Ok(network)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(|layer| layer.len()).collect()
    }

    /// The edge arena, indexed by `WeightId`.
    pub fn edges(&self) -> &[Weight] {
        &self.weights
    }

    pub fn input_layer(&self) -> &Layer {
        &self.layers[0]
    }

    pub fn output_layer(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }

    /// Flat weight values: layer by layer, node by node, outgoing edges in
    /// child order.
    pub fn weights(&self) -> Vec<f64> {
        self.layers.iter().flat_map(|layer| layer.weights(&self.weights)).collect()
    }

    /// Gradients from the last backward pass, in `weights()` order.
    pub fn gradients(&self) -> Vec<f64> {
        self.layers.iter().flat_map(|layer| layer.gradients(&self.weights)).collect()
    }

    /// Loads weight values in `weights()` order. Surplus values are ignored;
    /// a short list is rejected before anything is written.
    pub fn set_weights(&mut self, values: &[f64]) -> Result<()> {
        let mut reader = ListReader::new("weights", values, self.weights.len())?;
        for layer in &self.layers {
            layer.set_weights(&mut self.weights, &mut reader);
        }
        if reader.consumed() < values.len() {
            debug!(surplus = values.len() - reader.consumed(), "unused weight values ignored");
        }
        Ok(())
    }

    /// Input nodes never carry a bias.
    fn set_biases(&mut self, values: &[f64]) -> Result<()> {
        let needed = self.layers[1..].iter().map(|layer| layer.len()).sum();
        let mut reader = ListReader::new("biases", values, needed)?;
        for layer in &mut self.layers[1..] {
            layer.set_biases(&mut reader);
        }
        Ok(())
    }

    pub fn set_input(&mut self, values: &[f64]) -> Result<()> {
        self.layers[0].set_input(values).map_err(|err| {
            debug!(%err, "input rejected");
            err
        })
    }

    /// Evaluates layers from input to output; each reads the outputs its
    /// predecessor just produced.
    pub fn forward_propagate(&mut self) {
        for i in 0..self.layers.len() {
            let (before, rest) = self.layers.split_at_mut(i);
            rest[0].forward_propagate(before.last(), &self.weights);
        }
    }

    pub fn output(&self) -> Vec<f64> {
        self.output_layer().output()
    }

    /// Half the summed squared error of the output layer, or `None` when
    /// `expected` does not match its width.
    pub fn current_error(&self, expected: &[f64]) -> Option<f64> {
        self.output_layer().current_error(expected)
    }

    pub fn set_error_terms_from_expected(&mut self, expected: &[f64]) -> Result<()> {
        let last = self.layers.len() - 1;
        self.layers[last].set_error_terms_from_expected(expected).map_err(|err| {
            debug!(%err, "expected values rejected");
            err
        })
    }

    /// Evaluates layers from output to input. A layer reads the error terms
    /// and pre-activations its successor has already finalized.
    pub fn backward_propagate(&mut self) {
        for i in (0..self.layers.len()).rev() {
            let (before, rest) = self.layers.split_at_mut(i);
            if let Some((current, after)) = rest.split_first_mut() {
                current.backward_propagate(before.last(), after.first(), &mut self.weights);
            }
        }
    }

    pub fn update_weights(&mut self) {
        for layer in &self.layers {
            layer.update_weights(&mut self.weights);
        }
    }

    fn add_layer(&mut self, mut layer: Layer, rng: &mut RandomWeight) {
        let index = self.layers.len();
        if let Some(parent) = self.layers.last_mut() {
            layer.link_to_layer(index, parent, &mut self.weights, rng);
        }
        self.layers.push(layer);
    }
}

fn non_empty(list: &Option<Vec<f64>>) -> Option<&[f64]> {
    list.as_deref().filter(|values| !values.is_empty())
}
