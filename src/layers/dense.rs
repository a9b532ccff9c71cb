use std::sync::Arc;

use crate::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::graph::{Node, NodeId, Weight, WeightId};
use crate::network::list_reader::ListReader;
use crate::rng::RandomWeight;

/// A fixed-size, ordered set of nodes sharing one activation function and
/// learning rate. Every operation is delegated to the nodes in order.
#[derive(Debug, Clone)]
pub struct Layer {
    nodes: Vec<Node>,
    activation: Arc<dyn ActivationFunction>,
    learning_rate: f64,
}

impl Layer {
    pub fn new(size: usize, activation: Arc<dyn ActivationFunction>, learning_rate: f64) -> Layer {
        Layer {
            nodes: (0..size).map(|_| Node::new()).collect(),
            activation,
            learning_rate,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn activation(&self) -> &dyn ActivationFunction {
        self.activation.as_ref()
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Number of outgoing edges across all nodes.
    pub fn weight_count(&self) -> usize {
        self.nodes.iter().map(|node| node.children().len()).sum()
    }

    pub(crate) fn set_biases(&mut self, biases: &mut ListReader<'_>) {
        for node in &mut self.nodes {
            node.set_bias(biases.next_value());
        }
    }

    /// Outgoing edge values, node by node.
    pub fn weights(&self, weights: &[Weight]) -> Vec<f64> {
        self.nodes.iter().flat_map(|node| node.weights(weights)).collect()
    }

    pub fn gradients(&self, weights: &[Weight]) -> Vec<f64> {
        self.nodes.iter().flat_map(|node| node.gradients(weights)).collect()
    }

    pub(crate) fn set_weights(&self, weights: &mut [Weight], values: &mut ListReader<'_>) {
        for node in &self.nodes {
            for id in node.children() {
                weights[id.0].set_value(values.next_value());
            }
        }
    }

    /// Writes outputs directly. A wrong-length vector leaves every node as it was.
    pub fn set_input(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.nodes.len() {
            return Err(NetworkError::DimensionMismatch {
                context: "input layer",
                expected: self.nodes.len(),
                got: values.len(),
            });
        }
        for (node, &value) in self.nodes.iter_mut().zip(values) {
            node.set_external_output(value);
        }
        Ok(())
    }

    pub fn output(&self) -> Vec<f64> {
        self.nodes.iter().map(|node| node.output()).collect()
    }

    pub fn forward_propagate(&mut self, parent: Option<&Layer>, weights: &[Weight]) {
        let activation = self.activation.as_ref();
        for node in &mut self.nodes {
            node.forward_propagate(activation, parent, weights);
        }
    }

    /// `0.5 * Σ (y - t)²`, or `None` if `expected` has the wrong length.
    pub fn current_error(&self, expected: &[f64]) -> Option<f64> {
        if expected.len() != self.nodes.len() {
            return None;
        }
        let sum: f64 = self.nodes.iter()
            .zip(expected)
            .map(|(node, &t)| node.squared_error(t))
            .sum();
        Some(0.5 * sum)
    }

    pub fn set_error_terms_from_expected(&mut self, expected: &[f64]) -> Result<()> {
        if expected.len() != self.nodes.len() {
            return Err(NetworkError::DimensionMismatch {
                context: "output layer",
                expected: self.nodes.len(),
                got: expected.len(),
            });
        }
        for (node, &t) in self.nodes.iter_mut().zip(expected) {
            node.set_error_term_from_expected(t);
        }
        Ok(())
    }

    pub fn backward_propagate(
        &mut self,
        parent: Option<&Layer>,
        child: Option<&Layer>,
        weights: &mut [Weight],
    ) {
        let activation = self.activation.as_ref();
        for node in &mut self.nodes {
            node.backward_propagate(activation, parent, child, weights);
        }
    }

    pub fn update_weights(&self, weights: &mut [Weight]) {
        for node in &self.nodes {
            node.update_weights(weights);
        }
    }

    /// Connects every node of `parent` to every node of this layer.
    ///
    /// Edges are appended to `weights` parent-major, so each parent's
    /// outgoing list ends up in this layer's node order.
    pub(crate) fn link_to_layer(
        &mut self,
        layer_index: usize,
        parent: &mut Layer,
        weights: &mut Vec<Weight>,
        rng: &mut RandomWeight,
    ) {
        for (p, parent_node) in parent.nodes.iter_mut().enumerate() {
            for (c, node) in self.nodes.iter_mut().enumerate() {
                let id = WeightId(weights.len());
                weights.push(Weight::new(
                    NodeId::new(layer_index - 1, p),
                    NodeId::new(layer_index, c),
                    self.learning_rate,
                    rng,
                ));
                parent_node.add_child_weight(id);
                node.add_parent_weight(id);
            }
        }
    }
}
