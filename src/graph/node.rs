use crate::activation::ActivationFunction;
use crate::graph::weight::{Weight, WeightId};
use crate::layers::dense::Layer;
use crate::loss::SquaredError;

/// A single neuron.
///
/// Edges are stored as ids into the network's weight arena. `parents` are the
/// incoming edges from the previous layer, `children` the outgoing edges to
/// the next one. The activation function and learning rate belong to the
/// owning `Layer`.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pre_activation: f64,
    output: f64,
    bias: f64,
    error_term: f64,
    parents: Vec<WeightId>,
    children: Vec<WeightId>,
}

impl Node {
    pub fn new() -> Node {
        Node::default()
    }

    /// Pre-activation `x`: bias plus the weighted sum of parent outputs.
    pub fn pre_activation(&self) -> f64 {
        self.pre_activation
    }

    pub fn output(&self) -> f64 {
        self.output
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }

    /// dE/dy as of the last error or backward step.
    pub fn error_term(&self) -> f64 {
        self.error_term
    }

    pub fn parents(&self) -> &[WeightId] {
        &self.parents
    }

    pub fn children(&self) -> &[WeightId] {
        &self.children
    }

    pub(crate) fn add_parent_weight(&mut self, id: WeightId) {
        self.parents.push(id);
    }

    pub(crate) fn add_child_weight(&mut self, id: WeightId) {
        self.children.push(id);
    }

    /// Overwrites the output directly. Only meaningful on input nodes.
    pub fn set_external_output(&mut self, value: f64) {
        self.output = value;
    }

    /// Recomputes `x` and `y` from the parent layer's current outputs.
    /// Input nodes keep their externally supplied output.
    pub fn forward_propagate(
        &mut self,
        activation: &dyn ActivationFunction,
        parent: Option<&Layer>,
        weights: &[Weight],
    ) {
        let parent = match parent {
            Some(parent) if !self.parents.is_empty() => parent,
            _ => return,
        };
        let mut x = 0.0;
        for id in &self.parents {
            let weight = &weights[id.0];
            x += weight.value() * parent.nodes()[weight.parent().index].output();
        }
        self.pre_activation = x + self.bias;
        self.output = activation.evaluate(self.pre_activation);
    }

    pub fn squared_error(&self, expected: f64) -> f64 {
        SquaredError::loss(self.output, expected)
    }

    /// Seeds dE/dy on an output node. Must run before any backward step.
    pub fn set_error_term_from_expected(&mut self, expected: f64) {
        self.error_term = SquaredError::derivative(self.output, expected);
    }

    /// Applies the chain rule around this node.
    ///
    /// With children, the error term is rebuilt from the child layer:
    /// `dE/dy = Σ w · f'(x_c) · dE/dy_c`. This replaces any value set from an
    /// expected vector. Then every incoming edge receives
    /// `dE/dw = y_p · f'(x) · dE/dy`.
    pub fn backward_propagate(
        &mut self,
        activation: &dyn ActivationFunction,
        parent: Option<&Layer>,
        child: Option<&Layer>,
        weights: &mut [Weight],
    ) {
        if let Some(child) = child {
            if !self.children.is_empty() {
                let child_activation = child.activation();
                let mut error_term = 0.0;
                for id in &self.children {
                    let weight = &weights[id.0];
                    let child_node = &child.nodes()[weight.child().index];
                    error_term += weight.value()
                        * child_activation.derivative(child_node.pre_activation())
                        * child_node.error_term();
                }
                self.error_term = error_term;
            }
        }

        if let Some(parent) = parent {
            let slope = activation.derivative(self.pre_activation);
            for id in &self.parents {
                let weight = &mut weights[id.0];
                let parent_output = parent.nodes()[weight.parent().index].output();
                weight.set_gradient(parent_output * slope * self.error_term);
            }
        }
    }

    /// Steps every outgoing edge. Each edge has exactly one parent, so
    /// calling this on every node updates every weight once.
    pub fn update_weights(&self, weights: &mut [Weight]) {
        for id in &self.children {
            weights[id.0].update();
        }
    }

    /// Outgoing edge values, in child order.
    pub fn weights(&self, weights: &[Weight]) -> Vec<f64> {
        self.children.iter().map(|id| weights[id.0].value()).collect()
    }

    pub fn gradients(&self, weights: &[Weight]) -> Vec<f64> {
        self.children.iter().map(|id| weights[id.0].gradient()).collect()
    }
}
