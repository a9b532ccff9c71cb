use crate::rng::RandomWeight;

/// Position of a node: layer index, then index within that layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub layer: usize,
    pub index: usize,
}

impl NodeId {
    pub fn new(layer: usize, index: usize) -> NodeId {
        NodeId { layer, index }
    }
}

/// Index of a weight in the network's edge arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightId(pub usize);

/// A directed edge from a parent node to a child node in the next layer.
///
/// Endpoints are fixed when the edge is created. Only `value` and `gradient`
/// change afterwards.
#[derive(Debug, Clone)]
pub struct Weight {
    value: f64,
    gradient: f64,
    learning_rate: f64,
    parent: NodeId,
    child: NodeId,
}

impl Weight {
    /// Links `parent -> child` with a value drawn from `[0, 1)`.
    pub fn new(
        parent: NodeId,
        child: NodeId,
        learning_rate: f64,
        rng: &mut RandomWeight,
    ) -> Weight {
        Weight {
            value: rng.next_weight(),
            gradient: 0.0,
            learning_rate,
            parent,
            child,
        }
    }

    pub fn parent(&self) -> NodeId {
        self.parent
    }

    pub fn child(&self) -> NodeId {
        self.child
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// dE/dw from the last backward pass.
    pub fn gradient(&self) -> f64 {
        self.gradient
    }

    pub fn set_gradient(&mut self, gradient: f64) {
        self.gradient = gradient;
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// One gradient-descent step: `value -= gradient * learning_rate`.
    pub fn update(&mut self) {
        self.value -= self.gradient * self.learning_rate;
    }
}
