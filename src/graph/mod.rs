pub mod node;
pub mod weight;

pub use node::Node;
pub use weight::{NodeId, Weight, WeightId};
