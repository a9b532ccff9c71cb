pub mod random_weight;

pub use random_weight::RandomWeight;
