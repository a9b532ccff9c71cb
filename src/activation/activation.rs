use serde::{Serialize, Deserialize};
use std::fmt::Debug;

/// A pair of pure scalar functions shared by every node of a layer.
///
/// Both methods receive the raw pre-activation `x`. `derivative` must not
/// assume it is handed a cached output.
pub trait ActivationFunction: Debug + Send + Sync {
    fn evaluate(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;
}

/// Built-in element-wise activations, selectable from a `NetworkDescriptor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Activation {
    #[default]
    Sigmoid,
    Tanh,
    ReLU,
    LeakyReLU { alpha: f64 },
    Identity,
}

impl ActivationFunction for Activation {
    fn evaluate(&self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
            Activation::ReLU => if x > 0.0 { x } else { 0.0 },
            Activation::LeakyReLU { alpha } => if x > 0.0 { x } else { alpha * x },
            Activation::Identity => x,
        }
    }

    fn derivative(&self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => {
                let fx = self.evaluate(x);
                fx * (1.0 - fx)
            }
            Activation::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            Activation::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
            Activation::LeakyReLU { alpha } => if x > 0.0 { 1.0 } else { *alpha },
            Activation::Identity => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sigmoid_is_centered_at_half() {
        assert_relative_eq!(Activation::Sigmoid.evaluate(0.0), 0.5);
        assert_relative_eq!(Activation::Sigmoid.derivative(0.0), 0.25);
    }

    #[test]
    fn sigmoid_derivative_uses_pre_activation() {
        let x: f64 = 1.5;
        let s = 1.0 / (1.0 + (-x).exp());
        assert_relative_eq!(Activation::Sigmoid.derivative(x), s * (1.0 - s), epsilon = 1e-15);
    }

    #[test]
    fn derivatives_match_finite_differences() {
        let h = 1e-6;
        for act in [Activation::Sigmoid, Activation::Tanh, Activation::Identity] {
            for &x in &[-2.0, -0.3, 0.7, 3.1] {
                let numeric = (act.evaluate(x + h) - act.evaluate(x - h)) / (2.0 * h);
                assert_relative_eq!(act.derivative(x), numeric, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn leaky_relu_keeps_negative_slope() {
        let act = Activation::LeakyReLU { alpha: 0.1 };
        assert_relative_eq!(act.evaluate(-2.0), -0.2);
        assert_relative_eq!(act.derivative(-2.0), 0.1);
        assert_relative_eq!(Activation::ReLU.derivative(-2.0), 0.0);
    }
}
