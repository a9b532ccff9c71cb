/// Squared-error loss of a single output node.
///
/// The network error is `0.5 * Σ (y - t)²`, so the ½ cancels in the
/// derivative and dE/dy is simply `y - t`.
pub struct SquaredError;

impl SquaredError {
    /// `(predicted - expected)²`; the ½ is applied by the caller once per layer.
    pub fn loss(predicted: f64, expected: f64) -> f64 {
        (predicted - expected) * (predicted - expected)
    }

    /// dE/dy of one output node.
    pub fn derivative(predicted: f64, expected: f64) -> f64 {
        predicted - expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn loss_is_symmetric() {
        assert_relative_eq!(SquaredError::loss(0.75, 0.25), 0.25);
        assert_relative_eq!(SquaredError::loss(0.25, 0.75), 0.25);
    }

    #[test]
    fn derivative_of_half_loss() {
        let (y, t, h) = (0.7513650695523157, 0.01, 1e-6);
        let half_loss = |y: f64| 0.5 * SquaredError::loss(y, t);
        let numeric = (half_loss(y + h) - half_loss(y - h)) / (2.0 * h);
        assert_relative_eq!(SquaredError::derivative(y, t), numeric, epsilon = 1e-8);
    }
}
