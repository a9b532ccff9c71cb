use crate::error::{NetworkError, Result};
use crate::network::network::Network;

/// Runs one complete training step on a single sample and returns the error
/// measured after the forward pass, before the weights move.
///
/// A wrong-length input or expected vector is rejected before any node or
/// weight is touched.
pub fn train_step(network: &mut Network, input: &[f64], expected: &[f64]) -> Result<f64> {
    check_sample(network, input, expected)?;

    network.set_input(input)?;
    network.forward_propagate();
    let error = network.current_error(expected).ok_or_else(|| NetworkError::DimensionMismatch {
        context: "expected values",
        expected: network.output_layer().len(),
        got: expected.len(),
    })?;

    network.set_error_terms_from_expected(expected)?;
    network.backward_propagate();
    network.update_weights();
    Ok(error)
}

/// One epoch of online gradient descent over paired samples, in order.
/// Returns the summed per-sample error.
///
/// Every sample is checked before training starts, so a malformed one leaves
/// the network untouched.
pub fn train_network(
    network: &mut Network,
    inputs: &[Vec<f64>],
    expected_outputs: &[Vec<f64>],
) -> Result<f64> {
    if inputs.len() != expected_outputs.len() {
        return Err(NetworkError::DimensionMismatch {
            context: "training set",
            expected: inputs.len(),
            got: expected_outputs.len(),
        });
    }
    for (input, expected) in inputs.iter().zip(expected_outputs) {
        check_sample(network, input, expected)?;
    }

    let mut total_error = 0.0;
    for (input, expected) in inputs.iter().zip(expected_outputs) {
        total_error += train_step(network, input, expected)?;
    }
    Ok(total_error)
}

fn check_sample(network: &Network, input: &[f64], expected: &[f64]) -> Result<()> {
    let input_width = network.input_layer().len();
    if input.len() != input_width {
        return Err(NetworkError::DimensionMismatch {
            context: "input layer",
            expected: input_width,
            got: input.len(),
        });
    }
    let output_width = network.output_layer().len();
    if expected.len() != output_width {
        return Err(NetworkError::DimensionMismatch {
            context: "expected values",
            expected: output_width,
            got: expected.len(),
        });
    }
    Ok(())
}
