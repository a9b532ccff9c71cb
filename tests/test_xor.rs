// XOR convergence on a 2-2-2-1 sigmoid network trained one sample at a time.

use backprop_nn::{
    train_loop, train_network, train_step, Network, NetworkDescriptor, NetworkError, RandomWeight,
    TrainConfig,
};

// Outputs and pre-activations of every node, plus every weight value.
fn snapshot(network: &Network) -> (Vec<Vec<(f64, f64)>>, Vec<f64>) {
    let nodes = network
        .layers()
        .iter()
        .map(|l| l.nodes().iter().map(|n| (n.output(), n.pre_activation())).collect())
        .collect();
    (nodes, network.weights())
}

fn xor_set() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let expected = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
    (inputs, expected)
}

// Biases stay at zero and are never trained, so convergence depends on the
// starting point. This one is known to reach the global minimum.
fn xor_network() -> Network {
    let descriptor = NetworkDescriptor::new(4, 2, 0.5)
        .with_output_nodes(1)
        .with_initial_weights(vec![0.24, 0.54, 0.37, 0.6, 0.63, 0.07, 0.01, 0.84, 0.26, 0.23]);
    Network::with_rng(&descriptor, &mut RandomWeight::seeded(0)).unwrap()
}

#[test]
fn test_xor_converges() {
    let (inputs, expected) = xor_set();
    let mut network = xor_network();

    let history = train_loop(&mut network, &inputs, &expected, &TrainConfig::new(10_000)).unwrap();
    assert_eq!(history.len(), 10_000);
    assert_eq!(history[0].epoch, 1);

    let first = history[0].error;
    let last = history[history.len() - 1].error;
    assert!(last < first, "{last} !< {first}");
    assert!(last < 0.05, "final epoch error {last}");

    for (input, target) in inputs.iter().zip(&expected) {
        network.set_input(input).unwrap();
        network.forward_propagate();
        assert!((network.output()[0] - target[0]).abs() < 0.2);
    }
}

#[test]
fn test_train_network_sums_sample_errors() {
    let (inputs, expected) = xor_set();
    let mut stepped = xor_network();
    let mut batched = xor_network();

    let mut total = 0.0;
    for (input, target) in inputs.iter().zip(&expected) {
        total += train_step(&mut stepped, input, target).unwrap();
    }
    let epoch_error = train_network(&mut batched, &inputs, &expected).unwrap();

    assert_eq!(epoch_error, total);
    assert_eq!(stepped.weights(), batched.weights());
}

#[test]
fn test_mismatched_training_set() {
    let (inputs, _) = xor_set();
    let mut network = xor_network();
    let before = network.weights();

    let err = train_network(&mut network, &inputs, &[vec![0.0]]).unwrap_err();
    assert!(matches!(err, NetworkError::DimensionMismatch { .. }));

    let err = train_step(&mut network, &[0.0, 1.0], &[1.0, 0.0]).unwrap_err();
    assert!(matches!(err, NetworkError::DimensionMismatch { expected: 1, got: 2, .. }));
    assert_eq!(network.weights(), before);
}

#[test]
fn test_bad_expected_leaves_step_untouched() {
    let mut network = xor_network();
    network.set_input(&[0.3, 0.4]).unwrap();
    network.forward_propagate();
    let before = snapshot(&network);

    let err = train_step(&mut network, &[0.9, 0.9], &[1.0, 0.0]).unwrap_err();
    assert!(matches!(err, NetworkError::DimensionMismatch { expected: 1, got: 2, .. }));
    let err = train_step(&mut network, &[0.9, 0.9, 0.9], &[1.0]).unwrap_err();
    assert!(matches!(err, NetworkError::DimensionMismatch { expected: 2, got: 3, .. }));

    assert_eq!(snapshot(&network), before);
}

#[test]
fn test_malformed_later_sample_trains_nothing() {
    let mut network = xor_network();
    network.set_input(&[0.3, 0.4]).unwrap();
    network.forward_propagate();
    let before = snapshot(&network);

    let inputs = vec![vec![0.0, 1.0], vec![1.0, 0.0, 5.0]];
    let expected = vec![vec![1.0], vec![1.0]];
    let err = train_network(&mut network, &inputs, &expected).unwrap_err();
    assert!(matches!(err, NetworkError::DimensionMismatch { expected: 2, got: 3, .. }));
    assert_eq!(snapshot(&network), before);

    let expected = vec![vec![1.0], vec![1.0, 0.0]];
    let inputs = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
    let err = train_loop(&mut network, &inputs, &expected, &TrainConfig::new(3)).unwrap_err();
    assert!(matches!(err, NetworkError::DimensionMismatch { expected: 1, got: 2, .. }));
    assert_eq!(snapshot(&network), before);
}
