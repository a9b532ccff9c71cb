use backprop_nn::{train_loop, Network, NetworkDescriptor, TrainConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // input, two hidden layers of 2, one output
    let descriptor = NetworkDescriptor::new(4, 2, 0.5).with_output_nodes(1);
    let mut network = Network::new(&descriptor)?;

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let expected_outputs = vec![
        vec![0.0],
        vec![1.0],
        vec![1.0],
        vec![0.0],
    ];

    let initial_weights = network.weights();
    let config = TrainConfig::new(100_000).with_report_every(10_000);
    let history = train_loop(&mut network, &inputs, &expected_outputs, &config)?;

    for input in &inputs {
        network.set_input(input)?;
        network.forward_propagate();
        println!("Input: {:?} -> Output: {:.4}", input, network.output()[0]);
    }
    if let Some(last) = history.last() {
        println!("Final epoch error: {:.6}", last.error);
    }
    // Biases are never trained, so some random starts settle in a local minimum.
    println!("Initial weights: {:?}", initial_weights);
    println!("Weights: {:?}", network.weights());
    Ok(())
}
