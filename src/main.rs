// Step-by-step backpropagation walkthrough on a 2-2-2 sigmoid network.
// Pass the number of iterations as the first argument (default 10).
// The XOR demo lives in demos/:
//   cargo run --example xor
use backprop_nn::{Network, NetworkDescriptor, RandomWeight};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let iterations: usize = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 10,
    };

    let descriptor = NetworkDescriptor::new(3, 2, 0.5)
        .with_output_nodes(2)
        .with_biases(vec![0.35, 0.35, 0.60, 0.60])
        .with_initial_weights(vec![0.15, 0.25, 0.20, 0.30, 0.40, 0.50, 0.45, 0.55]);
    let input = [0.05, 0.10];
    let expected = [0.01, 0.99];

    let mut network = Network::with_rng(&descriptor, &mut RandomWeight::new())?;
    network.set_input(&input)?;

    for i in 1..=iterations {
        network.forward_propagate();
        let error = network.current_error(&expected).unwrap_or(f64::NAN);
        println!("{i} Output: {:?} Error: {error}", network.output());

        network.set_error_terms_from_expected(&expected)?;
        network.backward_propagate();
        network.update_weights();
    }
    println!("Weights: {:?}", network.weights());
    Ok(())
}
