use ferrite_neuron::{train_neuron, GdConfig, Logarithmic, Matrix, Neuron, Perceptron};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> ferrite_neuron::Result<()> {
    env_logger::init();

    let inputs = Matrix::from_rows(vec![
        vec![1.0, 0.0, 0.0],
        vec![1.0, 0.0, 1.0],
        vec![1.0, 1.0, 0.0],
        vec![1.0, 1.0, 1.0],
    ])?;
    let gates = [
        ("AND", vec![0.0, 0.0, 0.0, 1.0]),
        ("OR", vec![0.0, 1.0, 1.0, 1.0]),
        ("XOR", vec![0.0, 1.0, 1.0, 0.0]),
    ];

    let mut rng = StdRng::seed_from_u64(2024);
    for (name, labels) in &gates {
        let mut perceptron = Perceptron::random(2, &mut rng);
        let mut errors = Vec::new();
        let converged = perceptron.train_until_convergence(&inputs, labels, &mut errors, 100)?;
        println!(
            "perceptron {name}: converged = {converged}, epochs = {}, weights = {:?}",
            errors.len() - 1,
            perceptron.weights()
        );
    }

    let config = GdConfig::new(4, 2.0, 1e-5, 50_000).with_seed(2024);
    for (name, labels) in &gates {
        let mut neuron = Neuron::new(vec![0.0; 3], Logarithmic);
        let report = train_neuron(&mut neuron, &inputs, labels, &config)?;
        println!(
            "neuron {name}: converged = {}, steps = {}, cost = {:.6}",
            report.converged, report.steps, report.final_cost
        );
        for i in 0..inputs.rows {
            println!("  {:?} -> {:.4}", &inputs.row(i)[1..], neuron.forward_pass(inputs.row(i))?);
        }
    }

    Ok(())
}
