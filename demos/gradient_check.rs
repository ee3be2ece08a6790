use ferrite_neuron::math::vector;
use ferrite_neuron::{ActivationCost, ActivationFunction, Logarithmic, Matrix, Neuron, Quadratic};

fn report<C: ActivationCost>(name: &str, neuron: &mut Neuron<C>, x: &Matrix, y: &[f64]) -> ferrite_neuron::Result<()> {
    let analytic = neuron.compute_grad_analytically(x, y)?;
    let numeric = neuron.compute_grad_numerically(x, y, 1e-5)?;
    let diff: Vec<f64> = analytic.iter().zip(&numeric).map(|(a, b)| a - b).collect();
    println!("{name}");
    println!("  analytic: {analytic:?}");
    println!("  numeric:  {numeric:?}");
    println!("  |diff|:   {:e}", vector::l2_norm(&diff));
    Ok(())
}

fn main() -> ferrite_neuron::Result<()> {
    env_logger::init();

    let x = Matrix::from_rows(vec![
        vec![1.0, 0.3, -1.2],
        vec![1.0, -0.8, 0.5],
        vec![1.0, 1.7, 0.9],
        vec![1.0, 0.0, -0.4],
    ])?;
    let y = [1.0, 0.0, 1.0, 0.0];
    let w = vec![0.2, -0.5, 0.7];

    report("quadratic / sigmoid", &mut Neuron::new(w.clone(), Quadratic::default()), &x, &y)?;
    report(
        "quadratic / tanh",
        &mut Neuron::new(w.clone(), Quadratic::new(ActivationFunction::Tanh)),
        &x,
        &y,
    )?;
    report("logarithmic", &mut Neuron::new(w, Logarithmic), &x, &y)?;

    Ok(())
}
