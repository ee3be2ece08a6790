use ferrite_neuron::math::vector;
use ferrite_neuron::{ActivationCost, ActivationFunction, Logarithmic, Matrix, Neuron, Quadratic};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOLERANCE: f64 = 1e-4;

fn random_problem(rng: &mut StdRng, m: usize, n: usize) -> (Matrix, Vec<f64>, Vec<f64>) {
    let rows = (0..m)
        .map(|_| {
            let mut row = vec![1.0];
            row.extend((0..n).map(|_| rng.gen_range(-2.0..2.0)));
            row
        })
        .collect();
    let labels = (0..m).map(|_| if rng.gen::<bool>() { 1.0 } else { 0.0 }).collect();
    let weights = (0..=n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    (Matrix::from_rows(rows).unwrap(), labels, weights)
}

fn gradient_gap<C: ActivationCost>(neuron: &mut Neuron<C>, x: &Matrix, y: &[f64]) -> f64 {
    let analytic = neuron.compute_grad_analytically(x, y).unwrap();
    let numeric = neuron.compute_grad_numerically(x, y, 1e-5).unwrap();
    let diff: Vec<f64> = analytic.iter().zip(&numeric).map(|(a, b)| a - b).collect();
    vector::l2_norm(&diff)
}

#[test]
fn quadratic_sigmoid_gradients_agree() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..10 {
        let (x, y, w) = random_problem(&mut rng, 12, 4);
        let mut neuron = Neuron::new(w, Quadratic::default());
        assert!(gradient_gap(&mut neuron, &x, &y) < TOLERANCE);
    }
}

#[test]
fn quadratic_identity_and_tanh_gradients_agree() {
    let mut rng = StdRng::seed_from_u64(23);
    for activation in [ActivationFunction::Identity, ActivationFunction::Tanh] {
        let (x, y, w) = random_problem(&mut rng, 8, 3);
        let mut neuron = Neuron::new(w, Quadratic::new(activation));
        assert!(gradient_gap(&mut neuron, &x, &y) < TOLERANCE);
    }
}

#[test]
fn logarithmic_gradients_agree() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..10 {
        let (x, y, w) = random_problem(&mut rng, 12, 4);
        let mut neuron = Neuron::new(w, Logarithmic);
        assert!(gradient_gap(&mut neuron, &x, &y) < TOLERANCE);
    }
}

#[test]
fn numeric_gradient_restores_weights_bit_for_bit() {
    let mut rng = StdRng::seed_from_u64(31);
    let (x, y, w) = random_problem(&mut rng, 6, 5);
    let mut neuron = Neuron::new(w.clone(), Logarithmic);
    neuron.compute_grad_numerically(&x, &y, 1e-3).unwrap();
    let before: Vec<u64> = w.iter().map(|v| v.to_bits()).collect();
    let after: Vec<u64> = neuron.weights().iter().map(|v| v.to_bits()).collect();
    assert_eq!(before, after);
}

#[test]
fn weight_count_must_match_columns() {
    let x = Matrix::from_data(vec![vec![1.0, 0.5], vec![1.0, -0.5]]);
    let mut neuron = Neuron::new(vec![0.0, 0.0, 0.0], Quadratic::default());
    assert!(neuron.compute_grad_analytically(&x, &[0.0, 1.0]).is_err());
    assert!(neuron.compute_grad_numerically(&x, &[0.0, 1.0], 1e-4).is_err());
}
