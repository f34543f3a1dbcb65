/*
 * Author: Dylan Turner
 * Description: Helper functions for neuron manipulation
 */

use ndarray::{
    Array1, Array2
};
use ndarray_rand::{
    rand_distr::Normal, RandomExt
};
use rand::Rng;

/*
 * Logistic activation
 * Branch on the sign so exp only ever sees a non-positive argument
 * Otherwise e^-z overflows for very negative z and we end up with inf/inf
 */
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/*
 * A neuron doesn't actually exist, only the connections between them
 * This is the mapping from one layer to the next: out x in weights and out biases
 * Sizes are fixed on creation, nothing here ever resizes them
 */
#[derive(Debug, Clone, PartialEq)]
pub struct NeuronConnectionMap {
    pub weights: Array2<f64>,
    pub biases: Array1<f64>
}

impl NeuronConnectionMap {
    // Weights first, then biases. Keep that order so seeded runs stay reproducible
    pub fn new_random<R: Rng + ?Sized>(
            size: usize, neuron_size: usize, dist: Normal<f64>, rng: &mut R) -> Self {
        let weights = Array2::random_using((size, neuron_size), dist, rng);
        let biases = Array1::random_using(size, dist, rng);
        Self {
            weights,
            biases
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.weights.dim()
    }

    // W.x + b, what the output layer gives back as is
    pub fn weighted_sum(&self, input: &Array1<f64>) -> Array1<f64> {
        self.weights.dot(input) + &self.biases
    }

    // Hidden layers squash the sum
    pub fn layer_activations(&self, input: &Array1<f64>) -> Array1<f64> {
        self.weighted_sum(input).mapv_into(sigmoid)
    }

    // Arithmetic crossover: every connection becomes the mean of both parents
    pub fn average_with(&self, other: &Self) -> Self {
        debug_assert_eq!(self.shape(), other.shape());
        Self {
            weights: (&self.weights + &other.weights) / 2.0,
            biases: (&self.biases + &other.biases) / 2.0
        }
    }

    // With the given chance, shift every weight and bias by gaussian noise
    pub fn mutate<R: Rng + ?Sized>(&mut self, chance: f64, noise: Normal<f64>, rng: &mut R) {
        if rng.gen_bool(chance) {
            let weight_noise = Array2::random_using(self.weights.raw_dim(), noise, rng);
            let bias_noise = Array1::random_using(self.biases.len(), noise, rng);
            self.weights += &weight_noise;
            self.biases += &bias_noise;
        }
    }
}
