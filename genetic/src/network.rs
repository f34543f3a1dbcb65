/*
 * Author: Dylan Turner
 * Description: Neural Network that gets evolved to fit a data set
 */

use ndarray::Array1;
use ndarray_rand::rand_distr::Normal;
use rand::Rng;
use crate::{
    neuron::NeuronConnectionMap, topology::Topology
};

/*
 * One full set of parameters. Hidden maps use a sigmoid, the last one is linear
 * so the output isn't bounded to (0, 1)
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub maps: Vec<NeuronConnectionMap>
}

impl Network {
    // Every weight and bias drawn from the given distribution, layer by layer
    pub fn new_random<R: Rng + ?Sized>(topology: &Topology, dist: Normal<f64>, rng: &mut R) -> Self {
        Self {
            maps: topology.shapes().map(|(size, neuron_size)| {
                NeuronConnectionMap::new_random(size, neuron_size, dist, rng)
            }).collect()
        }
    }

    pub fn shapes(&self) -> Vec<(usize, usize)> {
        self.maps.iter().map(NeuronConnectionMap::shape).collect()
    }

    /*
     * Forward pass, gives the single output value
     * Networks come from a Topology, which always has at least the output map
     */
    pub fn result(&self, input: &Array1<f64>) -> f64 {
        debug_assert!(!self.maps.is_empty(), "network has no connection maps");
        let (output_map, hidden_maps) = match self.maps.split_last() {
            Some(split) => split,
            None => return f64::NAN
        };
        let hidden = hidden_maps.iter().fold(input.clone(), |x, map| map.layer_activations(&x));
        output_map.weighted_sum(&hidden)[0]
    }

    // Child is the mean of both parents, map by map
    pub fn crossover(&self, other: &Self) -> Self {
        Self {
            maps: self.maps.iter().zip(other.maps.iter()).map(|(map, other_map)| {
                map.average_with(other_map)
            }).collect()
        }
    }

    // Every map decides on its own whether it gets noise
    pub fn mutate<R: Rng + ?Sized>(&mut self, chance: f64, noise: Normal<f64>, rng: &mut R) {
        for map in self.maps.iter_mut() {
            map.mutate(chance, noise, rng);
        }
    }
}
