/*
 * Author: Dylan Turner
 * Description: Helper functions for performing the genetic algorithm
 */

use std::{
    fmt, sync::Arc
};
use futures::future::try_join_all;
use log::debug;
use ndarray_rand::rand_distr::Normal;
use rand::Rng;
use tokio::{
    spawn, task::JoinHandle
};
use crate::{
    config::INIT_STD,
    data::DataSet,
    error::{
        Error, Result
    }, network::Network,
    topology::Topology
};

/// A network plus how well it did last time it was tested (lower is better)
#[derive(Debug, Clone)]
pub struct Individual {
    pub network: Network,
    pub fitness: f64
}

impl Individual {
    // Untested until proven otherwise
    pub fn new(network: Network) -> Self {
        Self {
            network,
            fitness: f64::INFINITY
        }
    }

    pub fn new_random<R: Rng + ?Sized>(topology: &Topology, rng: &mut R) -> Result<Self> {
        Ok(Self::new(Network::new_random(topology, normal(INIT_STD)?, rng)))
    }
}

/// Best fitness seen in a generation, before that generation got mutated
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationReport {
    pub generation: usize,
    pub best_fitness: f64
}

// Exact line the trainer prints for a report
impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Train error @{}]: {}", self.generation, self.best_fitness)
    }
}

// Zero mean noise with the given spread
pub fn normal(std_dev: f64) -> Result<Normal<f64>> {
    Normal::new(0.0, std_dev).map_err(|err| {
        Error::Config(format!("bad noise deviation {}: {}", std_dev, err))
    })
}

/// Generate starting batch
pub fn gen_pop<R: Rng + ?Sized>(
        popsize: usize, topology: &Topology, rng: &mut R) -> Result<Vec<Individual>> {
    (0..popsize).map(|_| Individual::new_random(topology, rng)).collect()
}

// The fitness function: mean squared error over the whole set
pub fn mean_squared_error(network: &Network, data_set: &DataSet) -> Result<f64> {
    data_set.require_records("evaluation")?;
    let sum: f64 = data_set.records.iter().map(|record| {
        let diff = record.target - network.result(&record.features);
        diff * diff
    }).sum();
    Ok(sum / data_set.len() as f64)
}

/*
 * Test the whole population on the data
 * Each individual is independent, so each gets its own task
 * All of them finish before anything gets sorted
 */
pub async fn test_all(pop: &mut [Individual], data_set: &Arc<DataSet>) -> Result<()> {
    data_set.require_records("training")?;

    let handles: Vec<JoinHandle<Result<f64>>> = pop.iter().map(|ind| {
        let network = ind.network.clone();
        let data_set = Arc::clone(data_set);
        spawn(async move {
            mean_squared_error(&network, &data_set)
        })
    }).collect();
    let results = try_join_all(handles).await?;

    for (ind, res) in pop.iter_mut().zip(results) {
        ind.fitness = res?;
    }
    Ok(())
}

// Test the population on the data and sort, best first
pub async fn test_and_sort(pop: &mut Vec<Individual>, data_set: &Arc<DataSet>) -> Result<()> {
    test_all(pop, data_set).await?;
    pop.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));
    Ok(())
}

/*
 * Build the next generation from a sorted population
 * Elites are copied over as they are, but have to be tested again
 * The rest are averages of two random parents. The first comes from the old generation,
 * the second can also be anything already put in the new one, elites and fresh children alike
 * That second parent rule is intentional and should stay, it's not a typo for sorted-only
 */
pub fn reproduce<R: Rng + ?Sized>(
        sorted: &[Individual], popsize: usize, elitism: usize, rng: &mut R) -> Vec<Individual> {
    let mut next_gen: Vec<Individual> = sorted.iter().take(elitism).map(|elite| {
        Individual::new(elite.network.clone())
    }).collect();

    if sorted.is_empty() {
        return next_gen;
    }
    while next_gen.len() < popsize {
        let parent1 = &sorted[rng.gen_range(0..sorted.len())];
        let choice = rng.gen_range(0..sorted.len() + next_gen.len());
        let parent2 = if choice < sorted.len() {
            &sorted[choice]
        } else {
            &next_gen[choice - sorted.len()]
        };

        let child = Individual::new(parent1.network.crossover(&parent2.network));
        next_gen.push(child);
    }
    next_gen
}

// Everyone gets a shot at mutating, elites included
pub fn mutate_all<R: Rng + ?Sized>(
        pop: &mut [Individual], chance: f64, noise: Normal<f64>, rng: &mut R) {
    for ind in pop.iter_mut() {
        ind.network.mutate(chance, noise, rng);
    }
}

/// Operator settings that stay fixed for the whole run
#[derive(Debug, Clone, Copy)]
pub struct Evolution {
    pub popsize: usize,
    pub elitism: usize,
    pub mutation_chance: f64,
    pub noise: Normal<f64>
}

impl Evolution {
    pub fn new(popsize: usize, elitism: usize, mutation_chance: f64, mutation_std: f64) -> Result<Self> {
        Ok(Self {
            popsize,
            elitism,
            mutation_chance,
            noise: normal(mutation_std)?
        })
    }

    /*
     * One generation: test, sort, keep elites, breed, mutate, replace
     * Reports the best fitness found while testing, before any mutation
     */
    pub async fn step<R: Rng + ?Sized>(
            &self, generation: usize, pop: &mut Vec<Individual>,
            data_set: &Arc<DataSet>, rng: &mut R) -> Result<GenerationReport> {
        test_and_sort(pop, data_set).await?;
        let report = GenerationReport {
            generation,
            best_fitness: pop.first().map(|ind| ind.fitness).unwrap_or(f64::INFINITY)
        };
        debug!("Generation {} best: {}", generation, report.best_fitness);

        let mut next_gen = reproduce(pop, self.popsize, self.elitism, rng);
        mutate_all(&mut next_gen, self.mutation_chance, self.noise, rng);
        *pop = next_gen;

        Ok(report)
    }
}
