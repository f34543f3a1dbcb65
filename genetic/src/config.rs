// Author: Dylan Turner <dylan.turner@tutanota.com>
//! Settings for a training run, checked before any generation runs

use crate::{
    error::{
        Error, Result
    }, topology::Preset
};

/// Generations between train error reports
pub const REPORT_INTERVAL: usize = 2000;

/// Standard deviation of the initial weights and biases
pub const INIT_STD: f64 = 0.01;

#[derive(Clone, Debug)]
pub struct TrainConfig {
    pub preset: Preset,
    pub popsize: usize,

    /// Best individuals copied unchanged into the next generation
    pub elitism: usize,

    /// Chance for each layer to get noise added during mutation (p)
    pub mutation_chance: f64,

    /// Standard deviation of the mutation noise (K)
    pub mutation_std: f64,

    pub iterations: usize,
    pub report_interval: usize,

    /// Fixed seed for reproducible runs, random when None
    pub seed: Option<u64>
}

impl TrainConfig {
    pub fn new(
            preset: Preset, popsize: usize, elitism: usize,
            mutation_chance: f64, mutation_std: f64, iterations: usize) -> Self {
        Self {
            preset,
            popsize,
            elitism,
            mutation_chance,
            mutation_std,
            iterations,
            report_interval: REPORT_INTERVAL,
            seed: None
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_report_interval(mut self, interval: usize) -> Self {
        self.report_interval = interval;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.popsize < 1 {
            return Err(Error::Config("popsize must be at least 1".into()));
        }
        if self.elitism > self.popsize {
            return Err(Error::Config(format!(
                "elitism ({}) can't be larger than popsize ({})", self.elitism, self.popsize
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_chance) {
            return Err(Error::Config(format!(
                "mutation chance p must be within [0, 1], got {}", self.mutation_chance
            )));
        }
        if !self.mutation_std.is_finite() || self.mutation_std < 0.0 {
            return Err(Error::Config(format!(
                "mutation deviation K must be a finite number >= 0, got {}", self.mutation_std
            )));
        }
        if self.report_interval < 1 {
            return Err(Error::Config("report interval must be at least 1".into()));
        }
        Ok(())
    }
}
