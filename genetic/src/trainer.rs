// Author: Dylan Turner <dylan.turner@tutanota.com>
//! Drives the generational loop from a random population to a tested best network

use std::{
    fmt, sync::Arc, time::Instant
};
use log::{
    debug, info
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use crate::{
    config::TrainConfig,
    data::DataSet,
    error::{
        Error, Result
    }, genetic::{
        gen_pop, mean_squared_error, test_all, Evolution, GenerationReport, Individual
    }, topology::Topology
};

/// What a finished run hands back
#[derive(Debug, Clone)]
pub struct TrainingSummary {
    /// Lowest training error in the final population
    pub best: Individual,
    pub test_error: f64,

    /// One entry per report interval
    pub reports: Vec<GenerationReport>
}

// Exact line printed once a run is done
impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Test error]: {}", self.test_error)
    }
}

pub struct Trainer {
    config: TrainConfig,
    topology: Topology,
    evolution: Evolution,
    rng: ChaCha8Rng
}

impl Trainer {
    /// Fails on a bad config before any work is done
    pub fn new(config: TrainConfig, input_len: usize) -> Result<Self> {
        config.validate()?;
        let topology = Topology::from_preset(input_len, config.preset);
        let evolution = Evolution::new(
            config.popsize, config.elitism, config.mutation_chance, config.mutation_std
        )?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy()
        };
        Ok(Self {
            config,
            topology,
            evolution,
            rng
        })
    }

    /*
     * Evolve for the configured number of generations, then score the best on the test set
     * on_report sees every report as soon as its generation is done
     */
    pub async fn train<F: FnMut(&GenerationReport)>(
            &mut self, train_set: Arc<DataSet>, test_set: Arc<DataSet>,
            mut on_report: F) -> Result<TrainingSummary> {
        check_data_sets(&self.topology, &train_set, &test_set)?;
        info!(
            "Training {} network ({:?}) on {} records, testing on {}",
            self.config.preset, self.topology.layers(), train_set.len(), test_set.len()
        );

        let now = Instant::now();
        let mut pop = gen_pop(self.config.popsize, &self.topology, &mut self.rng)?;
        debug!("Generating population took {}s", now.elapsed().as_secs_f64());

        let now = Instant::now();
        let mut reports = Vec::new();
        for generation in 1..=self.config.iterations {
            let report = self.evolution.step(generation, &mut pop, &train_set, &mut self.rng).await?;
            if generation % self.config.report_interval == 0 {
                on_report(&report);
                reports.push(report);
            }
        }
        info!("{} generations took {}s", self.config.iterations, now.elapsed().as_secs_f64());

        // The last generation was mutated after its test, so test once more before picking
        test_all(&mut pop, &train_set).await?;
        let best = pop.into_iter()
            .min_by(|a, b| a.fitness.total_cmp(&b.fitness))
            .ok_or_else(|| Error::Precondition("population is empty".into()))?;
        info!("Best training error: {}", best.fitness);

        let test_error = mean_squared_error(&best.network, &test_set)?;
        Ok(TrainingSummary {
            best,
            test_error,
            reports
        })
    }
}

/// Build a trainer sized for the training data and run it
pub async fn train<F: FnMut(&GenerationReport)>(
        config: TrainConfig, train_set: DataSet, test_set: DataSet,
        on_report: F) -> Result<TrainingSummary> {
    train_set.require_records("training")?;
    let input_len = train_set.num_features().unwrap_or_default();
    let mut trainer = Trainer::new(config, input_len)?;
    trainer.train(Arc::new(train_set), Arc::new(test_set), on_report).await
}

// Both sets need records and the same feature width the network was built for
fn check_data_sets(topology: &Topology, train_set: &DataSet, test_set: &DataSet) -> Result<()> {
    train_set.require_records("training")?;
    test_set.require_records("test")?;
    for (name, set) in [ ("training", train_set), ("test", test_set) ] {
        let width = set.num_features().unwrap_or_default();
        if width != topology.input_len() {
            return Err(Error::DataFormat(format!(
                "{} data has {} features, network expects {}", name, width, topology.input_len()
            )));
        }
    }
    Ok(())
}
