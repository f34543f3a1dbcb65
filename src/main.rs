/*
 * Author: Dylan Turner
 * Description: Interface to the genetic neural network trainer
 */

mod args;

use std::{
    time::Instant,
    error::Error
};
use clap::Parser;
use log::info;
use genetic_regressor::{
    train, DataSet, Preset, TrainConfig
};
use crate::args::CliArgs;

// Entry point
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = CliArgs::parse();

    // Everything gets checked before the first generation, so a bad run prints no results
    let preset: Preset = args.nn.parse()?;
    let mut config = TrainConfig::new(
        preset, args.popsize, args.elitism,
        args.p, args.k, args.iterations
    );
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;

    info!("Loading training data from {}", args.train.display());
    let train_set = DataSet::from_file(&args.train)?;
    info!("Loading test data from {}", args.test.display());
    let test_set = DataSet::from_file(&args.test)?;

    let now = Instant::now();
    let summary = train(config, train_set, test_set, |report| {
        println!("{}", report);
    }).await?;
    info!("Training took {}s", now.elapsed().as_secs_f64());

    println!("{}", summary);

    Ok(())
}
