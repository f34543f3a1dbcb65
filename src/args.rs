// Author(s): Dylan Turner <dylan.turner@tutanota.com>
//! Checks for CLI arguments and help messages

use std::path::PathBuf;
use clap::Parser;

/// Train a small neural network with a genetic algorithm and report its error
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Training data set .csv (header row, then features..., target)
    #[arg(long)]
    pub train: PathBuf,

    /// Held out data set .csv, same columns as the training one
    #[arg(long)]
    pub test: PathBuf,

    /// Hidden layer preset: 5s, 20s or 5s5s
    #[arg(long)]
    pub nn: String,

    /// Number of networks in every generation
    #[arg(long)]
    pub popsize: usize,

    /// Best networks carried over unchanged
    #[arg(long)]
    pub elitism: usize,

    /// Chance for each layer to get mutated
    #[arg(long = "p")]
    pub p: f64,

    /// Standard deviation of the mutation noise
    #[arg(long = "K")]
    pub k: f64,

    /// Number of generations
    #[arg(long = "iter")]
    pub iterations: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = CliArgs::try_parse_from([
            "gann", "--train", "train.csv", "--test", "test.csv", "--nn", "5s5s",
            "--popsize", "10", "--elitism", "1", "--p", "0.1", "--K", "0.05", "--iter", "2000"
        ]).unwrap();
        assert_eq!(args.train, PathBuf::from("train.csv"));
        assert_eq!(args.nn, "5s5s");
        assert_eq!(args.popsize, 10);
        assert_eq!(args.elitism, 1);
        assert_eq!(args.p, 0.1);
        assert_eq!(args.k, 0.05);
        assert_eq!(args.iterations, 2000);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let res = CliArgs::try_parse_from([
            "gann", "--train", "a.csv", "--test", "b.csv", "--nn", "5s",
            "--popsize", "ten", "--elitism", "1", "--p", "0.1", "--K", "0.05", "--iter", "10"
        ]);
        assert!(res.is_err());
    }
}
