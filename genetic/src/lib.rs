/*
 * Author: Dylan Turner
 * Description: Collector for all the modules in the genetic regressor
 */

pub mod error;
pub mod config;
pub mod topology;
pub mod neuron;
pub mod network;
pub mod data;
pub mod genetic;
pub mod trainer;

pub use crate::{
    config::TrainConfig,
    data::{
        DataSet, Record
    }, error::{
        Error, Result
    }, genetic::{
        GenerationReport, Individual
    }, topology::{
        Preset, Topology
    }, trainer::{
        train, Trainer, TrainingSummary
    }
};
