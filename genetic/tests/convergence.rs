/*
 * Author: Dylan Turner
 * Description: Whole runs, from CSV text to a tested network
 */

use genetic_regressor::{
    train, DataSet, Error, Preset, TrainConfig
};

fn line_csv(xs: &[f64]) -> String {
    let mut csv = String::from("x,y\n");
    for x in xs {
        csv.push_str(&format!("{},{}\n", x, 2.0 * x + 1.0));
    }
    csv
}

#[tokio::test]
async fn learns_a_line() {
    let train_set = DataSet::from_reader(line_csv(&[ 0.0, 1.0, 2.0, 3.0 ]).as_bytes()).unwrap();
    let test_set = DataSet::from_reader(line_csv(&[ 0.5, 1.5, 2.5 ]).as_bytes()).unwrap();
    let preset: Preset = "5s".parse().unwrap();
    let config = TrainConfig::new(preset, 50, 5, 0.1, 0.05, 20000).with_seed(2024);

    let mut reports = Vec::new();
    let summary = train(config, train_set, test_set, |report| reports.push(*report)).await.unwrap();

    assert_eq!(reports.len(), 10);
    assert_eq!(reports.last().map(|r| r.generation), Some(20000));
    assert!(reports.iter().all(|r| r.best_fitness.is_finite() && r.best_fitness >= 0.0));
    assert!(summary.test_error < 1.0, "test error {} did not converge", summary.test_error);
}

#[test]
fn unknown_preset_stops_before_training() {
    assert!(matches!("7s".parse::<Preset>(), Err(Error::Config(_))));
}

#[tokio::test]
async fn header_only_training_file_is_rejected() {
    let train_set = DataSet::from_reader("x,y\n".as_bytes()).unwrap();
    let test_set = DataSet::from_reader(line_csv(&[ 1.0 ]).as_bytes()).unwrap();
    let config = TrainConfig::new(Preset::FiveSigmoid, 4, 1, 0.1, 0.05, 100);

    let mut reported = false;
    let res = train(config, train_set, test_set, |_| reported = true).await;
    assert!(matches!(res, Err(Error::Precondition(_))));
    assert!(!reported);
}
