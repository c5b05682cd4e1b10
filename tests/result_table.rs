use born_again_eval::prelude::*;
use born_again_eval::research::{FoldAverage, MethodAverage};


fn report(accuracy: f64, f1_score: f64) -> ClassificationReport {
    // Only `accuracy` and `weighted_avg.f1_score` reach the table.
    let mut report = classification_report(&[0, 1], &[0, 1]).unwrap();
    report.accuracy = accuracy;
    report.weighted_avg.f1_score = f1_score;
    report
}


#[test]
fn rows_keep_insertion_order() {
    let mut table = ResultTable::new();
    assert!(table.is_empty());

    table.add_report("RandomForest", &report(0.9, 0.8), &report(0.7, 0.6));
    table.add_report("BornAgain", &report(1.0, 1.0), &report(0.5, 0.4));
    table.add_report("BornAgainNew", &report(0.8, 0.7), &report(0.6, 0.5));

    let methods = table.rows()
        .iter()
        .map(|row| row.method.as_str())
        .collect::<Vec<_>>();
    assert_eq!(methods, ["RandomForest", "BornAgain", "BornAgainNew"]);

    let row = &table.rows()[1];
    assert_eq!(row.train_accuracy, 1.0);
    assert_eq!(row.test_accuracy, 0.5);
    assert_eq!(row.test_f1, 0.4);

    let df = table.to_dataframe().unwrap();
    println!("{df}");
    assert_eq!(df.shape(), (3, 5));
    assert_eq!(
        df.get_column_names(),
        [" ", "Train-Acc", "Train-F1", "Test-Acc", "Test-F1"],
    );
}


#[test]
fn average_over_ten_folds() {
    let mut average = FoldAverage::new("BornAgain");
    assert!(average.average().is_none());

    for fold in 1..=10 {
        let x = fold as f64 / 10.0;
        let row = ReportRow {
            method: "BornAgain".to_string(),
            train_accuracy: x,
            train_f1: 1.0,
            test_accuracy: 1.0 - x,
            test_f1: 0.5,
        };
        average.add(&row);
    }
    assert_eq!(average.n_folds(), 10);

    let row = average.average().unwrap();
    assert_eq!(row.method, "BornAgain");
    assert!((row.train_accuracy - 0.55).abs() < 1e-12);
    assert!((row.train_f1 - 1.0).abs() < 1e-12);
    assert!((row.test_accuracy - 0.45).abs() < 1e-12);
    assert!((row.test_f1 - 0.5).abs() < 1e-12);
}


#[test]
fn writes_csv_and_xlsx() {
    let mut table = ResultTable::new();
    table.add_report("RandomForest", &report(0.9, 0.8), &report(0.7, 0.6));
    table.add_report("BornAgain", &report(1.0, 1.0), &report(0.5, 0.4));

    let dir = tempfile::tempdir().unwrap();

    let csv = dir.path().join("ResultsV0.csv");
    table.write_csv(&csv).unwrap();
    let text = std::fs::read_to_string(&csv).unwrap();
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("Train-Acc,Train-F1,Test-Acc,Test-F1"));
    assert!(lines[1].starts_with("RandomForest,"));
    assert!(lines[2].starts_with("BornAgain,"));

    let averages = vec![MethodAverage {
        dataset: "toy".to_string(),
        n_folds: 1,
        average: table.rows()[0].clone(),
    }];
    let xlsx = dir.path().join("ResultsV0.xlsx");
    table.write_xlsx(&xlsx, &averages).unwrap();

    // An xlsx file is a zip archive.
    let bytes = std::fs::read(&xlsx).unwrap();
    assert!(bytes.starts_with(b"PK"));
}
