use born_again_eval::prelude::*;
use born_again_eval::research::layout;

mod common;
use common::*;


#[test]
fn load_reads_both_splits() {
    let dir = tempfile::tempdir().unwrap();
    let config = toy_experiment(dir.path(), 2, &[0]);

    let (train, test, info) = load(&config.source_path, DATASET, 2).unwrap();

    assert_eq!(train.shape(), (7, 2));
    assert_eq!(test.shape(), (4, 2));
    assert_eq!(info.name, DATASET);
    assert_eq!(info.fold, 2);
    assert_eq!(info.feature_names, vec!["x", "y"]);
    assert_eq!(info.n_features, 2);
    assert_eq!(info.classes, vec![0, 1]);
    assert_eq!(info.n_classes(), 2);
    assert_eq!(test.labels().unwrap(), vec![0, 1, 0, 1]);
}


#[test]
fn classes_are_collected_from_both_splits() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path();
    let write = |path: std::path::PathBuf, text: &str| {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, text).unwrap();
    };
    write(layout::train_file(source, "abc", 1), "a,Class\n1,0\n2,2\n");
    write(layout::test_file(source, "abc", 1), "a,Class\n1,1\n");

    let (_, _, info) = load(source, "abc", 1).unwrap();
    assert_eq!(info.classes, vec![0, 1, 2]);
}


#[test]
fn splits_must_share_columns() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path();
    let write = |path: std::path::PathBuf, text: &str| {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, text).unwrap();
    };
    write(layout::train_file(source, "abc", 1), "a,b,Class\n1,2,0\n");
    write(layout::test_file(source, "abc", 1), "a,c,Class\n1,2,1\n");

    assert!(matches!(load(source, "abc", 1), Err(Error::Incompatible(_))));
}


#[test]
fn missing_fold() {
    let dir = tempfile::tempdir().unwrap();
    let config = toy_experiment(dir.path(), 1, &[0]);
    assert!(matches!(
        load(&config.source_path, DATASET, 2),
        Err(Error::Io { .. })
    ));
}


#[test]
fn sample_reader_uses_the_last_column_by_default() {
    let sample = SampleReader::<_, &str>::new()
        .file(fixture("toy.train.csv"))
        .has_header(true)
        .read()
        .unwrap();
    assert_eq!(sample.shape(), (7, 2));

    let sample = SampleReader::new()
        .file(fixture("toy.train.csv"))
        .has_header(true)
        .target_feature("x")
        .read()
        .unwrap();
    assert_eq!(sample.feature_names(), vec!["y", "Class"]);
    assert_eq!(sample.target()[0], 10.0);
}


#[test]
fn from_dataframe() {
    use polars::prelude::*;

    let s1 = Series::new("x", &[10.0, 14.0, 15.0, 5.0, 3.0, 8.0, 12.0]);
    let s2 = Series::new("y", &[5.0, 8.0, 3.0, 1.0, 9.0, 13.0, 11.0]);
    let df = DataFrame::new(vec![s1, s2]).unwrap();
    let target = Series::new("Class", &[1_i64, 1, 1, 0, 0, 0, 0]);

    let sample = Sample::from_dataframe(df, target).unwrap();
    let from_csv = read_sample("toy.train.csv");

    assert_eq!(sample.shape(), from_csv.shape());
    assert_eq!(sample.labels().unwrap(), from_csv.labels().unwrap());
    assert_eq!(sample.features(), from_csv.features());
}
