use born_again_eval::prelude::*;
use born_again_eval::tree_ensemble::{parse_ensemble, read_ensemble};

mod common;
use common::*;


#[test]
fn born_again_tree_fits_the_training_sample() {
    let train = read_sample("toy.train.csv");
    let tree = classifier_from_file(fixture("toy.BA.tree"), &train, false)
        .unwrap();

    assert_eq!(tree.header().ensemble, "BA");
    assert_eq!(tree.depth(), 2);
    assert_eq!(tree.n_leaves(), 3);
    assert_eq!(tree.predict_all(&train), train.labels().unwrap());
}


#[test]
fn split_sends_equal_values_left() {
    let text = "\
DATASET_NAME: t
ENSEMBLE: BA
NB_TREES: 1
NB_FEATURES: 2
NB_CLASSES: 2
MAX_TREE_DEPTH: 1

[TREE 0]
NB_NODES: 3
0 IN 1 2 0 9 0 -1
1 LN -1 -1 -1 -1 1 0
2 LN -1 -1 -1 -1 1 1
";
    let stump = parse_ensemble("t.tree", text).unwrap();
    let sample = read_sample("toy.test.csv");

    // x = 2, 11, 13, 4
    assert_eq!(stump.predict_all(&sample), vec![0, 1, 1, 0]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edge.csv");
    std::fs::write(&path, "x,y,Class\n9,0,0\n9.0001,0,1\n").unwrap();
    let edge = Sample::from_csv(&path, true)
        .unwrap()
        .set_last_as_target()
        .unwrap();
    assert_eq!(stump.predict_all(&edge), vec![0, 1]);
}


#[test]
fn forest_takes_the_majority_vote() {
    let train = read_sample("toy.train.csv");
    let test = read_sample("toy.test.csv");
    let forest = classifier_from_file(fixture("toy.RF.txt"), &train, false)
        .unwrap();

    assert_eq!(forest.header().n_trees, 3);
    assert_eq!(forest.trees().len(), 3);
    assert_eq!(forest.depth(), 2);
    assert_eq!(forest.n_leaves(), 7);

    // The stumps alone miss some training examples, the vote does not.
    assert_eq!(forest.trees()[1].predict_all(&train), vec![1, 1, 1, 0, 0, 0, 1]);
    assert_eq!(forest.predict_all(&train), train.labels().unwrap());
    assert_eq!(forest.predict_all(&test), vec![0, 1, 0, 0]);
}


#[test]
fn ties_go_to_the_smallest_class() {
    let text = "\
DATASET_NAME: t
ENSEMBLE: RF
NB_TREES: 2
NB_FEATURES: 2
NB_CLASSES: 3
MAX_TREE_DEPTH: 0

[TREE 0]
NB_NODES: 1
0 LN -1 -1 -1 -1 0 2

[TREE 1]
NB_NODES: 1
0 LN -1 -1 -1 -1 0 1
";
    let forest = parse_ensemble("t.txt", text).unwrap();
    let sample = read_sample("toy.test.csv");
    assert_eq!(forest.predict_all(&sample), vec![1; 4]);
}


#[test]
fn pruning_keeps_training_predictions() {
    let train = read_sample("toy.train.csv");
    let test = read_sample("toy.test.csv");
    let path = fixture("toy.redundant.tree");

    let full = classifier_from_file(&path, &train, false).unwrap();
    assert_eq!(full.depth(), 3);
    assert_eq!(full.n_leaves(), 5);

    let pruned = classifier_from_file(&path, &train, true).unwrap();
    assert_eq!(pruned.predict_all(&train), full.predict_all(&train));

    // The unreached root and the constant subtree are gone,
    // which leaves the born-again tree.
    let born_again = read_ensemble(fixture("toy.BA.tree")).unwrap();
    assert_eq!(pruned.trees(), born_again.trees());
    assert_eq!(pruned.predict_all(&test), born_again.predict_all(&test));
}


#[test]
fn splits_must_read_existing_features() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("narrow.csv");
    std::fs::write(&path, "x,Class\n1,0\n12,1\n").unwrap();
    let narrow = Sample::from_csv(&path, true)
        .unwrap()
        .set_last_as_target()
        .unwrap();

    let err = classifier_from_file(fixture("toy.BA.tree"), &narrow, false)
        .unwrap_err();
    assert!(matches!(err, Error::Incompatible(_)));
}


#[test]
fn missing_file_names_the_path() {
    let train = read_sample("toy.train.csv");
    let err = classifier_from_file(fixture("nothing.tree"), &train, false)
        .unwrap_err();
    match err {
        Error::Io { path, .. } => assert!(path.ends_with("nothing.tree")),
        other => panic!("unexpected error: {other}"),
    }
}


#[test]
fn to_dot_file() {
    let tree = read_ensemble(fixture("toy.BA.tree")).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("toy.dot");
    tree.trees()[0].to_dot_file(&path).unwrap();

    let dot = std::fs::read_to_string(&path).unwrap();
    assert!(dot.starts_with("graph DecisionTree {"));
    assert!(dot.trim_end().ends_with('}'));
    assert_eq!(dot.matches("shape = box").count(), 3);
    assert!(dot.contains("x[0] <= 9.0000 ?"));
}
