#![allow(dead_code)]
use born_again_eval::prelude::*;

use std::fs;
use std::path::{Path, PathBuf};

pub const TRAIN: &str = include_str!("../dataset/toy.train.csv");
pub const TEST: &str = include_str!("../dataset/toy.test.csv");
pub const FOREST: &str = include_str!("../dataset/toy.RF.txt");
pub const BORN_AGAIN: &str = include_str!("../dataset/toy.BA.tree");
pub const STUMP: &str = include_str!("../dataset/toy.BA.D1.tree");

pub const DATASET: &str = "toy";
pub const N_TREES: usize = 3;


pub fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/dataset");
    path.push(name);
    path
}


pub fn read_sample(name: &str) -> Sample {
    Sample::from_csv(fixture(name), true)
        .unwrap()
        .set_last_as_target()
        .unwrap()
}


fn write<P: AsRef<Path>>(path: P, text: &str) {
    let path = path.as_ref();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}


// Toy example  (1/0 are the classes of the training examples)
//
// 15|                     |
//   |                   0 |
//   |                     |
//   |                     |         0
//   |                     |
// 10|       0             |________________________ 9.5
//   |                     |             1
//   |                     |
//   |                     |
//   |                     |   1
//  5|                     |
//   |                     |                 1
//   |                     |
//   |            0        |
//   |                     |
//   |_____________________|____________________
//  0            5         | 10            15
//                         |
//                        9.0
//
// Every fold shares the same split and the same trees.
// The depth-bounded tree of variant `v` is the stump `x <= 9.0`, and
// the depth sweep holds the stump (depth 1) and the full tree (depth 2).
pub fn toy_experiment(root: &Path, n_folds: usize, variants: &[u32])
    -> ExperimentConfig
{
    let config = ExperimentConfig::new()
        .source_path(root.join("src"))
        .output_path(root.join("src").join("output"))
        .datasets([DATASET])
        .n_folds(n_folds)
        .n_trees(N_TREES)
        .variants(variants)
        .plot(false);

    let layout = born_again_eval::research::Layout::new(&config);
    for fold in 1..=n_folds {
        write(
            born_again_eval::research::layout::train_file(
                &config.source_path, DATASET, fold
            ),
            TRAIN,
        );
        write(
            born_again_eval::research::layout::test_file(
                &config.source_path, DATASET, fold
            ),
            TEST,
        );
        write(layout.forest_file(DATASET, fold), FOREST);
        write(layout.born_again_file(DATASET, fold), BORN_AGAIN);

        for &variant in variants {
            write(layout.born_again_new_file(DATASET, fold, variant), STUMP);

            let dir = layout.sweep_dir(DATASET, fold, variant);
            let name = layout.sweep_name(DATASET, fold, variant);
            // reverse depth order
            write(dir.join(format!("{name}.D2.tree")), BORN_AGAIN);
            write(dir.join(format!("{name}.D1.tree")), STUMP);
            write(dir.join(format!("{name}.out")), "toy,BA,1,2,2,5\n");
        }
    }
    config
}
