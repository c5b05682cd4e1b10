//! Reads tree ensembles from the text format shared by
//! the forest exporter and the born-again tree builder.
//!
//! ```txt
//! DATASET_NAME: FICO.train1.csv
//! ENSEMBLE: RF
//! NB_TREES: 10
//! NB_FEATURES: 17
//! NB_CLASSES: 2
//! MAX_TREE_DEPTH: 3
//! Format: node / node type(LN - leave node, IN - internal node) ...
//!
//! [TREE 0]
//! NB_NODES: 5
//! 0 IN 1 2 4 0.5 0 -1
//! 1 LN -1 -1 -1 -1 1 0
//! ...
//! ```
//! Each node line reads
//! `id type left right feature threshold depth class`.
use fixedbitset::FixedBitSet;
use tracing::debug;

use std::collections::HashMap;
use std::fs;
use std::iter::{Enumerate, Peekable};
use std::path::Path;
use std::str::Lines;

use crate::error::{Error, Result};
use crate::{Label, Sample};
use super::ensemble_classifier::{EnsembleClassifier, EnsembleHeader};
use super::node::{BranchNode, LeafNode, Node};
use super::split_rule::Splitter;
use super::tree_classifier::TreeClassifier;


const TREE_MARKER: &str = "[TREE";
const FORMAT_KEY: &str = "Format";


/// Read the ensemble stored in `path`.
/// If `pruning` is `true`, every tree is pruned with `train.`
pub fn classifier_from_file<P>(path: P, train: &Sample, pruning: bool)
    -> Result<EnsembleClassifier>
    where P: AsRef<Path>
{
    let path = path.as_ref();
    let ensemble = read_ensemble(path)?;
    ensemble.check_compatible(train)?;

    if !pruning {
        return Ok(ensemble);
    }

    let n_leaves = ensemble.n_leaves();
    let ensemble = ensemble.prune(train);
    debug!(
        path = %path.display(),
        before = n_leaves,
        after = ensemble.n_leaves(),
        "pruned leaves"
    );
    Ok(ensemble)
}


/// Read the ensemble stored in `path` as is.
pub fn read_ensemble<P: AsRef<Path>>(path: P) -> Result<EnsembleClassifier> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_ensemble(path, &text)
}


/// Parse the contents `text` of the file `path`.
/// `path` only appears in error messages.
pub fn parse_ensemble<P: AsRef<Path>>(path: P, text: &str)
    -> Result<EnsembleClassifier>
{
    let mut cursor = Cursor::new(path.as_ref(), text);
    let header = cursor.header()?;

    let mut trees = Vec::with_capacity(header.n_trees);
    while cursor.peek_nonblank().is_some() {
        trees.push(cursor.tree(&header)?);
    }

    if trees.len() != header.n_trees {
        return Err(Error::invalid_tree(
            cursor.path,
            format!(
                "NB_TREES is {}, but the file has {} trees",
                header.n_trees,
                trees.len(),
            ),
        ));
    }

    Ok(EnsembleClassifier::from_raw(header, trees))
}


/// A node line before the tree is linked.
#[derive(Debug, Clone, Copy)]
enum RawNode {
    Internal { left: usize, right: usize, rule: Splitter },
    Leaf { class: Label },
}


struct Cursor<'a> {
    path: &'a Path,
    lines: Peekable<Enumerate<Lines<'a>>>,
}


impl<'a> Cursor<'a> {
    fn new(path: &'a Path, text: &'a str) -> Self {
        let lines = text.lines().enumerate().peekable();
        Self { path, lines }
    }


    fn peek_nonblank(&mut self) -> Option<&'a str> {
        while let Some((_, line)) = self.lines.peek() {
            if !line.trim().is_empty() { break; }
            self.lines.next();
        }
        self.lines.peek().map(|(_, line)| *line)
    }


    /// Returns the next non-blank line with its 1-indexed line number.
    fn next_nonblank(&mut self) -> Option<(usize, &'a str)> {
        self.peek_nonblank()?;
        self.lines.next().map(|(i, line)| (i + 1, line.trim()))
    }


    fn error<S: ToString>(&self, line: usize, message: S) -> Error {
        Error::parse(self.path, line, message)
    }


    fn header(&mut self) -> Result<EnsembleHeader> {
        let mut entries = HashMap::new();
        let mut last_line = 0;
        while let Some(line) = self.peek_nonblank() {
            if line.trim_start().starts_with(TREE_MARKER) { break; }
            let (lineno, line) = self.next_nonblank()
                .ok_or_else(|| self.error(last_line, "unexpected end"))?;
            last_line = lineno;

            let (key, value) = line.split_once(':')
                .ok_or_else(|| self.error(lineno, "expected `KEY: value`"))?;
            let key = key.trim();
            if key == FORMAT_KEY { continue; }
            entries.insert(key.to_string(), (lineno, value.trim().to_string()));
        }

        let text = |key: &str| -> Result<String> {
            entries.get(key)
                .map(|(_, value)| value.clone())
                .ok_or_else(|| Error::invalid_tree(
                    self.path, format!("missing header key `{key}`")
                ))
        };
        let number = |key: &str| -> Result<usize> {
            let (lineno, value) = entries.get(key)
                .ok_or_else(|| Error::invalid_tree(
                    self.path, format!("missing header key `{key}`")
                ))?;
            value.parse::<usize>()
                .map_err(|_| self.error(
                    *lineno, format!("`{key}` must be a non-negative integer")
                ))
        };

        let header = EnsembleHeader {
            dataset_name: text("DATASET_NAME")?,
            ensemble: text("ENSEMBLE")?,
            n_trees: number("NB_TREES")?,
            n_features: number("NB_FEATURES")?,
            n_classes: number("NB_CLASSES")?,
            max_depth: number("MAX_TREE_DEPTH")?,
        };
        if header.n_classes == 0 {
            return Err(Error::invalid_tree(self.path, "NB_CLASSES is 0"));
        }
        Ok(header)
    }


    fn tree(&mut self, header: &EnsembleHeader) -> Result<TreeClassifier> {
        let (lineno, line) = self.next_nonblank()
            .ok_or_else(|| self.error(0, "unexpected end of file"))?;
        if !line.starts_with(TREE_MARKER) {
            return Err(self.error(lineno, format!("expected `{TREE_MARKER} k]`")));
        }

        let (lineno, line) = self.next_nonblank()
            .ok_or_else(|| self.error(lineno, "missing NB_NODES"))?;
        let n_nodes = line.strip_prefix("NB_NODES:")
            .and_then(|n| n.trim().parse::<usize>().ok())
            .ok_or_else(|| self.error(lineno, "expected `NB_NODES: n`"))?;

        let mut nodes = HashMap::with_capacity(n_nodes);
        let mut last_line = lineno;
        for _ in 0..n_nodes {
            let (lineno, line) = self.next_nonblank()
                .ok_or_else(|| self.error(
                    last_line, format!("expected {n_nodes} node lines")
                ))?;
            if line.starts_with(TREE_MARKER) {
                return Err(self.error(
                    lineno, format!("expected {n_nodes} node lines")
                ));
            }
            last_line = lineno;

            let (id, node) = self.node(lineno, line, header.n_classes)?;
            if nodes.insert(id, node).is_some() {
                return Err(self.error(lineno, format!("node {id} is defined twice")));
            }
        }

        let max_id = nodes.keys().copied().max().unwrap_or(0);
        let mut visited = FixedBitSet::with_capacity(max_id + 1);
        let root = link(self.path, &nodes, 0, &mut visited)?;
        Ok(TreeClassifier::from(root))
    }


    fn node(&self, lineno: usize, line: &str, n_classes: usize)
        -> Result<(usize, RawNode)>
    {
        let words = line.split_whitespace().collect::<Vec<_>>();
        if words.len() != 8 {
            return Err(self.error(
                lineno, format!("expected 8 fields, got {}", words.len())
            ));
        }

        let field = |k: usize, what: &str| -> Result<usize> {
            words[k].parse::<usize>()
                .map_err(|_| self.error(
                    lineno, format!("invalid {what} `{}`", words[k])
                ))
        };

        let id = field(0, "node id")?;
        let node = match words[1] {
            "IN" => {
                let threshold = words[5].parse::<f64>()
                    .map_err(|_| self.error(
                        lineno, format!("invalid threshold `{}`", words[5])
                    ))?;
                RawNode::Internal {
                    left: field(2, "left child")?,
                    right: field(3, "right child")?,
                    rule: Splitter::new(field(4, "feature")?, threshold),
                }
            },
            "LN" => {
                let class = words[7].parse::<Label>()
                    .ok()
                    .filter(|&c| c >= 0 && (c as usize) < n_classes)
                    .ok_or_else(|| self.error(
                        lineno,
                        format!(
                            "leaf class `{}` is not in [0, {n_classes})",
                            words[7],
                        ),
                    ))?;
                RawNode::Leaf { class }
            },
            other => {
                return Err(self.error(
                    lineno, format!("unknown node type `{other}`")
                ));
            },
        };
        Ok((id, node))
    }
}


/// Build the subtree rooted at `id`.
/// Each node must be reached exactly once.
fn link(
    path: &Path,
    nodes: &HashMap<usize, RawNode>,
    id: usize,
    visited: &mut FixedBitSet,
) -> Result<Node>
{
    let raw = nodes.get(&id)
        .ok_or_else(|| Error::invalid_tree(
            path, format!("node {id} does not exist")
        ))?;
    if visited.put(id) {
        return Err(Error::invalid_tree(
            path, format!("node {id} has more than one parent")
        ));
    }

    let node = match *raw {
        RawNode::Leaf { class } => Node::Leaf(LeafNode::from_raw(class)),
        RawNode::Internal { left, right, rule } => {
            let left = link(path, nodes, left, visited)?;
            let right = link(path, nodes, right, visited)?;
            Node::Branch(BranchNode::from_raw(
                rule, Box::new(left), Box::new(right)
            ))
        },
    };
    Ok(node)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Classifier;

    const HEADER: &str = "\
DATASET_NAME: toy.train1.csv
ENSEMBLE: BA
NB_TREES: 1
NB_FEATURES: 2
NB_CLASSES: 2
MAX_TREE_DEPTH: 2
Format: node / node type(LN - leave node, IN - internal node) left child / right child / feature / threshold / node_depth / majority class (starts with index 0)
";


    fn parse(body: &str) -> Result<EnsembleClassifier> {
        parse_ensemble("toy.tree", &format!("{HEADER}\n{body}"))
    }


    #[test]
    fn parses_a_single_tree() {
        let ensemble = parse("\
[TREE 0]
NB_NODES: 5
0 IN 1 2 0 9 0 -1
1 LN -1 -1 -1 -1 1 0
2 IN 3 4 1 9.5 1 -1
3 LN -1 -1 -1 -1 2 1
4 LN -1 -1 -1 -1 2 0
").unwrap();

        assert_eq!(ensemble.header().ensemble, "BA");
        assert_eq!(ensemble.header().n_features, 2);
        assert_eq!(ensemble.trees().len(), 1);

        let tree = &ensemble.trees()[0];
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.n_leaves(), 3);
        assert_eq!(tree.n_nodes(), 5);
        assert_eq!(tree.max_feature(), Some(1));
    }


    #[test]
    fn nodes_may_come_in_any_order() {
        let ensemble = parse("\
[TREE 0]
NB_NODES: 3
2 LN -1 -1 -1 -1 1 1
0 IN 1 2 0 0.5 0 -1
1 LN -1 -1 -1 -1 1 0
").unwrap();
        assert_eq!(ensemble.depth(), 1);
    }


    #[test]
    fn shared_children_are_rejected() {
        let err = parse("\
[TREE 0]
NB_NODES: 2
0 IN 1 1 0 0.5 0 -1
1 LN -1 -1 -1 -1 1 0
").unwrap_err();
        assert!(matches!(err, Error::InvalidTree { .. }));
    }


    #[test]
    fn missing_children_are_rejected() {
        let err = parse("\
[TREE 0]
NB_NODES: 2
0 IN 1 7 0 0.5 0 -1
1 LN -1 -1 -1 -1 1 0
").unwrap_err();
        assert!(matches!(err, Error::InvalidTree { .. }));
    }


    #[test]
    fn classes_are_bounded_by_the_header() {
        let err = parse("\
[TREE 0]
NB_NODES: 1
0 LN -1 -1 -1 -1 0 2
").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 11, .. }));
    }


    #[test]
    fn unknown_node_type() {
        let err = parse("\
[TREE 0]
NB_NODES: 1
0 XX -1 -1 -1 -1 0 0
").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }


    #[test]
    fn node_count_must_match() {
        let err = parse("\
[TREE 0]
NB_NODES: 3
0 IN 1 2 0 0.5 0 -1
1 LN -1 -1 -1 -1 1 0
").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }


    #[test]
    fn tree_count_must_match() {
        let err = parse("\
[TREE 0]
NB_NODES: 1
0 LN -1 -1 -1 -1 0 0

[TREE 1]
NB_NODES: 1
0 LN -1 -1 -1 -1 0 1
").unwrap_err();
        assert!(matches!(err, Error::InvalidTree { .. }));
    }


    #[test]
    fn missing_header_key() {
        let text = "DATASET_NAME: x\nENSEMBLE: RF\n\n[TREE 0]\nNB_NODES: 1\n\
                    0 LN -1 -1 -1 -1 0 0\n";
        let err = parse_ensemble("x.txt", text).unwrap_err();
        assert!(matches!(err, Error::InvalidTree { .. }));
    }


    #[test]
    fn single_leaf_predicts_its_class() {
        let ensemble = parse("\
[TREE 0]
NB_NODES: 1
0 LN -1 -1 -1 -1 0 1
").unwrap();

        let file = {
            use std::io::Write;
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(b"a,Class\n0.0,0\n1.0,1\n").unwrap();
            file
        };
        let sample = Sample::from_csv(file.path(), true)
            .unwrap()
            .set_last_as_target()
            .unwrap();
        assert_eq!(ensemble.predict_all(&sample), vec![1, 1]);
    }
}
