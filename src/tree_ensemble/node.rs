//! Defines the inner representation
//! of the loaded decision trees.
use crate::{Classifier, Label, Sample};

use super::split_rule::*;

use serde::{Serialize, Deserialize};


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that have two childrens.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of decision tree.
/// Each `BranchNode` must have two childrens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(crate) rule: Splitter,
    pub(crate) left: Box<Node>,
    pub(crate) right: Box<Node>,
}


impl BranchNode {
    /// Returns the `BranchNode` from the given components.
    #[inline]
    pub(crate) fn from_raw(
        rule: Splitter,
        left: Box<Node>,
        right: Box<Node>
    ) -> Self
    {
        Self { rule, left, right, }
    }
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(crate) class: Label,
}


impl LeafNode {
    /// Returns a `LeafNode` that predicts the label
    /// given to this function.
    #[inline]
    pub(crate) fn from_raw(class: Label) -> Self {
        Self { class }
    }
}


impl Classifier for LeafNode {
    #[inline]
    fn predict(&self, _sample: &Sample, _row: usize) -> Label {
        self.class
    }
}


impl Classifier for BranchNode {
    #[inline]
    fn predict(&self, sample: &Sample, row: usize) -> Label {
        match self.rule.split(sample, row) {
            LR::Left => self.left.predict(sample, row),
            LR::Right => self.right.predict(sample, row)
        }
    }
}


impl Classifier for Node {
    #[inline]
    fn predict(&self, sample: &Sample, row: usize) -> Label {
        match self {
            Node::Branch(ref node) => node.predict(sample, row),
            Node::Leaf(ref node) => node.predict(sample, row)
        }
    }
}


impl Node {
    /// Depth of the subtree rooted at this node.
    /// A single leaf has depth `0`.
    pub(crate) fn depth(&self) -> usize {
        match self {
            Node::Branch(b) => 1 + b.left.depth().max(b.right.depth()),
            Node::Leaf(_) => 0,
        }
    }


    pub(crate) fn n_leaves(&self) -> usize {
        match self {
            Node::Branch(b) => b.left.n_leaves() + b.right.n_leaves(),
            Node::Leaf(_) => 1,
        }
    }


    pub(crate) fn n_nodes(&self) -> usize {
        match self {
            Node::Branch(b) => 1 + b.left.n_nodes() + b.right.n_nodes(),
            Node::Leaf(_) => 1,
        }
    }


    /// Largest feature index referenced by a split, if any.
    pub(crate) fn max_feature(&self) -> Option<usize> {
        match self {
            Node::Branch(b) => {
                let sub = b.left.max_feature().max(b.right.max_feature());
                Some(sub.map_or(b.rule.feature, |f| f.max(b.rule.feature)))
            },
            Node::Leaf(_) => None,
        }
    }


    /// Simplify the subtree with the examples `rows` of `sample`
    /// that reach this node.
    /// A branch with an unreached side is replaced by the reached side and
    /// a branch whose children are leaves of one class becomes that leaf.
    /// The prediction for each row in `rows` does not change.
    pub(crate) fn prune(self, sample: &Sample, rows: &[usize]) -> Node {
        let branch = match self {
            Node::Leaf(_) => return self,
            Node::Branch(branch) => branch,
        };

        let (l_rows, r_rows): (Vec<usize>, Vec<usize>) = rows.iter()
            .partition(|&&row| branch.rule.split(sample, row) == LR::Left);

        if !rows.is_empty() {
            if l_rows.is_empty() {
                return branch.right.prune(sample, &r_rows);
            }
            if r_rows.is_empty() {
                return branch.left.prune(sample, &l_rows);
            }
        }

        let left = branch.left.prune(sample, &l_rows);
        let right = branch.right.prune(sample, &r_rows);

        match (&left, &right) {
            (Node::Leaf(l), Node::Leaf(r)) if l.class == r.class => left,
            _ => {
                let node = BranchNode::from_raw(
                    branch.rule, Box::new(left), Box::new(right)
                );
                Node::Branch(node)
            },
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(b) => {
                let b_info = format!(
                    "\tnode_{id} [ label = \"x[{feat}] <= {thr:.4} ?\" ];\n",
                    feat = b.rule.feature,
                    thr = b.rule.threshold
                );

                let (l_info, next_id) = b.left.to_dot_info(id + 1);
                let (mut r_info, ret_id) = b.right.to_dot_info(next_id);

                let mut info = l_info;
                info.push(b_info);
                info.append(&mut r_info);

                let l_edge = format!(
                    "\tnode_{id} -- node_{l_id} [ label = \"Yes\" ];\n",
                    l_id = id + 1
                );
                let r_edge = format!(
                    "\tnode_{id} -- node_{r_id} [ label = \"No\" ];\n",
                    r_id = next_id
                );

                info.push(l_edge);
                info.push(r_edge);

                (info, ret_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"class {c}\", \
                     shape = box, \
                     ];\n",
                    c = l.class
                );

                (vec![info], id + 1)
            }
        }
    }
}
