//! ID3 decision trees
//!
use std::collections::BTreeSet;
use std::marker::PhantomData;

use ndarray::{Array1, ArrayBase, Data, Ix1, Ix2};

use super::entropy::GainEngine;
use super::NodeIter;
use super::TextExport;
use arbor::{error::Error, error::Result, traits::*, CategoricalDataset, Label};

/// A node in the decision tree
///
/// Every node exclusively owns its children. Branches of a split keep the order in which they
/// were attached during fitting, which is the order the tested values first occur in the
/// examples reaching the split.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode<V, L> {
    /// Terminal node predicting a single label
    Leaf { prediction: L },
    /// Internal node testing one attribute, with one child per observed value
    Split {
        attribute_idx: usize,
        attribute_name: String,
        branches: Vec<(V, TreeNode<V, L>)>,
    },
}

impl<V: Label, L: Label> TreeNode<V, L> {
    /// Returns true if the node has no children
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Returns `Some(prediction)` for leaf nodes and `None` for split nodes.
    pub fn prediction(&self) -> Option<&L> {
        match self {
            TreeNode::Leaf { prediction } => Some(prediction),
            TreeNode::Split { .. } => None,
        }
    }

    /// Returns the index of the tested attribute if the node is a split, `None` otherwise
    pub fn attribute_idx(&self) -> Option<usize> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Split { attribute_idx, .. } => Some(*attribute_idx),
        }
    }

    /// Returns the name of the tested attribute if the node is a split, `None` otherwise
    pub fn attribute_name(&self) -> Option<&str> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Split { attribute_name, .. } => Some(attribute_name),
        }
    }

    /// Returns the (value, child) pairs of a split, empty for leaves
    pub fn branches(&self) -> &[(V, TreeNode<V, L>)] {
        match self {
            TreeNode::Leaf { .. } => &[],
            TreeNode::Split { branches, .. } => branches,
        }
    }

    /// Returns the child reached when the tested attribute equals `value`
    pub fn child(&self, value: &V) -> Option<&TreeNode<V, L>> {
        self.branches()
            .iter()
            .find(|(x, _)| x == value)
            .map(|(_, child)| child)
    }

    /// Recursively fits the node on the examples `ids` using the attributes `candidates`
    ///
    /// Both lists belong to this call. Children receive freshly built lists, so nothing is
    /// shared between siblings.
    fn fit(engine: &GainEngine<V, L>, ids: &[usize], candidates: &[usize]) -> Self {
        let categories = engine.dataset().categories();
        debug_assert!(!categories.is_empty(), "a dataset always has a label");
        let class_freq = engine.category_counts(ids);
        // set our prediction for this subset to the modal class
        let modal = find_modal_class(&class_freq);

        // return a leaf if all examples share a label or no attribute is left to test
        if class_freq[modal] == ids.len() || candidates.is_empty() {
            return TreeNode::Leaf {
                prediction: categories.label(modal).clone(),
            };
        }

        let best = engine.best_attribute(ids, candidates);
        let remaining = candidates
            .iter()
            .copied()
            .filter(|&attribute| attribute != best)
            .collect::<Vec<_>>();

        // Every value group is non-empty, since the values are collected from `ids` itself
        let branches = engine
            .partition(ids, best)
            .into_iter()
            .map(|(value, subset)| (value.clone(), TreeNode::fit(engine, &subset, &remaining)))
            .collect();

        TreeNode::Split {
            attribute_idx: best,
            attribute_name: engine.dataset().attribute_names()[best].clone(),
            branches,
        }
    }
}

/// The (empty) set of hyperparameters for fitting an [ID3 tree](struct.Id3Tree.html).
///
/// ID3 grows every branch until its examples share a label or no attribute is left to test,
/// so there is nothing to tune. The struct exists to implement `Fit` in the same way as the
/// other learners do.
///
/// ### Example
///
/// ```rust
/// use arbor::prelude::*;
/// use arbor_trees::Id3Tree;
///
/// let dataset = CategoricalDataset::from_rows(
///     vec![vec!["Sunny", "Weak"], vec!["Sunny", "Strong"]],
///     vec!["Yes", "No"],
///     vec!["Weather", "Wind"],
/// )?;
///
/// let tree = Id3Tree::params().fit(&dataset)?;
/// assert_eq!(tree.root_node().attribute_name(), Some("Wind"));
/// # Ok::<(), arbor::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Id3Params<V, L> {
    marker: PhantomData<(V, L)>,
}

impl<V, L> Id3Params<V, L> {
    pub fn new() -> Self {
        Id3Params {
            marker: PhantomData,
        }
    }
}

impl<V, L> Default for Id3Params<V, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Label, L: Label> Fit<V, L, Error> for Id3Params<V, L> {
    type Object = Id3Tree<V, L>;

    /// Fit an ID3 tree on all examples and all attributes of `dataset`.
    ///
    /// The dataset was validated on construction, hence fitting cannot fail on a well-formed
    /// dataset.
    fn fit(&self, dataset: &CategoricalDataset<V, L>) -> Result<Self::Object> {
        let engine = GainEngine::new(dataset);
        let ids = (0..dataset.nsamples()).collect::<Vec<_>>();
        let candidates = (0..dataset.nattributes()).collect::<Vec<_>>();

        let root_node = TreeNode::fit(&engine, &ids, &candidates);

        Ok(Id3Tree {
            root_node,
            num_attributes: dataset.nattributes(),
        })
    }
}

/// A fitted ID3 decision tree for classification of categorical data.
///
/// ### Structure
/// The tree is a multiway tree where:
/// * Each split node tests a single attribute and has one child for every value of the
/// attribute observed among the examples reaching the node.
///
/// * Leaf nodes make predictions: the label shared by their examples, or the most common label
/// if no attribute was left to split on.
///
/// ### Algorithm
///
/// Starting with all examples and all attributes, the tree is grown recursively:
///
/// * If all examples share a label, the node becomes a leaf predicting that label;
/// * If no attributes remain, the node becomes a leaf predicting the most common label. Ties are
/// broken by the order in which labels first occur in the dataset;
/// * Otherwise the attribute with the largest information gain is selected (the first one in
/// attribute order on ties), the examples are partitioned by its values and every partition is
/// fitted with the remaining attributes.
///
/// An attribute is used at most once on every path from the root, hence the depth of the tree
/// is bounded by the number of attributes.
///
/// ### Example
///
/// ```rust
/// use arbor::prelude::*;
/// use arbor_trees::Id3Tree;
///
/// let dataset = arbor_datasets::play_tennis();
/// let tree = Id3Tree::params().fit(&dataset)?;
///
/// assert_eq!(tree.root_node().attribute_name(), Some("Outlook"));
/// assert_eq!(tree.accuracy(&dataset), 1.0);
/// # Ok::<(), arbor::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Id3Tree<V, L> {
    root_node: TreeNode<V, L>,
    num_attributes: usize,
}

impl<V, L> Id3Tree<V, L> {
    /// Create a node iterator in pre-order (DFT), yielding (depth, node) pairs
    pub fn iter_nodes(&self) -> NodeIter<'_, V, L> {
        NodeIter::new(&self.root_node)
    }

    /// Return root node of the tree
    pub fn root_node(&self) -> &TreeNode<V, L> {
        &self.root_node
    }

    /// Number of attributes of the dataset the tree was fitted on
    pub fn num_attributes(&self) -> usize {
        self.num_attributes
    }

    /// Generates a [`TextExport`](struct.TextExport.html) structure to print the fitted tree as
    /// indented text, with the following default markers:
    ///
    /// * `indent="|   "`
    /// * `marker="|--- "`
    ///
    pub fn export_to_text(&self) -> TextExport<'_, V, L> {
        TextExport::new(self)
    }
}

impl<V: Label, L: Label> Id3Tree<V, L> {
    // Violates the convention that new should return a value of type `Self`
    #[allow(clippy::new_ret_no_self)]
    pub fn params() -> Id3Params<V, L> {
        Id3Params::new()
    }

    /// Return the indices of the attributes tested anywhere in the tree, in ascending order
    pub fn attributes(&self) -> Vec<usize> {
        self.iter_nodes()
            .filter_map(|(_, node)| node.attribute_idx())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Return max depth of the tree
    pub fn max_depth(&self) -> usize {
        self.iter_nodes()
            .fold(0, |max, (depth, _)| usize::max(max, depth))
    }

    /// Return the number of leaves in this tree
    pub fn num_leaves(&self) -> usize {
        self.iter_nodes().filter(|(_, node)| node.is_leaf()).count()
    }

    /// Classify a single example
    ///
    /// Returns `None` if the example reaches a split whose tested value was never observed
    /// there during fitting.
    pub fn predict_row(&self, x: &ArrayBase<impl Data<Elem = V>, Ix1>) -> Option<L> {
        assert_eq!(
            x.len(),
            self.num_attributes,
            "The number of values must match the number of attributes."
        );

        make_prediction(x, &self.root_node)
    }

    /// Fraction of examples in `dataset` whose prediction equals their label
    ///
    /// Examples that cannot be classified count as misclassified.
    pub fn accuracy(&self, dataset: &CategoricalDataset<V, L>) -> f64 {
        let correct = dataset
            .sample_iter()
            .filter(|(row, label)| self.predict_row(row).as_ref() == Some(*label))
            .count();

        correct as f64 / dataset.nsamples() as f64
    }
}

impl<V: Label, L: Label, D: Data<Elem = V>> Predict<&ArrayBase<D, Ix2>, Array1<Option<L>>>
    for Id3Tree<V, L>
{
    /// Make predictions for each row of a matrix of attribute values `x`.
    fn predict(&self, x: &ArrayBase<D, Ix2>) -> Array1<Option<L>> {
        x.outer_iter().map(|row| self.predict_row(&row)).collect()
    }
}

impl<V: Label, L: Label> Predict<&CategoricalDataset<V, L>, Array1<Option<L>>> for Id3Tree<V, L> {
    fn predict(&self, dataset: &CategoricalDataset<V, L>) -> Array1<Option<L>> {
        self.predict(&dataset.predictors())
    }
}

/// Classify a sample &x recursively using the tree node `node`.
fn make_prediction<V: Label, L: Label>(
    x: &ArrayBase<impl Data<Elem = V>, Ix1>,
    node: &TreeNode<V, L>,
) -> Option<L> {
    match node {
        TreeNode::Leaf { prediction } => Some(prediction.clone()),
        TreeNode::Split { attribute_idx, .. } => node
            .child(&x[*attribute_idx])
            .and_then(|child| make_prediction(x, child)),
    }
}

/// Finds the position of the most frequent class in a vector of frequencies. If two classes
/// have the same frequency then the first one is returned.
fn find_modal_class(class_freq: &[usize]) -> usize {
    class_freq
        .iter()
        .enumerate()
        .fold((0, 0), |(best_idx, best_freq), (idx, &freq)| {
            if freq > best_freq {
                (idx, freq)
            } else {
                (best_idx, best_freq)
            }
        })
        .0
}
