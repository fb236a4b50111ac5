use std::iter::Iterator;

use super::TreeNode;

/// Pre-order (DFT) iterator of nodes in a decision tree
///
/// Yields every node together with its depth, the root having depth zero. Children are visited
/// in the order their branches were attached.
pub struct NodeIter<'a, V, L> {
    stack: Vec<(usize, &'a TreeNode<V, L>)>,
}

impl<'a, V, L> NodeIter<'a, V, L> {
    pub fn new(root: &'a TreeNode<V, L>) -> Self {
        NodeIter {
            stack: vec![(0, root)],
        }
    }
}

impl<'a, V, L> Iterator for NodeIter<'a, V, L> {
    type Item = (usize, &'a TreeNode<V, L>);

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().map(|(depth, node)| {
            if let TreeNode::Split { branches, .. } = node {
                branches
                    .iter()
                    .rev()
                    .for_each(|(_, child)| self.stack.push((depth + 1, child)));
            }

            (depth, node)
        })
    }
}
