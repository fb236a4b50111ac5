use super::{Id3Tree, TreeNode};
use std::fmt::{self, Display};

/// Struct to print a fitted ID3 tree as indented text.
///
/// Every split contributes one line per branch, `<attribute> == <value>`, followed by the
/// lines of the branch's subtree one level deeper. Every leaf contributes a single line
/// `class: <label>`. A line at depth `d` starts with `d` indentation markers followed by the
/// line marker.
///
/// ### Usage
///
/// ```rust
/// use arbor::prelude::*;
/// use arbor_trees::Id3Tree;
///
/// // Load dataset
/// let dataset = arbor_datasets::play_tennis();
/// // Fit the tree
/// let tree = Id3Tree::params().fit(&dataset)?;
/// // Export to text
/// let text = tree.export_to_text().to_string();
/// assert!(text.starts_with("|--- Outlook == Sunny\n|   |--- Humidity == High\n"));
/// // Now you can write text to the preferred destination
/// # Ok::<(), arbor::Error>(())
/// ```
pub struct TextExport<'a, V, L> {
    indent: String,
    marker: String,
    tree: &'a Id3Tree<V, L>,
}

impl<'a, V, L> TextExport<'a, V, L> {
    pub fn new(tree: &'a Id3Tree<V, L>) -> Self {
        TextExport {
            indent: "|   ".to_string(),
            marker: "|--- ".to_string(),
            tree,
        }
    }

    /// The marker repeated once per level of depth
    pub fn indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();

        self
    }

    /// The marker preceding the content of every line
    pub fn marker(mut self, marker: &str) -> Self {
        self.marker = marker.to_string();

        self
    }

    /// Returns a lazy iterator over the rendered lines, without line breaks
    ///
    /// Every call walks the tree from the root again.
    pub fn lines(&self) -> Lines<'_, V, L> {
        Lines {
            indent: &self.indent,
            marker: &self.marker,
            stack: vec![Pending::Node(0, self.tree.root_node())],
        }
    }
}

impl<'a, V: Display, L: Display> fmt::Display for TextExport<'a, V, L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}

enum Pending<'a, V, L> {
    Node(usize, &'a TreeNode<V, L>),
    Branch(usize, &'a str, &'a V, &'a TreeNode<V, L>),
}

/// Pre-order iterator over the lines of a [`TextExport`](struct.TextExport.html)
pub struct Lines<'a, V, L> {
    indent: &'a str,
    marker: &'a str,
    stack: Vec<Pending<'a, V, L>>,
}

impl<'a, V, L> Lines<'a, V, L> {
    fn line(&self, depth: usize, content: fmt::Arguments) -> String {
        format!("{}{}{}", self.indent.repeat(depth), self.marker, content)
    }
}

impl<'a, V: Display, L: Display> Iterator for Lines<'a, V, L> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::Node(depth, TreeNode::Leaf { prediction }) => {
                    return Some(self.line(depth, format_args!("class: {}", prediction)));
                }
                Pending::Node(
                    depth,
                    TreeNode::Split {
                        attribute_name,
                        branches,
                        ..
                    },
                ) => {
                    for (value, child) in branches.iter().rev() {
                        self.stack
                            .push(Pending::Branch(depth, attribute_name, value, child));
                    }
                }
                Pending::Branch(depth, attribute_name, value, child) => {
                    self.stack.push(Pending::Node(depth + 1, child));
                    return Some(
                        self.line(depth, format_args!("{} == {}", attribute_name, value)),
                    );
                }
            }
        }

        None
    }
}
