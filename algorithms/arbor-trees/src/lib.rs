//!
//! # Decision tree learning on categorical data
//! `arbor-trees` provides a pure Rust implementation of the ID3 decision tree learner.
//!
//! # The big picture
//!
//! `arbor-trees` is a crate in the `arbor` workspace. The root crate defines the dataset view
//! and the `Fit`/`Predict` traits, `arbor-datasets` reads tables from CSV files and this crate
//! learns trees from them.
//!
//! ID3 trees are grown greedily: every node tests the attribute that maximises the information
//! gain on the examples reaching it and has one child for every value of that attribute.
//! Attributes are treated as categorical, there is no threshold search on numeric columns.
//!
//! # Current state
//!
//! `arbor-trees` currently provides an [implementation](Id3Tree) of ID3 fitting, prediction,
//! and an [indented text export](TextExport) of fitted trees:
//!
//! ```rust
//! use arbor::prelude::*;
//! use arbor_trees::Id3Tree;
//!
//! let dataset = CategoricalDataset::from_rows(
//!     vec![
//!         vec!["Sunny", "Weak"],
//!         vec!["Sunny", "Strong"],
//!         vec!["Rainy", "Weak"],
//!         vec!["Rainy", "Strong"],
//!     ],
//!     vec!["Yes", "No", "Yes", "No"],
//!     vec!["Weather", "Wind"],
//! )?;
//!
//! let tree = Id3Tree::params().fit(&dataset)?;
//! assert_eq!(
//!     tree.export_to_text().to_string(),
//!     "|--- Wind == Weak\n|   |--- class: Yes\n|--- Wind == Strong\n|   |--- class: No\n"
//! );
//! # Ok::<(), arbor::Error>(())
//! ```
//!

mod id3;

pub use id3::*;

// Re-export the common Result alias for convenience
pub use arbor::error::Result;
