//! Defines the decision tree classifier.
use crate::{Classifier, Feature};
use super::node::Node;

use std::fmt;


/// Decision tree classifier.
/// This struct is just a wrapper of [`Node`].
/// Predicts `+1` or `-1`, the class of the leaf an example reaches.
pub struct DecisionTreeClassifier<'a, F> {
    root: Node<'a, F>,
}


impl<'a, F> From<Node<'a, F>> for DecisionTreeClassifier<'a, F> {
    #[inline]
    fn from(root: Node<'a, F>) -> Self {
        Self { root }
    }
}


impl<'a, F> DecisionTreeClassifier<'a, F> {
    /// The root node.
    #[inline]
    pub fn root(&self) -> &Node<'a, F> {
        &self.root
    }


    /// Depth of the tree. A single leaf has depth `1`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }
}


impl<F> Clone for DecisionTreeClassifier<'_, F> {
    #[inline]
    fn clone(&self) -> Self {
        Self { root: self.root.clone() }
    }
}


impl<F: fmt::Display> fmt::Debug for DecisionTreeClassifier<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionTreeClassifier")
            .field("root", &self.root)
            .finish()
    }
}


impl<E, F> Classifier<E> for DecisionTreeClassifier<'_, F>
    where F: Feature<E>,
{
    #[inline]
    fn confidence(&self, example: &E) -> f64 {
        self.root.confidence(example)
    }
}


impl<F: fmt::Display> fmt::Display for DecisionTreeClassifier<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
