//! Defines the inner representation
//! of the decision tree class.
use crate::{Classifier, Feature};

use std::fmt;


/// Enumeration of `BranchNode` and `LeafNode`.
pub enum Node<'a, F> {
    /// A node that has two children.
    Branch(BranchNode<'a, F>),


    /// A node that has no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of a decision tree.
/// Examples on which `feature` holds go to `on_true`,
/// the others to `on_false`.
pub struct BranchNode<'a, F> {
    pub(super) feature: &'a F,
    pub(super) on_true: Box<Node<'a, F>>,
    pub(super) on_false: Box<Node<'a, F>>,
}


/// Represents the leaf nodes of a decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafNode {
    pub(super) positive: bool,
}


impl<'a, F> Node<'a, F> {
    #[inline]
    pub(super) fn leaf(positive: bool) -> Self {
        Self::Leaf(LeafNode { positive })
    }


    #[inline]
    pub(super) fn branch(
        feature: &'a F,
        on_true: Node<'a, F>,
        on_false: Node<'a, F>,
    ) -> Self
    {
        Self::Branch(BranchNode {
            feature,
            on_true: Box::new(on_true),
            on_false: Box::new(on_false),
        })
    }


    /// Number of nodes on the longest root-to-leaf path.
    /// A single leaf has depth `1`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(b) => 1 + b.on_true.depth().max(b.on_false.depth()),
        }
    }


    /// Number of leaves below (and including) `self`.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(b) => b.on_true.n_leaves() + b.on_false.n_leaves(),
        }
    }


    fn render(&self, f: &mut fmt::Formatter<'_>, indent: usize)
        -> fmt::Result
        where F: fmt::Display,
    {
        match self {
            Self::Leaf(leaf) => {
                let class = if leaf.positive { "+1" } else { "-1" };
                writeln!(f, "{:indent$}=> {class}", "")
            },
            Self::Branch(b) => {
                writeln!(f, "{:indent$}if {}:", "", b.feature)?;
                b.on_true.render(f, indent + 4)?;
                writeln!(f, "{:indent$}else:", "")?;
                b.on_false.render(f, indent + 4)
            },
        }
    }
}


impl<'a, F> BranchNode<'a, F> {
    /// The feature this node splits on.
    #[inline]
    pub fn feature(&self) -> &'a F {
        self.feature
    }


    /// The subtree for examples on which the feature holds.
    #[inline]
    pub fn on_true(&self) -> &Node<'a, F> {
        &self.on_true
    }


    /// The subtree for examples on which the feature fails.
    #[inline]
    pub fn on_false(&self) -> &Node<'a, F> {
        &self.on_false
    }
}


impl LeafNode {
    /// Returns `true` if the leaf predicts the positive class.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.positive
    }
}


impl<F> Clone for Node<'_, F> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf(leaf) => Self::Leaf(*leaf),
            Self::Branch(b) => Self::Branch(BranchNode {
                feature: b.feature,
                on_true: b.on_true.clone(),
                on_false: b.on_false.clone(),
            }),
        }
    }
}


impl<F: fmt::Display> fmt::Debug for Node<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(leaf) => write!(f, "Leaf({})", leaf.positive),
            Self::Branch(b) => write!(
                f, "Branch(\"{}\", {:?}, {:?})",
                b.feature, b.on_true, b.on_false
            ),
        }
    }
}


impl<F: fmt::Display> fmt::Display for Node<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}


impl<E, F> Classifier<E> for Node<'_, F>
    where F: Feature<E>,
{
    fn confidence(&self, example: &E) -> f64 {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(leaf) => {
                    return if leaf.positive { 1f64 } else { -1f64 };
                },
                Node::Branch(b) => {
                    node = if b.feature.test(example) {
                        &*b.on_true
                    } else {
                        &*b.on_false
                    };
                },
            }
        }
    }
}
