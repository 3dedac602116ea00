use std::collections::BTreeSet;
use std::fmt;


/// A labeled example for binary classification.
pub trait Example {
    /// Returns `true` if the example belongs to the positive class.
    fn label(&self) -> bool;


    /// Returns the label encoded as a sign, `+1.0` or `-1.0`.
    #[inline]
    fn sign(&self) -> f64 {
        if self.label() { 1f64 } else { -1f64 }
    }
}


/// A labeled example for multi-label classification.
/// Each example carries a (possibly empty) set of labels.
pub trait MultiLabelExample {
    /// The label type.
    /// Labels are ordered so that training visits them deterministically.
    type Label: Ord + Clone + fmt::Debug;


    /// Returns `true` if `label` is attached to the example.
    fn has_label(&self, label: &Self::Label) -> bool;


    /// Returns every label attached to the example.
    fn labels(&self) -> BTreeSet<Self::Label>;


    /// Returns `+1.0` if `label` is attached to the example,
    /// `-1.0` otherwise.
    #[inline]
    fn sign(&self, label: &Self::Label) -> f64 {
        if self.has_label(label) { 1f64 } else { -1f64 }
    }
}


impl<E: Example + ?Sized> Example for &E {
    #[inline]
    fn label(&self) -> bool {
        (**self).label()
    }
}


impl<E: MultiLabelExample + ?Sized> MultiLabelExample for &E {
    type Label = E::Label;

    #[inline]
    fn has_label(&self, label: &Self::Label) -> bool {
        (**self).has_label(label)
    }

    #[inline]
    fn labels(&self) -> BTreeSet<Self::Label> {
        (**self).labels()
    }
}
