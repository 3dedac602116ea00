//! Provides the decision stump classes.
use crate::{
    Classifier,
    Clause,
    Feature,
    MultiLabelClassifier,
    MultiLabelExample,
};

use std::collections::BTreeMap;
use std::fmt;


/// The binary stump returned by
/// [`DecisionStump`](super::DecisionStump).
/// Predicts `+1` on the examples where its clause holds,
/// `-1` elsewhere.
pub struct DecisionStumpClassifier<'a, F> {
    clause: Clause<'a, F>,
    error: f64,
}


impl<'a, F> DecisionStumpClassifier<'a, F> {
    #[inline]
    pub(crate) fn new(clause: Clause<'a, F>, error: f64) -> Self {
        Self { clause, error }
    }


    /// The clause the stump splits on.
    #[inline]
    pub fn clause(&self) -> &Clause<'a, F> {
        &self.clause
    }


    /// The weighted error measured when the stump was trained,
    /// relative to the total weight the learner received.
    #[inline]
    pub fn error(&self) -> f64 {
        self.error
    }
}


impl<F> Clone for DecisionStumpClassifier<'_, F> {
    #[inline]
    fn clone(&self) -> Self {
        Self { clause: self.clause, error: self.error }
    }
}


impl<F: fmt::Display> fmt::Debug for DecisionStumpClassifier<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionStumpClassifier")
            .field("clause", &self.clause)
            .field("error", &self.error)
            .finish()
    }
}


impl<E, F> Classifier<E> for DecisionStumpClassifier<'_, F>
    where F: Feature<E>,
{
    #[inline]
    fn confidence(&self, example: &E) -> f64 {
        self.clause.predict(example)
    }
}


impl<F: fmt::Display> fmt::Display for DecisionStumpClassifier<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] (error {:.6})", self.clause, self.error)
    }
}


/// The multi-label stump returned by
/// [`MultiLabelDecisionStump`](super::MultiLabelDecisionStump).
///
/// For every label it stores two confidences,
/// `[clause holds, clause fails]`.
/// The confidence on a label it never saw is `0`.
pub struct MultiLabelStumpClassifier<'a, F, L> {
    clause: Clause<'a, F>,
    confidences: BTreeMap<L, [f64; 2]>,
    z: f64,
}


impl<'a, F, L> MultiLabelStumpClassifier<'a, F, L> {
    #[inline]
    pub(crate) fn new(
        clause: Clause<'a, F>,
        confidences: BTreeMap<L, [f64; 2]>,
        z: f64,
    ) -> Self
    {
        Self { clause, confidences, z }
    }


    /// The clause the stump splits on.
    #[inline]
    pub fn clause(&self) -> &Clause<'a, F> {
        &self.clause
    }


    /// The normalization factor `Z` measured at training time.
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }


    /// The per-label confidences, `[clause holds, clause fails]`.
    #[inline]
    pub fn confidences(&self) -> &BTreeMap<L, [f64; 2]> {
        &self.confidences
    }
}


impl<F, L: Clone> Clone for MultiLabelStumpClassifier<'_, F, L> {
    fn clone(&self) -> Self {
        Self {
            clause: self.clause,
            confidences: self.confidences.clone(),
            z: self.z,
        }
    }
}


impl<F, L> fmt::Debug for MultiLabelStumpClassifier<'_, F, L>
    where F: fmt::Display,
          L: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiLabelStumpClassifier")
            .field("clause", &self.clause)
            .field("confidences", &self.confidences)
            .field("z", &self.z)
            .finish()
    }
}


impl<E, F> MultiLabelClassifier<E>
    for MultiLabelStumpClassifier<'_, F, E::Label>
    where E: MultiLabelExample,
          F: Feature<E>,
{
    fn confidence(&self, example: &E, label: &E::Label) -> f64 {
        let Some(c) = self.confidences.get(label) else {
            return 0f64;
        };
        if self.clause.test(example) { c[0] } else { c[1] }
    }
}


impl<F, L> fmt::Display for MultiLabelStumpClassifier<'_, F, L>
    where F: fmt::Display,
          L: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] (Z {:.6})", self.clause, self.z)?;
        for (label, [pos, neg]) in &self.confidences {
            writeln!(f, "    {label:?}: {pos:+.4} / {neg:+.4}")?;
        }
        Ok(())
    }
}
