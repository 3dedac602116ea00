use crate::MultiLabelExample;


/// A trait that defines the behavor of a binary classifier.
/// You only need to implement `confidence` method.
pub trait Classifier<E: ?Sized> {
    /// Computes the confidence (margin) on `example`.
    /// The sign is the predicted class,
    /// the magnitude is how sure the classifier is.
    fn confidence(&self, example: &E) -> f64;


    /// Predicts the label of `example` as `+1` or `-1`.
    /// A zero confidence reads as the positive class.
    fn predict(&self, example: &E) -> i64 {
        let conf = self.confidence(example);
        if conf >= 0.0 { 1 } else { -1 }
    }


    /// Computes the confidence of every example.
    fn confidence_all(&self, examples: &[E]) -> Vec<f64>
        where E: Sized,
    {
        examples.iter()
            .map(|example| self.confidence(example))
            .collect::<Vec<_>>()
    }


    /// Predicts the labels of every example.
    fn predict_all(&self, examples: &[E]) -> Vec<i64>
        where E: Sized,
    {
        examples.iter()
            .map(|example| self.predict(example))
            .collect::<Vec<_>>()
    }
}


/// A trait that defines the behavor of a multi-label classifier.
/// You only need to implement `confidence` method.
pub trait MultiLabelClassifier<E: MultiLabelExample + ?Sized> {
    /// Computes the confidence that `label` belongs to `example`.
    fn confidence(&self, example: &E, label: &E::Label) -> f64;


    /// Predicts whether `label` belongs to `example`.
    /// Only a strictly positive confidence predicts the label;
    /// a zero confidence carries no evidence for it.
    fn predict(&self, example: &E, label: &E::Label) -> bool {
        self.confidence(example, label) > 0.0
    }
}
