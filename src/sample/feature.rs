use std::fmt;


/// A binary feature over examples of type `E`.
///
/// A feature must be stable and side-effect free:
/// asking it twice about the same example gives the same answer.
/// The [`Display`](fmt::Display) output serves as the feature's descriptor
/// in logs and in the rendering of trained classifiers.
pub trait Feature<E: ?Sized>: fmt::Display {
    /// Returns `true` if the feature holds on `example`.
    fn test(&self, example: &E) -> bool;


    /// Returns `+1.0` if the feature holds on `example`, `-1.0` otherwise.
    #[inline]
    fn predict(&self, example: &E) -> f64 {
        if self.test(example) { 1f64 } else { -1f64 }
    }
}


impl<E: ?Sized, F: Feature<E> + ?Sized> Feature<E> for &F {
    #[inline]
    fn test(&self, example: &E) -> bool {
        (**self).test(example)
    }
}


impl<E: ?Sized, F: Feature<E> + ?Sized> Feature<E> for Box<F> {
    #[inline]
    fn test(&self, example: &E) -> bool {
        (**self).test(example)
    }
}


/// A feature built from one or two borrowed features:
/// either a single feature or the logical AND of two,
/// optionally negated.
///
/// Decision stumps split on a `Clause`,
/// so that a stump can express simple conjunctions
/// and always point to the side with the smaller weighted error.
pub struct Clause<'a, F> {
    first: &'a F,
    second: Option<&'a F>,
    negated: bool,
}


impl<'a, F> Clause<'a, F> {
    /// A clause that holds exactly when `feature` holds.
    #[inline]
    pub fn single(feature: &'a F) -> Self {
        Self { first: feature, second: None, negated: false }
    }


    /// A clause that holds when both `first` and `second` hold.
    #[inline]
    pub fn and(first: &'a F, second: &'a F) -> Self {
        Self { first, second: Some(second), negated: false }
    }


    /// Returns the logical negation of `self`.
    #[inline]
    pub fn negate(self) -> Self {
        Self { negated: !self.negated, ..self }
    }


    /// Returns `true` if `self` is a negated clause.
    #[inline]
    pub fn is_negated(&self) -> bool {
        self.negated
    }


    /// Returns the first feature of `self`.
    #[inline]
    pub fn first(&self) -> &'a F {
        self.first
    }


    /// Returns the second feature of `self`, if any.
    #[inline]
    pub fn second(&self) -> Option<&'a F> {
        self.second
    }
}


impl<F> Clone for Clause<'_, F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}


impl<F> Copy for Clause<'_, F> {}


impl<F> fmt::Debug for Clause<'_, F>
    where F: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Clause({self})")
    }
}


impl<E: ?Sized, F: Feature<E>> Feature<E> for Clause<'_, F> {
    #[inline]
    fn test(&self, example: &E) -> bool {
        let holds = self.first.test(example)
            && self.second.map_or(true, |second| second.test(example));
        holds != self.negated
    }
}


impl<F: fmt::Display> fmt::Display for Clause<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.second, self.negated) {
            (None, false) => write!(f, "{}", self.first),
            (None, true) => write!(f, "!{}", self.first),
            (Some(second), false) => write!(f, "{} & {}", self.first, second),
            (Some(second), true) => write!(f, "!({} & {})", self.first, second),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    struct Threshold(i32);

    impl fmt::Display for Threshold {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "x>{}", self.0)
        }
    }

    impl Feature<i32> for Threshold {
        fn test(&self, x: &i32) -> bool {
            *x > self.0
        }
    }

    #[test]
    fn clause_logic() {
        let (a, b) = (Threshold(0), Threshold(5));
        let single = Clause::single(&a);
        let both = Clause::and(&a, &b);

        assert!(single.test(&1));
        assert!(!single.negate().test(&1));
        assert!(!both.test(&3));
        assert!(both.test(&6));
        assert!(both.negate().test(&3));
        assert_eq!(both.negate().negate().predict(&6), 1.0);
    }

    #[test]
    fn clause_descriptor() {
        let (a, b) = (Threshold(0), Threshold(5));
        assert_eq!(Clause::single(&a).to_string(), "x>0");
        assert_eq!(Clause::single(&a).negate().to_string(), "!x>0");
        assert_eq!(Clause::and(&a, &b).to_string(), "x>0 & x>5");
        assert_eq!(Clause::and(&a, &b).negate().to_string(), "!(x>0 & x>5)");
    }
}
