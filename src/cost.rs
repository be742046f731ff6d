use derive_more::From;

/// The cost of inserting or deleting a single node, given its label.
///
/// Costs are expected to be non-negative, they are not checked.
///
/// Any `Fn(&T) -> f64` is a [CostFunction].
pub trait CostFunction<T: ?Sized> {
    /// Returns the cost of the operation on a node labeled `label`.
    fn cost(&self, label: &T) -> f64;
}

impl<T: ?Sized, F: Fn(&T) -> f64> CostFunction<T> for F {
    #[inline]
    fn cost(&self, label: &T) -> f64 {
        self(label)
    }
}

/// A distance between two values, possibly of different types.
///
/// Used as the cost of substituting a label of one tree by a label of the other, but also
/// implemented by [TreeEditDistance][crate::TreeEditDistance] for whole trees.
///
/// Any `Fn(&A, &B) -> f64` is a [DistanceFunction].
pub trait DistanceFunction<A: ?Sized, B: ?Sized = A> {
    /// Returns the distance from `a` to `b`.
    fn distance(&self, a: &A, b: &B) -> f64;
}

impl<A: ?Sized, B: ?Sized, F: Fn(&A, &B) -> f64> DistanceFunction<A, B> for F {
    #[inline]
    fn distance(&self, a: &A, b: &B) -> f64 {
        self(a, b)
    }
}

/// Assigns the same cost to every label.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, From)]
pub struct UnitCost(pub f64);

impl Default for UnitCost {
    fn default() -> Self {
        UnitCost(1.)
    }
}

impl<T: ?Sized> CostFunction<T> for UnitCost {
    #[inline]
    fn cost(&self, _: &T) -> f64 {
        self.0
    }
}

/// Substitution cost that only depends on whether two labels are equal.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct EqualityCost {
    /// Cost of replacing a label by an equal one.
    pub equal: f64,

    /// Cost of replacing a label by a different one.
    pub unequal: f64,
}

impl EqualityCost {
    /// Charges `equal` for replacing a label by an equal one and `unequal` otherwise.
    pub fn new(equal: f64, unequal: f64) -> Self {
        EqualityCost { equal, unequal }
    }
}

impl Default for EqualityCost {
    /// Free when equal, otherwise as expensive as a deletion followed by an insertion of unit
    /// cost.
    fn default() -> Self {
        EqualityCost::new(0., 2.)
    }
}

impl<A: ?Sized + PartialEq<B>, B: ?Sized> DistanceFunction<A, B> for EqualityCost {
    #[inline]
    fn distance(&self, a: &A, b: &B) -> f64 {
        if a == b {
            self.equal
        } else {
            self.unequal
        }
    }
}
