use std::{cmp::Ordering, fmt};

use crate::{
    order::Chain,
    tuple::{HasLength, Tuple},
    unary::Unary,
};

/// A flat tuple whose every element is a [`Field`](crate::field::Field), and which can therefore
/// be compared lexicographically.
///
/// This trait is implemented for all tuples of arity 1 through 10 whose elements are
/// [`Field`](crate::field::Field)s. The comparator chain of each tuple is derived from its
/// inductive list by [`EachField`](crate::order::EachField); the implementation only supplies the
/// fields of a tuple value to the chain.
pub trait Orderable: Tuple {
    /// The comparator chain for this tuple's shape.
    type Chain: Chain;

    /// Build the comparator chain for this tuple's shape.
    fn chain() -> Self::Chain;

    /// Bind `chain` to the fields of `this` and compare them against the fields of `other`.
    fn compare_with(chain: &Self::Chain, this: &Self, other: &Self) -> Ordering;
}

/// A tuple paired with the comparator chain that orders it, which is totally ordered
/// lexicographically by its fields.
///
/// The leftmost field dominates, ties cascade rightwards, and absent fields sort before present
/// ones. Because `Ordered` implements [`Ord`], it can be placed directly into a
/// [`BTreeSet`](std::collections::BTreeSet) or [`BTreeMap`](std::collections::BTreeMap), or
/// sorted in a slice.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use tuple_order::order;
///
/// let mut set = BTreeSet::new();
/// set.insert(order((Some("B"), 1)));
/// set.insert(order((Some("A"), 2)));
/// set.insert(order((None, 3)));
/// set.insert(order((Some("A"), 2)));
///
/// let tuples = set.iter().map(|o| *o.tuple()).collect::<Vec<_>>();
/// assert_eq!(tuples, vec![(None, 3), (Some("A"), 2), (Some("B"), 1)]);
/// ```
///
/// Only tuples of the same shape can be compared:
///
/// ```compile_fail
/// use tuple_order::order;
///
/// let _ = order(("A", 1)) < order(("A", 1, 2));
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = "T: fmt::Debug"),
    Clone(bound = "T: Clone"),
    Copy(bound = "T: Copy")
)]
pub struct Ordered<T: Orderable> {
    tuple: T,
    #[derivative(Debug = "ignore")]
    chain: T::Chain,
}

impl<T: Orderable> Ordered<T> {
    /// Build the comparator chain for the shape of `tuple`, and pair it with `tuple`.
    pub fn new(tuple: T) -> Self {
        Ordered {
            tuple,
            chain: T::chain(),
        }
    }

    /// The ordered tuple.
    pub fn tuple(&self) -> &T {
        &self.tuple
    }

    /// Unwrap the ordered tuple.
    pub fn into_tuple(self) -> T {
        self.tuple
    }

    /// The comparator chain ordering this tuple.
    pub fn chain(&self) -> &T::Chain {
        &self.chain
    }

    /// Compare this tuple against `other`, field by field from the left.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use tuple_order::order;
    ///
    /// let pair = order((Some("A"), 1));
    /// assert_eq!(pair.compare_to(&order((Some("A"), 1))), Ordering::Equal);
    /// assert_eq!(pair.compare_to(&order((Some("B"), 0))), Ordering::Less);
    /// assert_eq!(pair.compare_to(&order((None, 2))), Ordering::Greater);
    /// ```
    pub fn compare_to(&self, other: &Self) -> Ordering {
        T::compare_with(&self.chain, &self.tuple, &other.tuple)
    }
}

impl<T: Orderable> Ordered<T>
where
    T::AsList: HasLength,
{
    /// The number of fields in the ordered tuple.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuple_order::Ordered;
    ///
    /// assert_eq!(Ordered::<(u8, char, String)>::ARITY, 3);
    /// ```
    pub const ARITY: usize = <<T::AsList as HasLength>::Length as Unary>::VALUE;
}

/// Pair `tuple` with the comparator chain for its shape.
///
/// # Examples
///
/// ```
/// use tuple_order::order;
///
/// assert!(order(("A", 1)) > order(("A", 0)));
/// assert!(order(("A", 1)) < order(("B", 0)));
/// ```
pub fn order<T: Orderable>(tuple: T) -> Ordered<T> {
    Ordered::new(tuple)
}

impl<T: Orderable> From<T> for Ordered<T> {
    fn from(tuple: T) -> Self {
        Ordered::new(tuple)
    }
}

impl<T: Orderable> AsRef<T> for Ordered<T> {
    fn as_ref(&self) -> &T {
        &self.tuple
    }
}

impl<T: Orderable> PartialEq for Ordered<T> {
    fn eq(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Equal
    }
}

impl<T: Orderable> Eq for Ordered<T> {}

impl<T: Orderable> PartialOrd for Ordered<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare_to(other))
    }
}

impl<T: Orderable> Ord for Ordered<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}
