//! Comparator chains: the per-field comparison steps of a tuple, and their binding to a value.
//!
//! A chain is a type-level list of steps, one per field, ending in the terminal step [`End`]. The
//! step [`Order<First, Rest>`] compares a field of type `First` and defers ties to the chain
//! `Rest` for the remaining fields. Chains are built back to front, starting from [`terminal`]
//! and calling [`prepend`] once per field, so the outermost (first) field is added last:
//!
//! ```
//! use tuple_order::order::{terminal, Chain, End, Order};
//!
//! let chain = terminal().prepend::<i32>().prepend::<String>();
//! let _: Order<String, Order<i32, End>> = chain;
//! ```
//!
//! A chain carries no data and is zero-sized. It becomes useful once it is [`Bind`]-ed to the
//! fields of a particular tuple, given as an inductive list of references: the resulting
//! [`Bound`] comparison holds those fields and can be
//! [`compare_against`](CompareAgainst::compare_against) the fields of any other tuple of the
//! same shape.
//!
//! ```
//! use std::cmp::Ordering;
//! use tuple_order::order::{terminal, Bind, Chain, CompareAgainst};
//!
//! let chain = terminal().prepend::<i32>().prepend::<Option<&str>>();
//! let bound = chain.bind((&Some("A"), (&1, ())));
//!
//! assert_eq!(bound.compare_against((&Some("A"), (&0, ()))), Ordering::Greater);
//! assert_eq!(bound.compare_against((&Some("B"), (&0, ()))), Ordering::Less);
//! assert_eq!(bound.compare_against((&None, (&2, ()))), Ordering::Greater);
//! ```
//!
//! Most users never need this module directly: [`Ordered`](crate::Ordered) builds and binds the
//! chain for a flat tuple automatically.

use std::{cmp::Ordering, fmt, hash::Hash, marker::PhantomData};

use crate::field::{self, Field};

/// The terminal step of every comparator chain. Comparing the (empty) remainder of two tuples
/// always yields [`Ordering::Equal`].
///
/// `End` is both the terminal step and its own bound comparison, since it has no fields to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct End;

/// A comparison step for a field of type `First`, deferring ties to the chain `Rest` for the
/// remaining fields.
///
/// An `Order` is a template: it holds no field values, only the shape of the remainder.
#[derive(Derivative)]
#[derivative(
    Debug(bound = "Rest: fmt::Debug"),
    Clone(bound = "Rest: Clone"),
    Copy(bound = "Rest: Copy"),
    Default(bound = "Rest: Default"),
    PartialEq(bound = "Rest: PartialEq"),
    Eq(bound = "Rest: Eq"),
    Hash(bound = "Rest: Hash")
)]
pub struct Order<First, Rest> {
    rest: Rest,
    #[derivative(Debug = "ignore")]
    first: PhantomData<fn() -> First>,
}

static_assertions::assert_eq_size!(Order<String, Order<Vec<u8>, Order<char, End>>>, ());

/// A comparator chain: either [`End`] or an [`Order`] step in front of another chain.
pub trait Chain: sealed::Chain + Copy + Default + fmt::Debug + Send + Sync {
    /// Prepend a step for a field of type `T`, yielding the chain for a tuple one field longer
    /// whose first field is a `T`.
    fn prepend<T: Field>(self) -> Order<T, Self> {
        Order {
            rest: self,
            first: PhantomData,
        }
    }
}

impl Chain for End {}

impl<First: Field, Rest: Chain> Chain for Order<First, Rest> {}

/// The terminal comparator chain, for a tuple with no fields left to compare.
pub fn terminal() -> End {
    End
}

/// Given the chain for the remainder of a tuple, return the chain for that tuple with a field of
/// type `T` in front.
pub fn prepend<T: Field, C: Chain>(chain: C) -> Order<T, C> {
    chain.prepend()
}

impl<First: Field> Order<First, End> {
    /// The step for the last field of a tuple, from which longer chains are built by
    /// [`prepend`](Chain::prepend)ing.
    pub fn last() -> Self {
        terminal().prepend()
    }
}

impl<First, Rest> Order<First, Rest> {
    /// The chain for the remaining fields.
    pub fn rest(&self) -> &Rest {
        &self.rest
    }
}

/// Build the comparator chain for an inductive list of field types.
///
/// # Examples
///
/// ```
/// use tuple_order::order::{EachField, End, Order};
///
/// let _: Order<u8, Order<char, End>> = <(u8, (char, ())) as EachField>::chain();
/// ```
pub trait EachField {
    /// The comparator chain for this list of fields.
    type Chain: Chain;

    /// Construct the chain, starting from the terminal step and prepending each field from last
    /// to first.
    fn chain() -> Self::Chain;
}

impl EachField for () {
    type Chain = End;

    fn chain() -> End {
        terminal()
    }
}

impl<T: Field, Ts: EachField> EachField for (T, Ts) {
    type Chain = Order<T, Ts::Chain>;

    fn chain() -> Self::Chain {
        prepend(Ts::chain())
    }
}

/// Bind a comparator chain to the fields of a tuple, given as an inductive list `L` of references
/// `(&A, (&B, ()))`.
pub trait Bind<L> {
    /// The bound comparison, which holds the fields of the tuple.
    type Bound: CompareAgainst<L>;

    /// Extract the first field and the rest of `list`, binding the rest of this chain to the rest
    /// of the list.
    fn bind(&self, list: L) -> Self::Bound;
}

impl Bind<()> for End {
    type Bound = End;

    fn bind(&self, (): ()) -> End {
        End
    }
}

impl<'a, First, Rest, Fields> Bind<(&'a First, Fields)> for Order<First, Rest>
where
    First: Field,
    Rest: Bind<Fields>,
{
    type Bound = Bound<'a, First, Rest::Bound>;

    fn bind(&self, (first, rest): (&'a First, Fields)) -> Self::Bound {
        Bound {
            first: first.value(),
            rest: self.rest.bind(rest),
        }
    }
}

/// Compare a bound comparison against the fields of another tuple of the same shape, given as an
/// inductive list `L` of references.
pub trait CompareAgainst<L> {
    /// Compare the bound tuple against `other`: [`Ordering::Less`] if the bound tuple sorts first.
    fn compare_against(&self, other: L) -> Ordering;
}

impl CompareAgainst<()> for End {
    fn compare_against(&self, (): ()) -> Ordering {
        Ordering::Equal
    }
}

/// A comparison step bound to the value of a tuple's first field, in front of the bound
/// comparison `Rest` for the remaining fields.
#[derive(Derivative)]
#[derivative(
    Debug(bound = "First::Value: fmt::Debug, Rest: fmt::Debug"),
    Clone(bound = "Rest: Clone"),
    Copy(bound = "Rest: Copy")
)]
pub struct Bound<'a, First: Field, Rest> {
    first: Option<&'a First::Value>,
    rest: Rest,
}

impl<'a, First: Field, Rest> Bound<'a, First, Rest> {
    /// The bound value of the first field, or `None` if it is absent.
    pub fn first(&self) -> Option<&'a First::Value> {
        self.first
    }

    /// The bound comparison for the remaining fields.
    pub fn rest(&self) -> &Rest {
        &self.rest
    }
}

impl<'a, 'b, First, Rest, Fields> CompareAgainst<(&'b First, Fields)> for Bound<'a, First, Rest>
where
    First: Field,
    Rest: CompareAgainst<Fields>,
{
    fn compare_against(&self, (other, rest): (&'b First, Fields)) -> Ordering {
        // Equal fields, including two absent ones, defer to the remaining fields.
        match field::compare_values(self.first, other.value()) {
            Ordering::Equal => self.rest.compare_against(rest),
            unequal => unequal,
        }
    }
}

mod sealed {
    use super::*;
    pub trait Chain {}
    impl Chain for End {}
    impl<First: Field, Rest: Chain> Chain for Order<First, Rest> {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_type_eq_all};
    use std::cmp::Ordering::*;

    type Pair = Order<Option<&'static str>, Order<i32, End>>;

    assert_type_eq_all!(
        <(u8, (char, (bool, ()))) as EachField>::Chain,
        Order<u8, Order<char, Order<bool, End>>>
    );
    assert_impl_all!(Pair: Chain, Copy, Send, Sync, Default);
    assert_impl_all!(Order<std::rc::Rc<u8>, End>: Send, Sync);

    fn pair() -> Pair {
        Order::<i32, End>::last().prepend()
    }

    #[test]
    fn prepend_builds_outermost_field_last() {
        let chain: Pair = prepend(prepend(terminal()));
        assert_eq!(chain, pair());
        assert_eq!(*chain.rest().rest(), End);
    }

    #[test]
    fn terminal_always_equal() {
        assert_eq!(terminal().bind(()).compare_against(()), Equal);
    }

    #[test]
    fn bind_captures_field_values() {
        let bound = pair().bind((&Some("A"), (&1, ())));
        assert_eq!(bound.first(), Some("A").as_ref());
        assert_eq!(bound.rest().first(), Some(&1));
        assert_eq!(*bound.rest().rest(), End);

        let absent = pair().bind((&None, (&2, ())));
        assert_eq!(absent.first(), None);
    }

    #[test]
    fn first_field_dominates() {
        let bound = pair().bind((&Some("A"), (&1, ())));
        assert_eq!(bound.compare_against((&Some("B"), (&0, ()))), Less);
        assert_eq!(bound.compare_against((&Some("0"), (&9, ()))), Greater);
    }

    #[test]
    fn ties_cascade_to_the_rest() {
        let bound = pair().bind((&Some("A"), (&1, ())));
        assert_eq!(bound.compare_against((&Some("A"), (&0, ()))), Greater);
        assert_eq!(bound.compare_against((&Some("A"), (&1, ()))), Equal);
        assert_eq!(bound.compare_against((&Some("A"), (&2, ()))), Less);
    }

    #[test]
    fn absent_sorts_before_present() {
        let present = pair().bind((&Some("A"), (&1, ())));
        let absent = pair().bind((&None, (&2, ())));
        assert_eq!(present.compare_against((&None, (&2, ()))), Greater);
        assert_eq!(absent.compare_against((&Some("A"), (&1, ()))), Less);
    }

    #[test]
    fn absent_ties_cascade_to_the_rest() {
        let absent = pair().bind((&None, (&2, ())));
        assert_eq!(absent.compare_against((&None, (&2, ()))), Equal);
        assert_eq!(absent.compare_against((&None, (&3, ()))), Less);
        assert_eq!(absent.compare_against((&None, (&1, ()))), Greater);
    }

    #[test]
    fn bound_comparison_is_reusable() {
        let bound = pair().bind((&Some("M"), (&0, ())));
        let others = [Some("A"), Some("M"), Some("Z"), None];
        let first = others
            .iter()
            .map(|other| bound.compare_against((other, (&0, ()))))
            .collect::<Vec<_>>();
        let second = others
            .iter()
            .map(|other| bound.compare_against((other, (&0, ()))))
            .collect::<Vec<_>>();
        assert_eq!(first, vec![Greater, Equal, Less, Greater]);
        assert_eq!(first, second);
    }
}
