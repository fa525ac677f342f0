//! Conversions back and forth between flat tuples like `(A, B, C)` and their corresponding
//! inductive structures like `(A, (B, (C, ())))`.
//!
//! Comparator chains are built by induction over the second form, where the first element of a
//! tuple and the rest of it are simply the two halves of a pair, and `()` marks the end. Callers
//! only ever see the flat form. The traits here convert between the two equivalent
//! representations.
//!
//! At present, tuples up to size 10 are supported.

use super::unary::*;

/// Convert a tuple into its corresponding inductive list structure.
///
/// # Examples
///
/// ```
/// use tuple_order::tuple::{List, Tuple};
///
/// let list = ('a', 1, "b").into_list();
/// assert_eq!(list, ('a', (1, ("b", ()))));
/// assert_eq!(list.into_tuple(), ('a', 1, "b"));
/// ```
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;

    /// Convert this tuple into its inductive list.
    fn into_list(self) -> Self::AsList;
}

/// Convert an inductive list structure into its corresponding tuple.
pub trait List: Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;

    /// Convert this inductive list into its tuple.
    fn into_tuple(self) -> Self::AsTuple;
}

impl Tuple for () {
    type AsList = ();

    fn into_list(self) -> Self::AsList {}
}

impl List for () {
    type AsTuple = ();

    fn into_tuple(self) -> Self::AsTuple {}
}

/// Take the length of a type-level list as a unary type-level number.
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

tuple_order_macro::impl_tuples!(10);

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<(u8,) as Tuple>::AsList, (u8, ()));
    assert_type_eq_all!(<(u8, char, bool) as Tuple>::AsList, (u8, (char, (bool, ()))));
    assert_type_eq_all!(<(u8, (char, ())) as List>::AsTuple, (u8, char));
    assert_type_eq_all!(<(u8, (char, ())) as HasLength>::Length, S<S<Z>>);

    #[test]
    fn single_round_trips() {
        assert_eq!((5,).into_list(), (5, ()));
        assert_eq!((5, ()).into_tuple(), (5,));
    }

    #[test]
    fn decuple_round_trips() {
        let decuple = (1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
        let list = decuple.into_list();
        assert_eq!(list.0, 1);
        assert_eq!(((list.1).1).0, 3);
        assert_eq!(list.into_tuple(), decuple);
    }

    #[test]
    fn length_counts_every_field() {
        assert_eq!(<<() as HasLength>::Length as Unary>::VALUE, 0);
        type Seven = <(u8, u8, u8, u8, u8, u8, u8) as Tuple>::AsList;
        assert_eq!(<<Seven as HasLength>::Length as Unary>::VALUE, 7);
    }
}
