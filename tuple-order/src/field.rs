//! Tuple elements which may be *absent*, and which otherwise carry a totally ordered value.
//!
//! Every element of an [`Ordered`](crate::Ordered) tuple must implement [`Field`]. A field is
//! either absent, in which case it sorts before every present value, or present, in which case it
//! is compared to other present values by the [`Ord`] implementation of its
//! [`Value`](Field::Value).
//!
//! [`Option<T>`] is the canonical absent-able field: `None` is absent. The standard library's
//! ordered types (integers, [`String`], [`str`], [`char`], [`Vec`], ...) are always present. Any
//! other [`Ord`] type can be used either by wrapping it in [`Present`] or by implementing
//! [`Field`] for it directly:
//!
//! ```
//! use tuple_order::field::Field;
//!
//! #[derive(PartialEq, Eq, PartialOrd, Ord)]
//! struct Priority(u8);
//!
//! impl Field for Priority {
//!     type Value = Self;
//!
//!     fn value(&self) -> Option<&Self> {
//!         Some(self)
//!     }
//! }
//! ```

use std::{
    borrow::Cow,
    cmp::{Ordering, Reverse},
    collections::{BTreeMap, BTreeSet, VecDeque},
    rc::Rc,
    sync::Arc,
    time::{Duration, Instant, SystemTime},
};

/// An element of a tuple which may be absent, and is otherwise ordered by its
/// [`Value`](Field::Value).
pub trait Field {
    /// The type of the present value, which supplies the intrinsic total order of this field.
    type Value: Ord + ?Sized;

    /// The present value of this field, or `None` if it is absent.
    fn value(&self) -> Option<&Self::Value>;
}

/// Compare two fields: absent sorts before present, and present values compare by their
/// [`Ord`] implementation.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use tuple_order::field::compare;
///
/// assert_eq!(compare(&None::<u8>, &Some(0)), Ordering::Less);
/// assert_eq!(compare(&Some(0_u8), &None), Ordering::Greater);
/// assert_eq!(compare(&None::<u8>, &None), Ordering::Equal);
/// assert_eq!(compare(&Some(1_u8), &Some(0)), Ordering::Greater);
/// ```
pub fn compare<F: Field + ?Sized>(left: &F, right: &F) -> Ordering {
    compare_values(left.value(), right.value())
}

/// Compare two possibly absent field values: absent sorts before present, and present values
/// compare by their [`Ord`] implementation.
pub fn compare_values<V: Ord + ?Sized>(left: Option<&V>, right: Option<&V>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => left.cmp(right),
    }
}

/// A field which is always present, wrapping any [`Ord`] type.
///
/// # Examples
///
/// ```
/// use tuple_order::{field::Present, order};
///
/// #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
/// enum Level { Low, High }
///
/// assert!(order((Present(Level::Low), 9)) < order((Present(Level::High), 0)));
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Present<T>(pub T);

impl<T> Present<T> {
    /// Unwrap the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Ord> Field for Present<T> {
    type Value = T;

    fn value(&self) -> Option<&T> {
        Some(&self.0)
    }
}

impl<T: Ord> Field for Option<T> {
    type Value = T;

    fn value(&self) -> Option<&T> {
        self.as_ref()
    }
}

macro_rules! present {
    ($($t:ty),* $(,)?) => {
        $(
            impl Field for $t {
                type Value = Self;

                fn value(&self) -> Option<&Self> {
                    Some(self)
                }
            }
        )*
    };
}

present!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    str,
    String,
    Duration,
    Instant,
    SystemTime,
    Ordering,
);

macro_rules! present_generic {
    ($(<$($p:ident),*> $t:ty),* $(,)?) => {
        $(
            impl<$($p: Ord),*> Field for $t {
                type Value = Self;

                fn value(&self) -> Option<&Self> {
                    Some(self)
                }
            }
        )*
    };
}

present_generic!(
    <T> [T],
    <T> Vec<T>,
    <T> VecDeque<T>,
    <T> BTreeSet<T>,
    <K, V> BTreeMap<K, V>,
    <T> Reverse<T>,
);

impl<T: Ord, const N: usize> Field for [T; N] {
    type Value = Self;

    fn value(&self) -> Option<&Self> {
        Some(self)
    }
}

impl<'a, B> Field for Cow<'a, B>
where
    B: Field + ToOwned + ?Sized,
{
    type Value = B::Value;

    fn value(&self) -> Option<&B::Value> {
        B::value(self)
    }
}

macro_rules! forward {
    ($(<$p:ident> $t:ty),* $(,)?) => {
        $(
            impl<$p: Field + ?Sized> Field for $t {
                type Value = $p::Value;

                fn value(&self) -> Option<&$p::Value> {
                    $p::value(self)
                }
            }
        )*
    };
}

forward!(<T> &T, <T> &mut T, <T> Box<T>, <T> Rc<T>, <T> Arc<T>);
