/*!
A total, lexicographic order over fixed-arity tuples of heterogeneous fields, where any field may
be *absent* and absent fields sort before present ones.

Wrap a tuple with [`order()`] (or [`Ordered::new`]) to get an [`Ordered`] value which implements
[`Ord`], and so can be sorted, deduplicated, or used as the key of a
[`BTreeSet`](std::collections::BTreeSet) or [`BTreeMap`](std::collections::BTreeMap):

```
use tuple_order::order;

let mut rows = vec![
    order((Some("B"), 1)),
    order((Some("A"), 2)),
    order((None, 3)),
    order((Some("A"), 1)),
];
rows.sort();

let tuples = rows.into_iter().map(|o| o.into_tuple()).collect::<Vec<_>>();
assert_eq!(
    tuples,
    vec![(None, 3), (Some("A"), 1), (Some("A"), 2), (Some("B"), 1)]
);
```

Two tuples are compared field by field from the left. The first pair of fields that differ decides
the result; fields that tie, including two absent fields, defer to the next field; and if every
field ties, the tuples are equal. Whether a field can be absent, and how its present values are
ordered, is decided by its [`Field`](field::Field) implementation: [`Option`] is absent when it is
`None`, while ordinary [`Ord`] types are always present.

# How it works

Every tuple arity from 1 to 10 shares a single generic implementation. A tuple's shape is first
converted to an inductive list `(A, (B, (C, ())))` by the traits in [`tuple`], and from that list
the [`order`](mod@order) module builds a *comparator chain*: one zero-sized step per field, ending
in a terminal step. Comparing two tuples binds the chain to the fields of one of them and then
walks the fields of the other against it. Since chains are types, comparing tuples of different
shapes is a compile-time error.

When the shape of a row is only known at runtime, the [`dynamic`] module offers the same order
over vectors of boxed fields, checking each row against its chain when it is bound.
*/

#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod field;
pub mod order;
pub mod tuple;
pub mod unary;

#[cfg(feature = "dynamic")]
#[cfg_attr(docsrs, doc(cfg(feature = "dynamic")))]
pub mod dynamic;

mod ordered;

pub use ordered::{order, Orderable, Ordered};

/// The prelude module for quickly getting started with ordered tuples.
///
/// This module is designed to be imported as `use tuple_order::prelude::*;`.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::field::{Field, Present};
    #[doc(no_inline)]
    pub use crate::order::Chain;
    #[doc(no_inline)]
    pub use crate::{order, Orderable, Ordered};
}
