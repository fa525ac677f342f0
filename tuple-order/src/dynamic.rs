//! Comparator chains assembled at runtime, for rows whose shape is only known once the program is
//! running.
//!
//! A [`DynOrder`] is a linked list of comparison steps, each comparing fields of one concrete
//! type, built the same way as its static counterpart in [`order`](mod@crate::order): from the
//! [`terminal`](DynOrder::terminal) step, [`prepend`](DynOrder::prepend)ing one step per field
//! from the last to the first. Rows are vectors of boxed [`DynField`]s. Since the compiler cannot
//! check that a row matches its chain, [`bind`](DynOrder::bind) checks the arity and the type of
//! every field, and rejects a mismatched row with an [`Error`] instead of ordering it.
//!
//! ```
//! use std::cmp::Ordering;
//! use tuple_order::{dynamic::DynOrder, row};
//!
//! # fn main() -> Result<(), tuple_order::dynamic::Error> {
//! let order = DynOrder::terminal().prepend::<i32>().prepend::<Option<&str>>();
//!
//! let a = order.bind(row![Some("A"), 1])?;
//! let b = order.bind(row![Some("A"), 2])?;
//! assert_eq!(a.try_compare(&b)?, Ordering::Less);
//!
//! assert!(order.bind(row![Some("A"), "one"]).is_err());
//! # Ok(())
//! # }
//! ```

use std::{
    any::{self, Any},
    cmp::Ordering,
    fmt,
    marker::PhantomData,
    sync::Arc,
};

use crate::field::{self, Field};

mod error;
pub use error::Error;

/// A dynamically typed field value.
///
/// This is implemented for every [`Field`] which is also [`Any`], [`Debug`](fmt::Debug),
/// [`Send`] and [`Sync`].
pub trait DynField: Any + fmt::Debug + Send + Sync {
    /// The name of the concrete type of this field.
    fn type_name(&self) -> &'static str;

    /// Upcast to [`Any`], to downcast to the concrete type.
    fn as_any(&self) -> &(dyn Any + 'static);
}

impl<T: Field + Any + fmt::Debug + Send + Sync> DynField for T {
    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }

    fn as_any(&self) -> &(dyn Any + 'static) {
        self
    }
}

/// A row of dynamically typed fields.
pub type Row = Vec<Box<dyn DynField>>;

/// Box a single field for use in a [`Row`].
pub fn field<T: DynField>(value: T) -> Box<dyn DynField> {
    Box::new(value)
}

/// Construct a [`Row`] from a list of field values.
///
/// # Examples
///
/// ```
/// use tuple_order::row;
///
/// let row = row![Some("A"), 1, 'x'];
/// assert_eq!(row.len(), 3);
/// ```
#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::dynamic::field($value)),*]
    };
}

/// A comparison step for fields of a single concrete type.
trait Step: fmt::Debug + Send + Sync {
    fn type_name(&self) -> &'static str;

    fn accepts(&self, value: &dyn DynField) -> bool;

    fn compare(
        &self,
        index: usize,
        this: &dyn DynField,
        other: &dyn DynField,
    ) -> Result<Ordering, Error>;
}

struct FieldStep<T>(PhantomData<fn() -> T>);

impl<T> fmt::Debug for FieldStep<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FieldStep<{}>", any::type_name::<T>())
    }
}

impl<T: Field + Any> FieldStep<T> {
    fn downcast<'a>(&self, index: usize, value: &'a dyn DynField) -> Result<&'a T, Error> {
        value
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| Error::TypeMismatch {
                index,
                expected: self.type_name(),
                found: value.type_name(),
            })
    }
}

impl<T: Field + Any> Step for FieldStep<T> {
    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }

    fn accepts(&self, value: &dyn DynField) -> bool {
        value.as_any().is::<T>()
    }

    fn compare(
        &self,
        index: usize,
        this: &dyn DynField,
        other: &dyn DynField,
    ) -> Result<Ordering, Error> {
        Ok(field::compare(
            self.downcast(index, this)?,
            self.downcast(index, other)?,
        ))
    }
}

#[derive(Debug, Clone)]
enum Link {
    End,
    Order { step: Arc<dyn Step>, rest: Arc<Link> },
}

/// A comparator chain built at runtime.
///
/// Cloning a `DynOrder` is cheap: its steps are shared and never mutated.
#[derive(Debug, Clone)]
pub struct DynOrder(Link);

impl Default for DynOrder {
    fn default() -> Self {
        DynOrder::terminal()
    }
}

impl DynOrder {
    /// The terminal chain, for a row with no fields left to compare.
    pub fn terminal() -> Self {
        DynOrder(Link::End)
    }

    /// Prepend a step for a field of type `T`, yielding the chain for a row one field longer
    /// whose first field is a `T`.
    pub fn prepend<T>(self) -> Self
    where
        T: Field + Any + fmt::Debug + Send + Sync,
    {
        DynOrder(Link::Order {
            step: Arc::new(FieldStep::<T>(PhantomData)),
            rest: Arc::new(self.0),
        })
    }

    fn steps(&self) -> impl Iterator<Item = &(dyn Step + 'static)> + '_ {
        let mut link = &self.0;
        std::iter::from_fn(move || match link {
            Link::End => None,
            Link::Order { step, rest } => {
                link = &**rest;
                Some(&**step)
            }
        })
    }

    /// The number of fields this chain compares.
    pub fn arity(&self) -> usize {
        self.steps().count()
    }

    /// The names of the field types this chain compares, from first to last.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuple_order::dynamic::DynOrder;
    ///
    /// let order = DynOrder::terminal().prepend::<u8>().prepend::<char>();
    /// assert_eq!(order.field_types(), vec!["char", "u8"]);
    /// ```
    pub fn field_types(&self) -> Vec<&'static str> {
        self.steps().map(Step::type_name).collect()
    }

    fn check(&self, row: &[Box<dyn DynField>]) -> Result<(), Error> {
        let expected = self.arity();
        if row.len() != expected {
            return Err(Error::ArityMismatch {
                expected,
                found: row.len(),
            });
        }
        for (index, (step, value)) in self.steps().zip(row).enumerate() {
            if !step.accepts(&**value) {
                return Err(Error::TypeMismatch {
                    index,
                    expected: step.type_name(),
                    found: value.type_name(),
                });
            }
        }
        Ok(())
    }

    /// Check that `row` has exactly the fields this chain compares, and pair it with this chain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArityMismatch`] if the row is longer or shorter than the chain, or
    /// [`Error::TypeMismatch`] for the first field whose type differs from its step's.
    pub fn bind(&self, row: Row) -> Result<DynOrdered, Error> {
        log::trace!("binding row {:?} to {:?}", row, self.field_types());
        match self.check(&row) {
            Ok(()) => Ok(DynOrdered {
                row,
                order: self.clone(),
            }),
            Err(err) => {
                log::debug!("rejected row {:?}: {}", row, err);
                Err(err)
            }
        }
    }

    /// Bind every row to this chain, then sort them.
    ///
    /// # Errors
    ///
    /// Fails on the first row that [`bind`](DynOrder::bind) rejects; no rows are returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuple_order::{dynamic::DynOrder, row};
    ///
    /// let order = DynOrder::terminal().prepend::<i32>().prepend::<&str>();
    /// let sorted = order
    ///     .sort(vec![row!["B", 1], row!["A", 2], row!["A", 1]])
    ///     .unwrap();
    /// let debug = sorted.iter().map(|r| format!("{:?}", r.row())).collect::<Vec<_>>();
    /// assert_eq!(debug, vec![r#"["A", 1]"#, r#"["A", 2]"#, r#"["B", 1]"#]);
    /// ```
    pub fn sort<I>(&self, rows: I) -> Result<Vec<DynOrdered>, Error>
    where
        I: IntoIterator<Item = Row>,
    {
        let mut bound = rows
            .into_iter()
            .map(|row| self.bind(row))
            .collect::<Result<Vec<_>, _>>()?;
        log::trace!("sorting {} rows by {:?}", bound.len(), self.field_types());

        let mut failure = None;
        bound.sort_by(|a, b| {
            a.try_compare(b).unwrap_or_else(|err| {
                let _ = failure.get_or_insert(err);
                Ordering::Equal
            })
        });
        match failure {
            Some(err) => Err(err),
            None => Ok(bound),
        }
    }
}

/// A row paired with the runtime comparator chain it was checked against.
#[derive(Debug)]
pub struct DynOrdered {
    row: Row,
    order: DynOrder,
}

impl DynOrdered {
    /// The ordered row.
    pub fn row(&self) -> &[Box<dyn DynField>] {
        &self.row
    }

    /// Unwrap the ordered row.
    pub fn into_row(self) -> Row {
        self.row
    }

    /// The chain this row was checked against.
    pub fn order(&self) -> &DynOrder {
        &self.order
    }

    /// Compare this row against `other`, field by field from the left: absent fields sort before
    /// present ones, and ties cascade to the next field.
    ///
    /// # Errors
    ///
    /// Both rows must have been bound to chains of the same shape. Otherwise this returns
    /// [`Error::ArityMismatch`] or [`Error::TypeMismatch`] describing how `other` differs, before
    /// comparing any field.
    pub fn try_compare(&self, other: &DynOrdered) -> Result<Ordering, Error> {
        self.order.check(&other.row)?;
        for (index, (step, (this, other))) in self
            .order
            .steps()
            .zip(self.row.iter().zip(&other.row))
            .enumerate()
        {
            match step.compare(index, &**this, &**other)? {
                Ordering::Equal => continue,
                unequal => return Ok(unequal),
            }
        }
        Ok(Ordering::Equal)
    }
}
