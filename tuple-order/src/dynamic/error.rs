use thiserror::Error;

/// An error arising when a dynamically typed row does not have the shape its comparator chain
/// expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The row has a different number of fields than the chain has steps.
    #[error("expected a row of {expected} fields, found {found}")]
    ArityMismatch {
        /// The number of steps in the chain.
        expected: usize,
        /// The number of fields in the row.
        found: usize,
    },
    /// A field of the row is not of the type its step compares.
    #[error("type mismatch at field {index}: expected `{expected}`, found `{found}`")]
    TypeMismatch {
        /// The position of the offending field, counting from zero.
        index: usize,
        /// The type compared by the step at this position.
        expected: &'static str,
        /// The type of the field found at this position.
        found: &'static str,
    },
}
