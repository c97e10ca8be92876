#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::missing_panics_doc,
    clippy::todo
)]

#[cfg(test)]
mod tests;

mod consumer;
mod error;
mod iter;
mod predicate;
mod seq;
mod size;
mod source;
mod terminal;
mod transform;

pub use consumer::{AndThen, Consumer};
pub use error::{Error, Result};
pub use iter::SeqIter;
pub use predicate::{And, IsEqual, Not, Or, Predicate, is_equal};
pub use seq::Seq;
pub use size::Size;
pub use source::PullSource;
pub use transform::{Compose, Identity, Then, Transform, identity};

/// Capacity reserved for collecting a sequence whose size is unknown.
pub const UNKNOWN_SIZE_CAPACITY: usize = 10;
