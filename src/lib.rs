//! Lazy, chainable sequences of key/value pairs.
//!
//! A [`Sequence`] wraps a single-pass [`Producer`] of `(key, value)` pairs.
//! Operators such as [`Sequence::map`], [`Sequence::filter`] and
//! [`Sequence::slice`] build new sequences without touching any data; terminal
//! operations such as [`Sequence::to_array`] or [`Sequence::sum`] drive the
//! whole chain one pair at a time.
//!
//! ```
//! use collect::{array, Sequence};
//!
//! let mut evens_doubled = Sequence::new(vec![1, 2, 3, 4])?
//!     .filter(|value, _| value.as_i64().is_some_and(|i| i % 2 == 1))
//!     .map(|value, _| (value.as_i64().unwrap_or(0) * 2).into());
//! assert_eq!(evens_doubled.to_array()?, array![1 => 4, 3 => 8]);
//! # Ok::<(), collect::Error>(())
//! ```

pub mod error;
mod ops;
pub mod options;
pub mod sequence;
pub mod value;

pub use error::{Error, Result};
pub use options::Strictness;
pub use sequence::{ApplyOutput, Generator, IntoSource, Pair, Producer, Sequence, Source};
pub use value::{Array, ArrayKey, Float, Integer, Value};
