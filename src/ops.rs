//! Lazy operators. Each one consumes a [`Sequence`](crate::Sequence) and
//! returns a new one whose producer pulls from the old producer on demand.

mod append;
mod concat;
mod filter;
mod flip;
mod keys;
mod map;
mod replace;
mod slice;
