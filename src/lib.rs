//! Composable lazy sequences
//!
//! This crate provides lazy sequences, adapters to combine them without materializing
//! intermediate results, and an in-place permutation generator.
//!
//! A [`Seq`] is a resumable producer. It can be driven push-style with a callback, see
//! [`Seq::drive`], or pulled from one element at a time, see [`Seq::pull`]. Either way, a sequence
//! produces nothing ahead of demand, and it is released exactly once when consumption ends.
//!
//! ```
//! use lazyseq::source::values;
//! use lazyseq::Seq;
//!
//! let evens = values(0..).filter(|x| x % 2 == 0).take(3).to_vec();
//! assert_eq!(evens, vec![0, 2, 4]);
//! ```
use std::ops::ControlFlow;

pub mod concat;
pub mod error;
pub mod fold;
pub mod ops;
pub mod perm;
pub mod seq;
pub mod source;
pub mod view;
pub mod zip;

pub use seq::{Pull, Seq, Seq2};

/// Whether a consumer wants further elements.
pub type Flow = ControlFlow<()>;

/// Ask for the next element.
pub const CONTINUE: Flow = ControlFlow::Continue(());

/// Stop consuming. No further elements are produced.
pub const STOP: Flow = ControlFlow::Break(());
