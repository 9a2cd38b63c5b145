//! # lambars-sorted
//!
//! Set algebra over lazily produced sequences that are already sorted.
//!
//! ## Overview
//!
//! This library combines two ordered streams, such as the sorted keys of two
//! indexes, into a third ordered stream without materializing either input.
//! It includes:
//!
//! - **Sequences**: push-style consumption of any `IntoIterator` and a
//!   pull-style [`Cursor`](sequence::Cursor) with guaranteed release
//! - **Sorted Operations**: merge, union, intersect, subtract, each with a
//!   natural-order form and a comparator form
//!
//! ## Feature Flags
//!
//! - `ext`: the [`SortedSequence`](sorted::SortedSequence) extension trait
//!   (enabled by default)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_sorted::prelude::*;
//!
//! let first = vec![0, 1, 1];
//! let second = vec![1];
//!
//! let merged: Vec<i32> = merge(first.clone(), second.clone()).collect();
//! assert_eq!(merged, vec![0, 1, 1, 1]);
//!
//! let united: Vec<i32> = union(first, second).collect();
//! assert_eq!(united, vec![0, 1]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use lambars_sorted::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sequence::*;

    pub use crate::sorted::{
        Intersect, Merge, Natural, Subtract, Union, dedup_sink, intersect, intersect_by, merge,
        merge_by, subtract, subtract_by, union, union_by,
    };

    #[cfg(feature = "ext")]
    pub use crate::sorted::SortedSequence;
}

pub mod sequence;

pub mod sorted;
