// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! A two-variant union, [`Either`], along with combinators for chaining fallible computations
//! and aggregating ordered collections of them.
//!
//! By convention the [`Either::Left`] variant carries failure information and the
//! [`Either::Right`] variant carries a successful result. The type itself is unbiased; the
//! convention only shows up in the naming of the combinators, which treat `Left` as the
//! short-circuiting branch.

#![forbid(unsafe_code)]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(feature = "testing", test))]
pub mod testing;

pub mod aggregate;
pub mod either;
pub mod error;

#[cfg(feature = "alloc")]
pub use aggregate::{partition, sequence, traverse};
pub use either::{Either, Variant};
pub use error::Error;

#[macro_export]
#[doc(hidden)]
macro_rules! __tracing_noop__ {
    ($($fields:tt)*) => {};
}
