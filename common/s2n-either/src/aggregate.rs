// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Operations over ordered collections of [`Either`] values
//!
//! The short-circuiting operations report the first `Left` in iteration order and stop pulling
//! items from the input as soon as it is found. Errors are never accumulated.

use crate::either::Either;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(all(test, feature = "alloc"))]
mod tests;

#[cfg(feature = "aggregate-tracing")]
#[doc(hidden)]
pub use tracing::debug as _debug;

#[cfg(not(feature = "aggregate-tracing"))]
#[doc(hidden)]
pub use crate::__tracing_noop__ as _debug;

/// Collects every `Right` payload in order, or returns the first `Left`
///
/// Returns `Right(vec![])` for an empty input. No item after the first `Left` is pulled from
/// `values`.
#[cfg(feature = "alloc")]
#[inline]
pub fn sequence<L, R, I>(values: I) -> Either<L, Vec<R>>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    values.into_iter().collect()
}

/// Applies `f` to each value in order and collects the `Right` results, or returns the first
/// `Left` produced by `f`
///
/// This is equivalent to calling [`sequence`] on the mapped values, but makes a single pass
/// and never calls `f` on values after the first failure.
#[cfg(feature = "alloc")]
#[inline]
pub fn traverse<A, L, B, I, F>(values: I, f: F) -> Either<L, Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Either<L, B>,
{
    values.into_iter().map(f).collect()
}

/// Splits the values into their `Left` and `Right` payloads
///
/// Unlike [`sequence`], this consumes the entire input. The relative order of each side is
/// preserved.
#[cfg(feature = "alloc")]
pub fn partition<L, R, I>(values: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();

    for value in values {
        match value {
            Either::Left(value) => lefts.push(value),
            Either::Right(value) => rights.push(value),
        }
    }

    (lefts, rights)
}

impl<L, R, C> FromIterator<Either<L, R>> for Either<L, C>
where
    C: FromIterator<R>,
{
    /// Collects the `Right` payloads into `C`, stopping at the first `Left`
    #[inline]
    fn from_iter<I: IntoIterator<Item = Either<L, R>>>(iter: I) -> Self {
        let mut residual = None;

        let collection = Shunt {
            iter: iter.into_iter(),
            residual: &mut residual,
            position: 0,
        }
        .collect();

        match residual {
            Some(value) => Either::Left(value),
            None => Either::Right(collection),
        }
    }
}

/// Yields `Right` payloads until the first `Left`, which is stored in `residual`
struct Shunt<'a, I, L> {
    iter: I,
    residual: &'a mut Option<L>,
    #[cfg_attr(not(feature = "aggregate-tracing"), allow(dead_code))]
    position: usize,
}

impl<I, L, R> Iterator for Shunt<'_, I, L>
where
    I: Iterator<Item = Either<L, R>>,
{
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<R> {
        // the collection may keep polling after we've returned `None`
        if self.residual.is_some() {
            return None;
        }

        match self.iter.next()? {
            Either::Left(value) => {
                _debug!(position = self.position, "short-circuited on left value");
                *self.residual = Some(value);
                None
            }
            Either::Right(value) => {
                self.position += 1;
                Some(value)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.residual.is_some() {
            (0, Some(0))
        } else {
            // any item could be a `Left` so the lower bound is always zero
            let (_, upper) = self.iter.size_hint();
            (0, upper)
        }
    }
}
