// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::error::Error;
#[cfg(any(test, feature = "generator"))]
use bolero_generator::prelude::*;
use core::fmt;


/// A value which holds exactly one of two possible types
///
/// The type makes no assumption about which side represents success. The combinators on this
/// type follow the usual convention of treating `Left` as the failure branch, which
/// short-circuits, and `Right` as the success branch, which continues. Code that needs the
/// opposite convention can [`flip`](Self::flip) the value first.
///
/// Instances are never modified by the combinators; every operation consumes the value and
/// returns a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(any(test, feature = "generator"), derive(TypeGenerator))]
pub enum Either<L, R> {
    /// Holds a value of the first type, which is the failure branch by convention
    Left(L),
    /// Holds a value of the second type, which is the success branch by convention
    Right(R),
}

/// Names one of the two variants of an [`Either`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(any(test, feature = "generator"), derive(TypeGenerator))]
pub enum Variant {
    Left,
    Right,
}

impl Variant {
    /// Returns the other variant
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("Left"),
            Self::Right => f.write_str("Right"),
        }
    }
}

impl<L, R> Either<L, R> {
    /// Returns `true` if the value is a `Left`
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if the value is a `Right`
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns the variant currently held
    #[inline]
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Left(_) => Variant::Left,
            Self::Right(_) => Variant::Right,
        }
    }

    /// Converts the value into an `Option` holding the `Left` payload
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the value into an `Option` holding the `Right` payload
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns the `Left` payload, or [`Error::InvalidVariantAccess`] if the value is a `Right`
    #[inline]
    pub fn try_left(self) -> Result<L, Error> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(Error::invalid_variant_access(Variant::Left)),
        }
    }

    /// Returns the `Right` payload, or [`Error::InvalidVariantAccess`] if the value is a `Left`
    #[inline]
    pub fn try_right(self) -> Result<R, Error> {
        match self {
            Self::Left(_) => Err(Error::invalid_variant_access(Variant::Right)),
            Self::Right(value) => Ok(value),
        }
    }

    /// Returns the `Left` payload
    ///
    /// # Panics
    ///
    /// The value MUST be a `Left`. Otherwise this panics with the
    /// [`Error::InvalidVariantAccess`] message.
    #[inline]
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        match self.try_left() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the `Right` payload
    ///
    /// # Panics
    ///
    /// The value MUST be a `Right`. Otherwise this panics with the
    /// [`Error::InvalidVariantAccess`] message.
    #[inline]
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        match self.try_right() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Borrows the payload of whichever variant is held
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Mutably borrows the payload of whichever variant is held
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies `f` to a `Right` payload, leaving a `Left` untouched
    ///
    /// `f` is only called if the value is a `Right`.
    #[inline]
    pub fn map<B, F>(self, f: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(f(value)),
        }
    }

    /// Applies `f` to a `Left` payload, leaving a `Right` untouched
    #[inline]
    pub fn map_left<B, F>(self, f: F) -> Either<B, R>
    where
        F: FnOnce(L) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(f(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies `on_left` or `on_right` depending on the variant held
    #[inline]
    pub fn map_either<A, B, F, G>(self, on_left: F, on_right: G) -> Either<A, B>
    where
        F: FnOnce(L) -> A,
        G: FnOnce(R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(on_left(value)),
            Self::Right(value) => Either::Right(on_right(value)),
        }
    }

    /// Chains a computation that depends on the `Right` payload
    ///
    /// The result of `f` is returned as-is. A `Left` is converted into the error type of `f`
    /// without calling `f`, which allows chaining computations with a wider error type.
    #[inline]
    pub fn flat_map<LL, B, F>(self, f: F) -> Either<LL, B>
    where
        L: Into<LL>,
        F: FnOnce(R) -> Either<LL, B>,
    {
        match self {
            Self::Left(value) => Either::Left(value.into()),
            Self::Right(value) => f(value),
        }
    }

    /// Returns the value if it is a `Right`, otherwise evaluates `alternative`
    ///
    /// `alternative` is never called on a `Right`.
    #[inline]
    pub fn or_else<LL, RR, F>(self, alternative: F) -> Either<LL, RR>
    where
        R: Into<RR>,
        F: FnOnce() -> Either<LL, RR>,
    {
        match self {
            Self::Left(_) => alternative(),
            Self::Right(value) => Either::Right(value.into()),
        }
    }

    /// Folds both variants into a single value
    #[inline]
    pub fn either<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Swaps the two variants
    #[inline]
    pub fn flip(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns the `Right` payload or `default`
    #[inline]
    pub fn right_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Returns the `Right` payload or computes one from the `Left` payload
    #[inline]
    pub fn right_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => f(value),
            Self::Right(value) => value,
        }
    }

    /// Returns the `Left` payload or `default`
    #[inline]
    pub fn left_or(self, default: L) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => default,
        }
    }

    /// Returns the `Left` payload or computes one from the `Right` payload
    #[inline]
    pub fn left_or_else<F>(self, f: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(value) => f(value),
        }
    }

    /// Returns `true` if the value is a `Right` equal to `value`
    #[inline]
    pub fn contains<T>(&self, value: &T) -> bool
    where
        R: PartialEq<T>,
    {
        match self {
            Self::Left(_) => false,
            Self::Right(actual) => actual == value,
        }
    }

    /// Returns `true` if the value is a `Right` and `predicate` holds for it
    #[inline]
    pub fn exists<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&R) -> bool,
    {
        match self {
            Self::Left(_) => false,
            Self::Right(value) => predicate(value),
        }
    }

    /// Returns `true` if the value is a `Left` or `predicate` holds for the `Right` payload
    #[inline]
    pub fn for_all<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&R) -> bool,
    {
        match self {
            Self::Left(_) => true,
            Self::Right(value) => predicate(value),
        }
    }

    /// Keeps a `Right` which satisfies `predicate`, otherwise replaces it with `Left(zero())`
    ///
    /// A `Left` is returned unchanged and neither closure is called.
    #[inline]
    pub fn filter_or_else<F, Z>(self, predicate: F, zero: Z) -> Self
    where
        F: FnOnce(&R) -> bool,
        Z: FnOnce() -> L,
    {
        match self {
            Self::Left(value) => Self::Left(value),
            Self::Right(value) => {
                if predicate(&value) {
                    Self::Right(value)
                } else {
                    Self::Left(zero())
                }
            }
        }
    }

    /// Builds a `Right` from `right` if `test` holds, otherwise a `Left` from `left`
    ///
    /// Only the selected closure is called.
    #[inline]
    pub fn cond<F, G>(test: bool, right: F, left: G) -> Self
    where
        F: FnOnce() -> R,
        G: FnOnce() -> L,
    {
        if test {
            Self::Right(right())
        } else {
            Self::Left(left())
        }
    }

    /// Converts the value into a `Result`, mapping `Right` to `Ok` and `Left` to `Err`
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.into()
    }
}

impl<T> Either<T, T> {
    /// Returns the payload of whichever variant is held
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Flattens a nested `Either` held in the `Right` variant
    #[inline]
    pub fn join_right(self) -> Either<L, R> {
        self.flat_map(|inner| inner)
    }
}

impl<L, R> Either<Either<L, R>, R> {
    /// Flattens a nested `Either` held in the `Left` variant
    #[inline]
    pub fn join_left(self) -> Either<L, R> {
        match self {
            Self::Left(inner) => inner,
            Self::Right(value) => Either::Right(value),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(value) => Self::Left(value),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
