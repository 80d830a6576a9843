// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::either::Variant;
use core::fmt;

/// Errors returned by the checked accessors on [`Either`](crate::Either)
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
#[non_exhaustive]
pub enum Error {
    /// A single-variant accessor was called on a value holding the other variant
    InvalidVariantAccess { expected: Variant, actual: Variant },
}

impl Error {
    #[inline]
    pub(crate) const fn invalid_variant_access(expected: Variant) -> Self {
        Self::InvalidVariantAccess {
            expected,
            actual: expected.opposite(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVariantAccess { expected, actual } => {
                write!(f, "expected a {expected} value but found a {actual} value")
            }
        }
    }
}

#[cfg(all(feature = "std", not(feature = "thiserror")))]
impl std::error::Error for Error {}
