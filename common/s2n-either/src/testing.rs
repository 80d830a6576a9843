// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use core::cell::Cell;

/// Counts how many times a callback was invoked
///
/// Used to check that combinators call their closures lazily and stop calling them once the
/// result has been determined.
#[derive(Debug, Default)]
pub struct CallCounter {
    count: Cell<usize>,
}

impl CallCounter {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of recorded calls
    #[inline]
    pub fn count(&self) -> usize {
        self.count.get()
    }

    #[inline]
    pub fn record(&self) {
        self.count.set(self.count.get() + 1);
    }

    /// Wraps a single-argument callback so each call is recorded
    #[inline]
    pub fn wrap<'a, A, B, F>(&'a self, mut f: F) -> impl FnMut(A) -> B + 'a
    where
        F: FnMut(A) -> B + 'a,
    {
        move |value| {
            self.record();
            f(value)
        }
    }

    /// Wraps a thunk so its evaluation is recorded
    #[inline]
    pub fn thunk<'a, T, F>(&'a self, f: F) -> impl FnOnce() -> T + 'a
    where
        F: FnOnce() -> T + 'a,
    {
        move || {
            self.record();
            f()
        }
    }
}
