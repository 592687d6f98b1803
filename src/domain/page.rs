// SPDX-License-Identifier: MPL-2.0
//! Page numbering value objects.
//!
//! Pages are 1-based. Both types wrap a [`NonZeroU32`] so that "page 0" and
//! "a document with zero pages" cannot be represented.

use std::fmt;
use std::num::NonZeroU32;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates a page number, returning `None` for zero.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Returns the page number as a plain integer.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the following page, or `None` when it would pass `total`.
    #[must_use]
    pub fn next_within(self, total: PageCount) -> Option<Self> {
        let next = self.0.checked_add(1)?;
        (next <= total.0).then_some(Self(next))
    }

    /// Returns the preceding page, or `None` on the first page.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }

    /// Returns whether this page exists in a document of `total` pages.
    #[must_use]
    pub fn is_within(self, total: PageCount) -> bool {
        self.0 <= total.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of pages in a loaded document. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageCount(NonZeroU32);

impl PageCount {
    /// Creates a page count, returning `None` for an empty document.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the last page of the document.
    #[must_use]
    pub fn last_page(self) -> PageNumber {
        PageNumber(self.0)
    }
}

impl fmt::Display for PageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
