/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::array;

use super::Region;

/// One optional value for every [`Region`].
///
/// Regions that were never assigned read as `None`.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PerRegion<T> {
    inner: [Option<T>; Region::COUNT],
}

impl<T> PerRegion<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: array::from_fn(|_| None),
        }
    }

    #[must_use]
    pub fn get(&self, region: Region) -> Option<&T> {
        self.inner[region.index()].as_ref()
    }

    pub fn get_mut(&mut self, region: Region) -> Option<&mut T> {
        self.inner[region.index()].as_mut()
    }

    /// Stores `value` for `region`, returning the previous one.
    pub fn set(&mut self, region: Region, value: T) -> Option<T> {
        self.inner[region.index()].replace(value)
    }

    pub fn with(mut self, region: Region, value: T) -> Self {
        self.set(region, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Region, Option<&T>)> {
        Region::ALL.into_iter().zip(self.inner.iter().map(Option::as_ref))
    }

    /// Only the regions that hold a value.
    pub fn present(&self) -> impl Iterator<Item = (Region, &T)> {
        self.iter().filter_map(|(region, x)| x.map(|x| (region, x)))
    }

    #[must_use]
    pub fn has_all(&self) -> bool {
        self.inner.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn has_none(&self) -> bool {
        self.inner.iter().all(Option::is_none)
    }

    pub fn map<U, F>(&self, mut f: F) -> PerRegion<U>
    where
        F: FnMut(&T) -> U,
    {
        PerRegion {
            inner: array::from_fn(|i| self.inner[i].as_ref().map(&mut f)),
        }
    }
}

impl<T> Default for PerRegion<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(Region, T)> for PerRegion<T> {
    fn from_iter<I: IntoIterator<Item = (Region, T)>>(iter: I) -> Self {
        let mut slf = Self::new();
        for (region, value) in iter {
            slf.set(region, value);
        }
        slf
    }
}

impl<T> Extend<(Region, T)> for PerRegion<T> {
    fn extend<I: IntoIterator<Item = (Region, T)>>(&mut self, iter: I) {
        for (region, value) in iter {
            self.set(region, value);
        }
    }
}
