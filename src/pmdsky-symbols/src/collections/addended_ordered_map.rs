/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::collections::btree_map::{self, BTreeMap};
use core::ops::RangeBounds;

use crate::addresses::{Address, SizedAddress};

pub type Range<'a, K, V> = btree_map::Range<'a, K, V>;

/// An ordered map keyed by address where a lookup may land inside a value
/// instead of exactly on its key.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct AddendedOrderedMap<K, V>
where
    K: Ord,
    V: SizedAddress,
{
    inner: BTreeMap<K, V>,
}

impl<K, V> AddendedOrderedMap<K, V>
where
    K: Ord,
    V: SizedAddress,
{
    pub const fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }
}

impl<V> AddendedOrderedMap<Address, V>
where
    V: SizedAddress,
{
    fn find_entry(&self, key: &Address, settings: FindSettings) -> Option<(&Address, &V)> {
        if !settings.allow_addend {
            self.inner.get_key_value(key)
        } else {
            let mut range = self.inner.range(..=key);

            if let Some((other_key, v)) = range.next_back() {
                if other_key == key {
                    Some((other_key, v))
                } else if let Some(siz) = v.size() {
                    if key.is_within(other_key, &siz) {
                        Some((other_key, v))
                    } else {
                        None
                    }
                } else if !settings.reject_sizeless_addended {
                    Some((other_key, v))
                } else {
                    None
                }
            } else {
                None
            }
        }
    }

    #[must_use]
    pub fn find_key(&self, key: &Address, settings: FindSettings) -> Option<Address> {
        self.find_entry(key, settings).map(|(k, _)| *k)
    }

    pub fn find_mut_or_insert_with<F>(
        &mut self,
        key: Address,
        settings: FindSettings,
        default: F,
    ) -> &mut V
    where
        F: FnOnce() -> (Address, V),
    {
        match self.find_key(&key, settings) {
            // The entry already exists, so `default` is never called here.
            Some(existing) => self.inner.entry(existing).or_insert_with(|| default().1),
            None => {
                let (k, v) = default();
                self.inner.entry(k).or_insert(v)
            }
        }
    }

}

impl<K, V> AddendedOrderedMap<K, V>
where
    K: Ord,
    V: SizedAddress,
{
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn range<R>(&self, range: R) -> Range<'_, K, V>
    where
        R: RangeBounds<K>,
    {
        self.inner.range(range)
    }
}

impl<K, V> Default for AddendedOrderedMap<K, V>
where
    K: Ord,
    V: SizedAddress,
{
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FindSettings {
    allow_addend: bool,
    reject_sizeless_addended: bool,
}

impl FindSettings {
    pub const fn new(allow_addend: bool) -> Self {
        Self {
            allow_addend,
            reject_sizeless_addended: true,
        }
    }

    pub const fn allow_addend(&self) -> bool {
        self.allow_addend
    }

    pub const fn reject_sizeless_addended(&self) -> bool {
        self.reject_sizeless_addended
    }

    pub const fn with_reject_sizeless_addended(self, reject_sizeless_addended: bool) -> Self {
        Self {
            reject_sizeless_addended,
            ..self
        }
    }
}

impl Default for FindSettings {
    fn default() -> Self {
        Self::new(false)
    }
}
