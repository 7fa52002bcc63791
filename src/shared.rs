//! Thread-safe shared index wrapper.
//!
//! Bindings tend to get registered from one place and looked up from many, so
//! lookups only take a read lock.

use crate::index::{MatchType, PatternIndex};
use crate::traits::Generalize;
use crate::types::Set;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// A [`PatternIndex`] behind an `Arc<RwLock>`.
/// Clones share the same underlying index.
pub struct SharedPatternIndex<T: Generalize, I: Clone + Eq + Hash>(Arc<RwLock<PatternIndex<T, I>>>);

impl<T: Generalize, I: Clone + Eq + Hash> SharedPatternIndex<T, I> {
    /// Wrap an existing index
    pub fn new(index: PatternIndex<T, I>) -> Self {
        SharedPatternIndex(Arc::new(RwLock::new(index)))
    }

    /// See [`PatternIndex::add`]
    pub fn add(&self, template: T, item: I) {
        self.0.write().add(template, item)
    }

    /// See [`PatternIndex::remove`]
    pub fn remove(&self, item: &I) -> bool {
        self.0.write().remove(item)
    }

    /// See [`PatternIndex::clear`]
    pub fn clear(&self) {
        self.0.write().clear()
    }

    /// See [`PatternIndex::find_items`]
    pub fn find_items(&self, query: &T, mode: MatchType) -> Set<I> {
        self.0.read().find_items(query, mode)
    }

    /// Copy out the current state.
    /// The copy shares structure with the live index, so this is cheap, and
    /// later changes to either side don't show up in the other.
    pub fn snapshot(&self) -> PatternIndex<T, I> {
        self.0.read().clone()
    }

    /// Get read access to the index
    pub fn read(&self) -> RwLockReadGuard<'_, PatternIndex<T, I>> {
        self.0.read()
    }

    /// Get write access to the index, for doing several updates at once
    pub fn write(&self) -> RwLockWriteGuard<'_, PatternIndex<T, I>> {
        self.0.write()
    }
}

impl<T: Generalize, I: Clone + Eq + Hash> Default for SharedPatternIndex<T, I> {
    fn default() -> Self {
        SharedPatternIndex::new(PatternIndex::default())
    }
}

impl<T: Generalize, I: Clone + Eq + Hash> Clone for SharedPatternIndex<T, I> {
    fn clone(&self) -> Self {
        SharedPatternIndex(Arc::clone(&self.0))
    }
}

impl<T: Generalize, I: Clone + Eq + Hash + fmt::Debug> fmt::Debug for SharedPatternIndex<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedPatternIndex({:?})", &*self.0.read())
    }
}
