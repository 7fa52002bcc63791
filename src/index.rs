/* Pattern lattice
Copyright (C) 2018 Reed Koser
Pattern lattice is free software; you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by the Free
Software Foundation; either version 3 of the License, or (at your option) any
later version.

Pattern lattice is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
this program.  If not, see <http://www.gnu.org/licenses/>.  */

//! The pattern index handles matching templates against a registry of
//! templates, in either direction.

use crate::traits::Generalize;
use crate::types::{Map, Set};
use std::hash::Hash;

bitflags::bitflags! {
    /// Which direction(s) a query should look in
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct MatchType: u8 {
        /// Items registered under a template at least as general as the query.
        /// "Which rules apply to this input?"
        const SUB_SET = 0b01;
        /// Items registered under a template at least as specific as the query.
        /// "What falls inside this category?"
        const SUPER_SET = 0b10;
    }
}

/// Maps templates to sets of items and answers generalization queries over
/// them.
///
/// Every insert stores the item under its exact template, and also under every
/// template in the lattice of that template. That makes a `SUPER_SET` query a
/// single lookup, while a `SUB_SET` query walks the lattice of the query
/// instead.
#[derive(Clone, Debug)]
pub struct PatternIndex<T: Generalize, I: Clone + Eq + Hash> {
    /// Items keyed by the template they were registered under
    exact: Map<T, Set<I>>,
    /// Items keyed by every strict generalization of the template they were
    /// registered under
    generalized: Map<T, Set<I>>,
    /// Set by the first insert. Every later template must agree.
    arity: Option<usize>,
}

impl<T: Generalize, I: Clone + Eq + Hash> Default for PatternIndex<T, I> {
    fn default() -> Self {
        PatternIndex {
            exact: Map::default(),
            generalized: Map::default(),
            arity: None,
        }
    }
}

impl<T: Generalize, I: Clone + Eq + Hash> PatternIndex<T, I> {
    /// Create an empty index
    pub fn new() -> Self {
        Default::default()
    }

    /// Register `item` under `template`.
    /// Adding a pair that is already present has no effect.
    ///
    /// # Panics
    /// If `template` doesn't have the same number of dimensions as the
    /// templates already in the index.
    pub fn add(&mut self, template: T, item: I) {
        match self.arity {
            None => self.arity = Some(template.arity()),
            Some(arity) => assert!(
                arity == template.arity(),
                "template {:?} has {} dimensions, but this index holds templates with {}",
                template,
                template.arity(),
                arity
            ),
        }

        let mut materialized = 0usize;
        for wildcard in template.wildcard_templates() {
            self.generalized
                .entry(wildcard)
                .or_default()
                .insert(item.clone());
            materialized += 1;
        }
        debug!(
            "Registered item under {:?} and {} wildcard templates",
            template,
            materialized
        );

        self.exact.entry(template).or_default().insert(item);
    }

    /// Get every item whose template is related to `query` in the way `mode`
    /// asks for. Asking for both directions returns the union.
    pub fn find_items(&self, query: &T, mode: MatchType) -> Set<I> {
        let mut tr = Set::default();

        if let Some(arity) = self.arity {
            if arity != query.arity() {
                warn!(
                    "Query {:?} has {} dimensions but the index holds templates with {}",
                    query,
                    query.arity(),
                    arity
                );
                return tr;
            }
        }

        if mode.intersects(MatchType::SUB_SET | MatchType::SUPER_SET) {
            collect_bucket(&self.exact, query, &mut tr);
        }

        if mode.contains(MatchType::SUB_SET) {
            let mut probes = 0usize;
            for wildcard in query.wildcard_templates() {
                collect_bucket(&self.exact, &wildcard, &mut tr);
                probes += 1;
            }
            trace!("Sub-set search on {:?} took {} probes", query, probes);
        }

        if mode.contains(MatchType::SUPER_SET) {
            collect_bucket(&self.generalized, query, &mut tr);
        }

        tr
    }

    /// Remove `item` from every template it was registered under.
    /// Once nothing is left, the index accepts templates of any arity again.
    /// Returns true if the item was present at all.
    pub fn remove(&mut self, item: &I) -> bool {
        let exact = remove_from(&mut self.exact, item);
        let generalized = remove_from(&mut self.generalized, item);
        debug!(
            "Removed item from {} exact and {} wildcard templates",
            exact, generalized
        );
        if self.exact.is_empty() {
            self.arity = None;
        }
        exact > 0
    }

    /// Drop every registration
    pub fn clear(&mut self) {
        debug!(
            "Clearing index with {} exact and {} wildcard templates",
            self.exact.len(),
            self.generalized.len()
        );
        self.exact = Map::default();
        self.generalized = Map::default();
        self.arity = None;
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    /// Is `item` registered under any template?
    pub fn contains(&self, item: &I) -> bool {
        self.exact.values().any(|items| items.contains(item))
    }

    /// Iterate over the templates that have at least one item registered
    pub fn templates(&self) -> impl Iterator<Item = &T> {
        self.exact.keys()
    }

    /// Get every template `item` was registered under
    pub fn templates_for(&self, item: &I) -> Vec<T> {
        self.exact
            .iter()
            .filter(|(_, items)| items.contains(item))
            .map(|(template, _)| template.clone())
            .collect()
    }

    /// Number of dimensions of the templates in this index, if any have been
    /// added yet
    pub fn arity(&self) -> Option<usize> {
        self.arity
    }
}

/// Union the bucket stored under `key` into `into`
fn collect_bucket<T: Generalize, I: Clone + Eq + Hash>(
    map: &Map<T, Set<I>>,
    key: &T,
    into: &mut Set<I>,
) {
    if let Some(items) = map.get(key) {
        into.extend(items.iter().cloned());
    }
}

/// Take `item` out of every bucket in `map`, dropping buckets that end up
/// empty. Returns how many buckets held the item.
fn remove_from<T: Generalize, I: Clone + Eq + Hash>(map: &mut Map<T, Set<I>>, item: &I) -> usize {
    let keys: Vec<T> = map
        .iter()
        .filter(|(_, items)| items.contains(item))
        .map(|(template, _)| template.clone())
        .collect();

    for key in keys.iter() {
        if let Some(mut items) = map.remove(key) {
            items.remove(item);
            if !items.is_empty() {
                map.insert(key.clone(), items);
            }
        }
    }

    keys.len()
}
