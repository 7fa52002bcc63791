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

//! Traits describing what the index needs from its keys

use std::fmt::Debug;
use std::hash::Hash;

/// Something that can stand in for a template key inside a
/// [`PatternIndex`](crate::PatternIndex).
///
/// Implementors must keep `Eq` and `Hash` consistent, and
/// [`wildcard_templates`](Generalize::wildcard_templates) must be a pure
/// function of `self`: the index stores its output on insert and recomputes it
/// for queries, so any drift between the two silently loses matches.
pub trait Generalize: Clone + Eq + Hash + Debug {
    /// Iterator over the strict generalizations of a template
    type Wildcards: Iterator<Item = Self>;

    /// Number of dimensions in this template
    fn arity(&self) -> usize;

    /// Every template strictly more general than `self`.
    /// `self` is never part of the output, and no template appears twice.
    fn wildcard_templates(&self) -> Self::Wildcards;

    /// Does `self` match everything `other` matches?
    /// Reflexive, so `t.generalizes(&t)` always holds.
    fn generalizes(&self, other: &Self) -> bool;
}
