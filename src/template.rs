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

//! Templates: fixed-length tuples of dimension values, some of which may be
//! wildcards.

use crate::traits::Generalize;
use failure::Fail;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Largest number of dimensions a template may have.
/// The lattice of a template grows as `2^c`, so this also bounds the amount of
/// work a single insert can trigger.
pub const MAX_DIMENSIONS: usize = 16;

/// A single slot in a template
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension<V> {
    /// Matches any value in this slot
    Wildcard,
    /// Matches exactly this value
    Concrete(V),
}

impl<V> Dimension<V> {
    /// Is this slot a wildcard?
    pub fn is_wildcard(&self) -> bool {
        match self {
            Dimension::Wildcard => true,
            Dimension::Concrete(_) => false,
        }
    }

    /// Get the concrete value in this slot, if there is one
    pub fn concrete(&self) -> Option<&V> {
        match self {
            Dimension::Wildcard => None,
            Dimension::Concrete(v) => Some(v),
        }
    }
}

impl<V: PartialEq> Dimension<V> {
    /// Does this slot accept whatever `other` holds?
    pub fn matches(&self, other: &Dimension<V>) -> bool {
        match (self, other) {
            (Dimension::Wildcard, _) => true,
            (Dimension::Concrete(a), Dimension::Concrete(b)) => a == b,
            (Dimension::Concrete(_), Dimension::Wildcard) => false,
        }
    }
}

impl<V> From<V> for Dimension<V> {
    fn from(v: V) -> Dimension<V> {
        Dimension::Concrete(v)
    }
}

impl<V> From<Option<V>> for Dimension<V> {
    fn from(v: Option<V>) -> Dimension<V> {
        match v {
            Some(v) => Dimension::Concrete(v),
            None => Dimension::Wildcard,
        }
    }
}

impl<V: fmt::Display> fmt::Display for Dimension<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Wildcard => write!(f, "*"),
            Dimension::Concrete(v) => write!(f, "{}", v),
        }
    }
}

/// Ways that building a template (or a schema describing templates) can go
/// wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateError {
    /// More dimensions than [`MAX_DIMENSIONS`]
    TooManyDimensions {
        /// How many dimensions were supplied
        found: usize,
        /// The limit
        max: usize,
    },
    /// The template doesn't have as many dimensions as the schema it was
    /// checked against
    ArityMismatch {
        /// Arity of the schema
        expected: usize,
        /// Arity of the offending template
        found: usize,
    },
    /// A dimension name that the schema doesn't know about
    UnknownDimension(String),
    /// The same dimension name was given twice
    DuplicateDimension(String),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            TemplateError::TooManyDimensions { found, max } => write!(
                f,
                "template has {} dimensions, at most {} are supported",
                found, max
            ),
            TemplateError::ArityMismatch { expected, found } => write!(
                f,
                "expected a template with {} dimensions, got {}",
                expected, found
            ),
            TemplateError::UnknownDimension(name) => write!(f, "unknown dimension {:?}", name),
            TemplateError::DuplicateDimension(name) => {
                write!(f, "dimension {:?} given more than once", name)
            }
        }
    }
}

impl Fail for TemplateError {}

/// An immutable tuple of dimension values.
/// Equality and hashing are element-wise. Cloning is cheap: the dimensions live
/// behind an `Arc`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Template<V> {
    dimensions: Arc<[Dimension<V>]>,
}

impl<V> Template<V> {
    /// Build a template from its dimensions
    pub fn new(dimensions: Vec<Dimension<V>>) -> Result<Template<V>, TemplateError> {
        if dimensions.len() > MAX_DIMENSIONS {
            return Err(TemplateError::TooManyDimensions {
                found: dimensions.len(),
                max: MAX_DIMENSIONS,
            });
        }
        Ok(Template {
            dimensions: dimensions.into(),
        })
    }

    /// The template that matches everything, with `arity` wildcard dimensions
    pub fn universal(arity: usize) -> Result<Template<V>, TemplateError> {
        Template::new((0..arity).map(|_| Dimension::Wildcard).collect())
    }

    /// Get the list of dimensions backing this template
    pub fn dimensions(&self) -> &[Dimension<V>] {
        &self.dimensions
    }

    /// Get a single dimension
    pub fn get(&self, index: usize) -> Option<&Dimension<V>> {
        self.dimensions.get(index)
    }

    /// Number of dimensions
    pub fn arity(&self) -> usize {
        self.dimensions.len()
    }

    /// Number of dimensions holding a concrete value
    pub fn concrete_count(&self) -> usize {
        self.dimensions.iter().filter(|d| !d.is_wildcard()).count()
    }

    /// True if no dimension is a wildcard
    pub fn is_fully_concrete(&self) -> bool {
        self.dimensions.iter().all(|d| !d.is_wildcard())
    }

    /// True if every dimension is a wildcard
    pub fn is_universal(&self) -> bool {
        self.dimensions.iter().all(Dimension::is_wildcard)
    }
}

impl<V: Clone> Template<V> {
    /// Enumerate every template strictly more general than this one
    pub fn wildcard_templates(&self) -> WildcardTemplates<V> {
        let concrete: Vec<usize> = self
            .dimensions
            .iter()
            .enumerate()
            .filter(|(_, d)| !d.is_wildcard())
            .map(|(i, _)| i)
            .collect();
        WildcardTemplates {
            end: 1u32 << concrete.len(),
            base: self.clone(),
            concrete,
            mask: 1,
        }
    }
}

impl<V: PartialEq> Template<V> {
    /// Does this template match everything `other` matches?
    /// Templates of different arity are never related.
    pub fn generalizes(&self, other: &Template<V>) -> bool {
        self.arity() == other.arity()
            && self
                .dimensions
                .iter()
                .zip(other.dimensions.iter())
                .all(|(a, b)| a.matches(b))
    }
}

impl<V: Clone + Eq + Hash + fmt::Debug> Generalize for Template<V> {
    type Wildcards = WildcardTemplates<V>;

    fn arity(&self) -> usize {
        Template::arity(self)
    }

    fn wildcard_templates(&self) -> WildcardTemplates<V> {
        Template::wildcard_templates(self)
    }

    fn generalizes(&self, other: &Self) -> bool {
        Template::generalizes(self, other)
    }
}

impl<V: fmt::Display> fmt::Display for Template<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        let mut sep = "";
        for dimension in self.dimensions.iter() {
            write!(f, "{}{}", sep, dimension)?;
            sep = ", ";
        }
        write!(f, ")")
    }
}

/// Iterator over the lattice of a template.
///
/// Each non-zero bitmask over the template's concrete dimensions selects which
/// of them get replaced by a wildcard, so a template with `c` concrete
/// dimensions yields exactly `2^c - 1` generalizations.
#[derive(Clone, Debug)]
pub struct WildcardTemplates<V> {
    base: Template<V>,
    /// Indices of the concrete dimensions in `base`
    concrete: Vec<usize>,
    mask: u32,
    end: u32,
}

impl<V: Clone> Iterator for WildcardTemplates<V> {
    type Item = Template<V>;

    fn next(&mut self) -> Option<Template<V>> {
        if self.mask >= self.end {
            return None;
        }

        let mut dimensions = self.base.dimensions.to_vec();
        for (bit, &index) in self.concrete.iter().enumerate() {
            if self.mask & (1 << bit) != 0 {
                dimensions[index] = Dimension::Wildcard;
            }
        }
        self.mask += 1;

        Some(Template {
            dimensions: dimensions.into(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.mask) as usize;
        (remaining, Some(remaining))
    }
}

impl<V: Clone> ExactSizeIterator for WildcardTemplates<V> {}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn t(dims: &[Option<&'static str>]) -> Template<&'static str> {
        assert_ok!(Template::new(dims.iter().cloned().map(Dimension::from).collect()))
    }

    #[test]
    fn fully_concrete_lattice() {
        let base = t(&[Some("Editor"), Some("Ctrl+S")]);
        assert!(base.is_fully_concrete());
        assert_eq!(base.get(0).and_then(Dimension::concrete), Some(&"Editor"));
        let lattice: HashSet<_> = base.wildcard_templates().collect();

        let expected: HashSet<_> = vec![
            t(&[None, Some("Ctrl+S")]),
            t(&[Some("Editor"), None]),
            t(&[None, None]),
        ]
        .into_iter()
        .collect();
        assert_eq!(lattice, expected);
    }

    #[test]
    fn partially_wildcarded_lattice() {
        let base = t(&[None, Some("Ctrl+S"), Some("Text")]);
        let lattice: Vec<_> = base.wildcard_templates().collect();

        assert_eq!(lattice.len(), 3);
        assert!(lattice.iter().all(|g| g.get(0) == Some(&Dimension::Wildcard)));
        assert_eq!(Dimension::<&str>::Wildcard.concrete(), None);
        assert!(lattice.contains(&t(&[None, None, None])));
    }

    #[test]
    fn universal_template_has_empty_lattice() {
        let universal: Template<&str> = assert_ok!(Template::universal(4));
        assert!(universal.is_universal());
        assert_eq!(universal.wildcard_templates().count(), 0);
        assert_eq!(universal.wildcard_templates().len(), 0);
        assert!(!universal.is_fully_concrete());
    }

    #[test]
    fn exact_size() {
        let base = t(&[Some("a"), Some("b"), None, Some("c")]);
        let mut it = base.wildcard_templates();
        assert_eq!(it.len(), 7);
        it.next();
        assert_eq!(it.len(), 6);
    }

    #[test]
    fn too_many_dimensions() {
        let dims = vec![Dimension::Concrete(1u8); MAX_DIMENSIONS + 1];
        let err = assert_err!(Template::new(dims));
        assert_eq!(
            err,
            TemplateError::TooManyDimensions {
                found: MAX_DIMENSIONS + 1,
                max: MAX_DIMENSIONS
            }
        );
    }

    #[test]
    fn generalization_is_reflexive_and_directed() {
        let specific = t(&[Some("Editor"), Some("Ctrl+S")]);
        let broad = t(&[None, Some("Ctrl+S")]);

        assert!(specific.generalizes(&specific));
        assert!(broad.generalizes(&specific));
        assert!(!specific.generalizes(&broad));
        assert!(!t(&[None]).generalizes(&broad));
    }

    #[test]
    fn display() {
        let template = t(&[Some("Editor"), None, Some("Ctrl+S")]);
        assert_eq!(template.to_string(), "(Editor, *, Ctrl+S)");
        assert_eq!(t(&[]).to_string(), "()");
    }

    fn arb_template() -> impl Strategy<Value = Template<u8>> {
        prop::collection::vec(prop::option::of(0u8..4), 0..7).prop_map(|dims| {
            Template::<u8>::new(dims.into_iter().map(Dimension::from).collect())
                .expect("arity is below the maximum")
        })
    }

    proptest! {
        #[test]
        fn lattice_is_every_strict_generalization(base in arb_template()) {
            let lattice: Vec<_> = base.wildcard_templates().collect();
            let unique: HashSet<_> = lattice.iter().cloned().collect();

            prop_assert_eq!(lattice.len(), (1usize << base.concrete_count()) - 1);
            prop_assert_eq!(unique.len(), lattice.len());
            for g in &lattice {
                prop_assert!(g.generalizes(&base));
                prop_assert!(g != &base);
            }
        }

        #[test]
        fn lattice_is_complete(base in arb_template(), other in arb_template()) {
            if other != base && other.generalizes(&base) {
                prop_assert!(base.wildcard_templates().any(|g| g == other));
            }
        }
    }
}
