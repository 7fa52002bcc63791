//! Interning for string-valued dimensions.
//!
//! Templates are hashed on every insert and probed many times per query, so
//! keeping their dimension values as small `Copy` handles instead of strings
//! pays off quickly.

use crate::template::Dimension;
use string_interner::DefaultStringInterner as StringInterner;
use string_interner::Sym;

/// Type representing an opaque interned dimension value.
/// It is a logical bug to share these between caches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct ValueName(Sym);

/// Cache of every dimension value seen so far.
/// There should usually only be one of these per index.
#[derive(Default, Debug, Clone)]
pub struct ValueCache {
    values: StringInterner,
}

impl ValueCache {
    /// Intern a value
    pub fn intern_value(&mut self, value: String) -> ValueName {
        let sym = self.values.get_or_intern(value);
        trace!("Intern value {:?} as {:?}", self.values.resolve(sym), sym);
        ValueName(sym)
    }

    /// Try to get a value that has already been interned
    pub fn value(&self, value: &str) -> Option<ValueName> {
        self.values.get(value).map(ValueName)
    }

    /// Get the string behind an interned value
    pub fn resolve_value(&self, value: ValueName) -> Option<&str> {
        self.values.resolve(value.0)
    }

    /// Intern a value and wrap it up as a concrete dimension
    pub fn concrete(&mut self, value: &str) -> Dimension<ValueName> {
        Dimension::Concrete(self.intern_value(value.into()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn intern_is_stable() {
        crate::test::setup();
        let mut cache = ValueCache::default();

        let a = cache.intern_value("Editor".into());
        let b = cache.intern_value("Ctrl+S".into());
        assert_ne!(a, b);
        assert_eq!(cache.intern_value("Editor".into()), a);
        assert_eq!(cache.value("Ctrl+S"), Some(b));
        assert_eq!(cache.value("Debugger"), None);
        assert_eq!(cache.resolve_value(a), Some("Editor"));
    }

    #[test]
    fn concrete_dimension() {
        let mut cache = ValueCache::default();
        let dimension = cache.concrete("Editor");
        assert_eq!(Some(dimension), cache.value("Editor").map(Dimension::Concrete));
    }
}
