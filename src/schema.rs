//! Named dimensions for a use site of the index.
//!
//! A [`Schema`] pins down how many dimensions the templates at one use site
//! have and what each of them means, so that malformed templates get rejected
//! when they are built instead of silently never matching anything.

use crate::template::{Dimension, Template, TemplateError, MAX_DIMENSIONS};

/// The dimension layout shared by every template of one index
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    names: Vec<String>,
}

impl Schema {
    /// Create a schema from a list of dimension names, in order
    pub fn new<I, S>(names: I) -> Result<Schema, TemplateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tr = Schema { names: Vec::new() };
        for name in names {
            let name = name.into();
            if tr.names.contains(&name) {
                return Err(TemplateError::DuplicateDimension(name));
            }
            tr.names.push(name);
        }
        if tr.names.len() > MAX_DIMENSIONS {
            return Err(TemplateError::TooManyDimensions {
                found: tr.names.len(),
                max: MAX_DIMENSIONS,
            });
        }
        Ok(tr)
    }

    /// Number of dimensions every template must have
    pub fn arity(&self) -> usize {
        self.names.len()
    }

    /// The dimension names, in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Index of the dimension called `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Build a template, checking that it has the right number of dimensions
    pub fn template<V>(&self, dimensions: Vec<Dimension<V>>) -> Result<Template<V>, TemplateError> {
        if dimensions.len() != self.arity() {
            return Err(TemplateError::ArityMismatch {
                expected: self.arity(),
                found: dimensions.len(),
            });
        }
        Template::new(dimensions)
    }

    /// Build a template by naming the concrete dimensions.
    /// Any dimension not mentioned is a wildcard.
    pub fn template_from_pairs<V: Clone>(
        &self,
        pairs: &[(&str, V)],
    ) -> Result<Template<V>, TemplateError> {
        let mut dimensions = vec![Dimension::Wildcard; self.arity()];
        for (name, value) in pairs {
            let index = self
                .position(name)
                .ok_or_else(|| TemplateError::UnknownDimension((*name).to_string()))?;
            if !dimensions[index].is_wildcard() {
                return Err(TemplateError::DuplicateDimension((*name).to_string()));
            }
            dimensions[index] = Dimension::Concrete(value.clone());
        }
        Template::new(dimensions)
    }

    /// The all-wildcard template for this schema
    pub fn universal<V>(&self) -> Template<V> {
        let dimensions = (0..self.arity()).map(|_| Dimension::Wildcard).collect();
        match Template::new(dimensions) {
            Ok(t) => t,
            Err(e) => unreachable!("schema arity was validated on construction: {}", e),
        }
    }
}
