/* Pattern lattice's main file
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

//! An index from wildcard templates to items.
//!
//! A template is a fixed-length tuple where each slot is either a concrete
//! value or a wildcard, e.g. `(Editor, Ctrl+S)` or `(*, Ctrl+S)`. The
//! [`PatternIndex`] answers two kinds of question about the templates
//! registered with it:
//!
//! * which registered templates are at least as general as a query
//!   ([`MatchType::SUB_SET`]), i.e. which rules apply to a given input, and
//! * which registered templates are at least as specific as a query
//!   ([`MatchType::SUPER_SET`]), i.e. what falls inside a given category.
//!
//! ```
//! use pattern_lattice::{Dimension, MatchType, PatternIndex, Schema};
//!
//! let schema = Schema::new(vec!["context", "key"]).unwrap();
//! let mut index = PatternIndex::new();
//! index.add(schema.template_from_pairs(&[("context", "Editor"), ("key", "Ctrl+S")]).unwrap(), "save");
//! index.add(schema.template_from_pairs(&[("key", "Ctrl+S")]).unwrap(), "global-save");
//!
//! let query = schema
//!     .template(vec![Dimension::Concrete("Debugger"), Dimension::Concrete("Ctrl+S")])
//!     .unwrap();
//! let found = index.find_items(&query, MatchType::SUB_SET);
//! assert!(found.contains(&"global-save"));
//! assert!(!found.contains(&"save"));
//! ```
#![warn(missing_docs)]

#[macro_use]
extern crate log;

/// Internal macros for use in test assertions
#[cfg(test)]
#[macro_use]
mod test_macros;

mod index;
pub mod names;
mod schema;
pub mod shared;
mod template;
pub mod traits;
pub mod types;

pub use crate::index::{MatchType, PatternIndex};
pub use crate::names::{ValueCache, ValueName};
pub use crate::schema::Schema;
pub use crate::shared::SharedPatternIndex;
pub use crate::template::{Dimension, Template, TemplateError, WildcardTemplates, MAX_DIMENSIONS};
pub use crate::traits::Generalize;
