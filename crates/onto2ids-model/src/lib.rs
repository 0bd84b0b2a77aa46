// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! onto2ids Model - Shared types and traits for ontology-to-IDS generation
//!
//! This crate provides the vocabulary shared by row sources and document
//! generators: the ontology [`Row`], the two configuration objects, the
//! supported IDS/IFC versions and the cardinality encodings.
//!
//! # Architecture
//!
//! - [`RowSource`] - Producer of ontology rows (CSV, fixtures, ...)
//! - [`IdsGenerator`] - Turns rows plus configuration into IDS text
//! - [`Cardinality`] - Ontology bounds with their IDS 0.9.6 and 1.0 encodings
//!
//! # Example
//!
//! ```ignore
//! use onto2ids_model::{Row, OntologyInfo, DocumentInfo, IdsGenerator};
//!
//! let rows = vec![Row::class("http://o/C1", "Class1").with_property("Height", "IFCLENGTHMEASURE")];
//! let xml = generator.generate(&rows, &OntologyInfo::new("MyDict"), &document)?;
//! ```

pub mod cardinality;
pub mod error;
pub mod traits;
pub mod types;
pub mod version;

// Re-export all public types
pub use cardinality::*;
pub use error::*;
pub use traits::*;
pub use types::*;
pub use version::*;
