// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! onto2ids Builder - Ontology tables to buildingSMART IDS
//!
//! This crate turns ontology rows into an IDS document. It implements the
//! traits defined in `onto2ids-model`.
//!
//! # Features
//!
//! - **Both IDS dialects** (0.9.6 and 1.0) from one builder driven by a [`Dialect`]
//! - **First-seen class grouping** of rows
//! - **Static IFC class catalogs** for IFC2X3, IFC4 and IFC4X3
//! - **Escaped XML output** through a small element tree
//! - **CSV row source** for tables exported from ontology queries
//!
//! # Example
//!
//! ```ignore
//! use onto2ids_builder::IdsBuilder;
//! use onto2ids_model::{IdsGenerator, IdsVersion};
//!
//! let builder = IdsBuilder::new(IdsVersion::V1_0);
//! let xml = builder.generate(&rows, &ontology, &document)?;
//! ```

pub mod catalog;
pub mod dialect;
mod document;
mod grouper;
mod rows;
pub mod xml;

pub use dialect::Dialect;
pub use document::{local_name, BuildOptions, DocumentBuilder};
pub use grouper::{group_by, group_by_class, RowGroup};
pub use rows::{read_rows, CsvRowSource};

use onto2ids_model::{DocumentInfo, IdsGenerator, IdsVersion, OntologyInfo, Result, Row};

/// Main generator implementing `IdsGenerator`
#[derive(Clone, Copy, Debug, Default)]
pub struct IdsBuilder {
    /// Target IDS version
    pub version: IdsVersion,
    pub options: BuildOptions,
}

impl IdsBuilder {
    /// Create a generator with default options
    pub fn new(version: IdsVersion) -> Self {
        Self {
            version,
            options: BuildOptions::default(),
        }
    }

    /// Tolerate `ifcVersion` literals the dialect does not know
    pub fn allow_unknown_ifc_version(mut self, enabled: bool) -> Self {
        self.options.allow_unknown_ifc_version = enabled;
        self
    }

    /// Write property URIs where the dialect supports them
    pub fn emit_property_uri(mut self, enabled: bool) -> Self {
        self.options.emit_property_uri = enabled;
        self
    }

    /// Dialect of the target version
    pub fn dialect(&self) -> &'static Dialect {
        Dialect::of(self.version)
    }
}

impl IdsGenerator for IdsBuilder {
    fn ids_version(&self) -> IdsVersion {
        self.version
    }

    fn generate(
        &self,
        rows: &[Row],
        ontology: &OntologyInfo,
        document: &DocumentInfo,
    ) -> Result<String> {
        let builder =
            DocumentBuilder::new(self.dialect(), ontology, document).with_options(self.options);
        let groups = group_by_class(rows);
        Ok(builder.build(&groups)?.to_string())
    }
}

/// Quick generate function for simple use cases
pub fn generate(
    rows: &[Row],
    ontology: &OntologyInfo,
    document: &DocumentInfo,
    version: IdsVersion,
) -> Result<String> {
    IdsBuilder::new(version).generate(rows, ontology, document)
}
