// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core traits for IDS generation
//!
//! These traits separate where rows come from and how a document is
//! produced from them.

use crate::{DocumentInfo, IdsVersion, OntologyInfo, Result, Row};

/// Producer of ontology rows
///
/// Implementations wrap whatever the table comes from (delimited text,
/// a query result, an in-memory fixture) and yield rows in source order.
pub trait RowSource {
    /// Read all rows, in source order
    fn rows(&mut self) -> Result<Vec<Row>>;
}

/// Document generation interface - entry point for producing IDS text
///
/// # Example
///
/// ```ignore
/// use onto2ids_model::{IdsGenerator, OntologyInfo, DocumentInfo};
///
/// let generator: Box<dyn IdsGenerator> = get_generator();
/// let xml = generator.generate(&rows, &ontology, &document)?;
/// ```
pub trait IdsGenerator: Send + Sync {
    /// IDS version of the produced documents
    fn ids_version(&self) -> IdsVersion;

    /// Generate a complete document
    ///
    /// # Arguments
    /// * `rows` - Ontology rows in source order
    /// * `ontology` - Data dictionary description; `DomainName` must be set
    /// * `document` - Header fields and target IFC version
    ///
    /// # Returns
    /// The serialized document, or an error raised before any output exists
    fn generate(&self, rows: &[Row], ontology: &OntologyInfo, document: &DocumentInfo)
        -> Result<String>;

    /// Pull rows from a source and generate a document from them
    fn generate_from(
        &self,
        source: &mut dyn RowSource,
        ontology: &OntologyInfo,
        document: &DocumentInfo,
    ) -> Result<String> {
        let rows = source.rows()?;
        self.generate(&rows, ontology, document)
    }
}
