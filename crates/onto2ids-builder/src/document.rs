// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Document assembly
//!
//! The document is one fixed classification specification followed by one
//! specification per class group. Configuration is validated before any
//! element is built, so a failing call never yields a partial document.

use crate::catalog;
use crate::dialect::{Attributes, Dialect, OccursPlacement};
use crate::grouper::RowGroup;
use crate::xml::{XmlDocument, XmlElement};
use log::{debug, warn};
use onto2ids_model::{DocumentInfo, IdsError, IfcVersion, OntologyInfo, Result, Row};
use serde::{Deserialize, Serialize};

/// Switches for behaviour that deviates from the strict default
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildOptions {
    /// Emit an empty entity enumeration for an unrecognized `ifcVersion`
    /// instead of failing
    pub allow_unknown_ifc_version: bool,
    /// Add `uri` to property facets when the dialect supports it
    pub emit_property_uri: bool,
}

/// Trailing fragment of a URI: after the last `#`, else after the last `/`
pub fn local_name(uri: &str) -> &str {
    match uri.rfind('#') {
        Some(idx) => &uri[idx + 1..],
        None => uri.rsplit('/').next().unwrap_or(uri),
    }
}

/// Builds the document tree for one dialect
pub struct DocumentBuilder<'a> {
    dialect: &'static Dialect,
    ontology: &'a OntologyInfo,
    document: &'a DocumentInfo,
    options: BuildOptions,
}

impl<'a> DocumentBuilder<'a> {
    pub fn new(
        dialect: &'static Dialect,
        ontology: &'a OntologyInfo,
        document: &'a DocumentInfo,
    ) -> Self {
        Self {
            dialect,
            ontology,
            document,
            options: BuildOptions::default(),
        }
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Check the configuration and resolve the target IFC version
    ///
    /// `Ok(None)` means the version is unknown but tolerated.
    pub fn validate(&self) -> Result<Option<IfcVersion>> {
        if self.domain().trim().is_empty() {
            return Err(IdsError::MissingDomainName);
        }

        let ids_version = self.dialect.version;
        match ids_version.parse_ifc_version(&self.document.ifc_version) {
            Some(version) => Ok(Some(version)),
            None if self.options.allow_unknown_ifc_version => {
                warn!(
                    "ifcVersion {:?} is not known to IDS {}; entity enumeration will be empty",
                    self.document.ifc_version, ids_version
                );
                Ok(None)
            }
            None => Err(IdsError::UnsupportedIfcVersion {
                version: self.document.ifc_version.clone(),
                ids_version: ids_version.to_string(),
                expected: ids_version.expected_ifc_versions(),
            }),
        }
    }

    /// Build the complete document from grouped rows
    pub fn build(&self, groups: &[RowGroup<'_>]) -> Result<XmlDocument> {
        let ifc_version = self.validate()?;

        let mut specifications = XmlElement::new(self.dialect.element("specifications"));
        specifications.push(self.classification_specification(ifc_version));
        for group in groups {
            specifications.push(self.class_specification(group, ifc_version));
        }

        let root = with_attributes(self.el("ids"), self.dialect.root_attributes())
            .child(self.info())
            .child(specifications);

        debug!(
            "built IDS {} document with {} class specifications",
            self.dialect.version,
            groups.len()
        );
        Ok(XmlDocument::new(self.dialect.xml_declaration, root))
    }

    fn domain(&self) -> &str {
        &self.ontology.domain_name
    }

    fn el(&self, local: &str) -> XmlElement {
        XmlElement::new(self.dialect.element(local))
    }

    fn simple_value(&self, value: &str) -> XmlElement {
        self.el("simpleValue").text(value)
    }

    /// `<local><simpleValue>value</simpleValue></local>`
    fn wrapped_value(&self, local: &str, value: &str) -> XmlElement {
        self.el(local).child(self.simple_value(value))
    }

    /// Entity facet restricting the name to the given values
    fn entity(&self, names: &[&str]) -> XmlElement {
        self.el("entity")
            .child(self.el("name").child(restriction(names.iter().copied())))
    }

    fn info(&self) -> XmlElement {
        let doc = self.document;
        let mut info = self.el("info").child(self.el("title").text(doc.title.as_str()));
        if let Some(version) = doc.version() {
            info.push(self.el("version").text(version));
        }
        if let Some(description) = doc.description() {
            info.push(self.el("description").text(description));
        }
        info.child(self.el("author").text(doc.author.as_str()))
            .child(self.el("date").text(doc.date.as_str()))
    }

    /// Specification skeleton; occurrence bounds land where the dialect wants them
    fn specification(
        &self,
        name: String,
        description: String,
        applicability: XmlElement,
        requirements: XmlElement,
    ) -> XmlElement {
        let mut spec = self
            .el("specification")
            .attr("ifcVersion", self.document.ifc_version.as_str())
            .attr("name", name);
        let mut applicability_el = self.el("applicability");

        match self.dialect.occurs_on {
            OccursPlacement::Specification => {
                spec = spec.attr("minOccurs", "0").attr("maxOccurs", "unbounded");
            }
            OccursPlacement::Applicability => {
                applicability_el = applicability_el
                    .attr("minOccurs", "0")
                    .attr("maxOccurs", "unbounded");
            }
        }

        spec.attr("description", description)
            .child(applicability_el.child(applicability))
            .child(requirements)
    }

    pub(crate) fn classification_specification(
        &self,
        ifc_version: Option<IfcVersion>,
    ) -> XmlElement {
        let names = ifc_version.map(catalog::names_for).unwrap_or(&[]);
        let requirement = with_attributes(self.el("classification"), self.dialect.mandatory())
            .child(self.wrapped_value("system", self.domain()));

        self.specification(
            format!("{} - Classification", self.domain()),
            format!(
                "All objects are required to be classified according to the data dictionary {}",
                self.domain()
            ),
            self.entity(names),
            self.el("requirements").child(requirement),
        )
    }

    pub(crate) fn class_specification(
        &self,
        group: &RowGroup<'_>,
        ifc_version: Option<IfcVersion>,
    ) -> XmlElement {
        let label = group.class_label();
        for (field, kept, ignored) in group.conflicts() {
            warn!(
                "class {}: {field} {ignored:?} differs from first row {kept:?}; keeping {kept:?}",
                group.key()
            );
        }

        let classification = self
            .el("classification")
            .child(self.wrapped_value("value", local_name(group.key())))
            .child(self.wrapped_value("system", self.domain()));

        let mut requirements = self.el("requirements");
        if let Some(ifc_class) = group.ifc_class_label() {
            if let Some(version) = ifc_version {
                if !catalog::contains(version, ifc_class) {
                    warn!(
                        "class {}: {ifc_class} is not an entity of {version:?}",
                        group.key()
                    );
                }
            }
            requirements.push(self.entity(&[ifc_class]));
        }
        for row in group.property_rows() {
            requirements.push(self.property(row));
        }

        debug!(
            "specification for {} with {} properties",
            group.key(),
            group.property_rows().count()
        );
        self.specification(
            format!("{} - {}", self.domain(), label),
            format!("Requirements for: {label}"),
            classification,
            requirements,
        )
    }

    pub(crate) fn property(&self, row: &Row) -> XmlElement {
        let mut attributes: Attributes =
            vec![(self.dialect.datatype_attribute, row.datatype().to_string())];
        attributes.extend(self.dialect.cardinality(row.cardinality()));
        if self.options.emit_property_uri && self.dialect.supports_property_uri {
            if let Some(uri) = row.property_uri() {
                attributes.push(("uri", uri.to_string()));
            }
        }

        let label = row.property_label().unwrap_or_default();
        let mut property = with_attributes(self.el("property"), attributes)
            .child(self.wrapped_value("propertySet", self.domain()))
            .child(self.wrapped_value(self.dialect.property_name_element, label));
        if let Some(values) = row.enum_values() {
            property.push(self.el("value").child(restriction(values)));
        }
        property
    }
}

fn with_attributes(element: XmlElement, attributes: Attributes) -> XmlElement {
    attributes
        .into_iter()
        .fold(element, |el, (name, value)| el.attr(name, value))
}

/// `xs:restriction` enumerating the given values in order
fn restriction<'v>(values: impl IntoIterator<Item = &'v str>) -> XmlElement {
    values.into_iter().fold(
        XmlElement::new("xs:restriction").attr("base", "xs:string"),
        |el, value| el.child(XmlElement::new("xs:enumeration").attr("value", value)),
    )
}
