// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for ontology rows and document configuration
//!
//! A [`Row`] is one line of the ontology table. Every text field keeps the
//! distinction between a column that does not exist in the source (`None`)
//! and a column that exists but is empty (`Some("")`): only the group key
//! cares about it, every other field treats empty like absent.

use crate::Cardinality;
use serde::{Deserialize, Serialize};

/// Datatype used for properties without an explicit `datatype`
pub const DEFAULT_DATATYPE: &str = "IFCTEXT";

/// Group key used for rows that have no `classURI` field at all
pub const UNDEFINED_KEY: &str = "undefined";

/// Column names of the ontology table, in their conventional order
pub mod columns {
    pub const CLASS_LABEL: &str = "ontoClassPrefLabel";
    pub const CLASS_URI: &str = "ontoClassURI";
    pub const IFC_CLASS_LABEL: &str = "ifcClassLabel";
    pub const PROPERTY_LABEL: &str = "ontoPropertyPrefLabel";
    pub const PROPERTY_URI: &str = "ontoPropertyURI";
    pub const DATATYPE: &str = "ontoPropertyDatatype";
    pub const ENUM_VALUES: &str = "ontoPropertyEnumValues";
    pub const CARDINALITY_MIN: &str = "ontoPropertyCardinalityMin";
    pub const CARDINALITY_MAX: &str = "ontoPropertyCardinalityMax";

    /// All columns, in table order
    pub const ALL: [&str; 9] = [
        CLASS_LABEL,
        CLASS_URI,
        IFC_CLASS_LABEL,
        PROPERTY_LABEL,
        PROPERTY_URI,
        DATATYPE,
        ENUM_VALUES,
        CARDINALITY_MIN,
        CARDINALITY_MAX,
    ];
}

/// One ontology fact: a class, optionally paired with one of its properties
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Human-readable class name
    pub class_label: Option<String>,
    /// Unique class identifier; the grouping key
    #[serde(rename = "classURI")]
    pub class_uri: Option<String>,
    /// Counterpart IFC entity (e.g. `IfcDoor`)
    pub ifc_class_label: Option<String>,
    /// Property name; rows without one describe a class with no properties
    pub property_label: Option<String>,
    #[serde(rename = "propertyURI")]
    pub property_uri: Option<String>,
    pub datatype: Option<String>,
    /// Pipe-delimited allowed values
    pub enum_values: Option<String>,
    pub cardinality_min: Option<u32>,
    /// `None` means unbounded
    pub cardinality_max: Option<u32>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Row {
    /// Create a row for a class with no property
    pub fn class(class_uri: impl Into<String>, class_label: impl Into<String>) -> Self {
        Self {
            class_uri: Some(class_uri.into()),
            class_label: Some(class_label.into()),
            ..Default::default()
        }
    }

    /// Set the counterpart IFC entity
    pub fn with_ifc_class(mut self, ifc_class_label: impl Into<String>) -> Self {
        self.ifc_class_label = Some(ifc_class_label.into());
        self
    }

    /// Set the property label and datatype
    pub fn with_property(mut self, label: impl Into<String>, datatype: impl Into<String>) -> Self {
        self.property_label = Some(label.into());
        self.datatype = Some(datatype.into());
        self
    }

    /// Set the property URI
    pub fn with_property_uri(mut self, uri: impl Into<String>) -> Self {
        self.property_uri = Some(uri.into());
        self
    }

    /// Set the pipe-delimited enumeration
    pub fn with_enum_values(mut self, values: impl Into<String>) -> Self {
        self.enum_values = Some(values.into());
        self
    }

    /// Set the cardinality bounds
    pub fn with_cardinality(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.cardinality_min = min;
        self.cardinality_max = max;
        self
    }

    /// Class label, if non-empty
    pub fn class_label(&self) -> Option<&str> {
        non_empty(&self.class_label)
    }

    /// IFC entity name, if non-empty
    pub fn ifc_class_label(&self) -> Option<&str> {
        non_empty(&self.ifc_class_label)
    }

    /// Property label, if non-empty
    pub fn property_label(&self) -> Option<&str> {
        non_empty(&self.property_label)
    }

    /// Property URI, if non-empty
    pub fn property_uri(&self) -> Option<&str> {
        non_empty(&self.property_uri)
    }

    /// Datatype, falling back to [`DEFAULT_DATATYPE`]
    pub fn datatype(&self) -> &str {
        non_empty(&self.datatype).unwrap_or(DEFAULT_DATATYPE)
    }

    /// Enumeration values split on `|`, untrimmed, in source order
    ///
    /// Returns `None` when the row carries no enumeration.
    pub fn enum_values(&self) -> Option<Vec<&str>> {
        non_empty(&self.enum_values).map(|v| v.split('|').collect())
    }

    /// Cardinality bounds of the property
    pub fn cardinality(&self) -> Cardinality {
        Cardinality::new(self.cardinality_min, self.cardinality_max)
    }

    /// Whether this row contributes a property requirement
    pub fn has_property(&self) -> bool {
        self.property_label().is_some()
    }
}

/// Description of the data dictionary the ontology belongs to
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyInfo {
    #[serde(rename = "OrganizationCode", default)]
    pub organization_code: String,
    /// Used as both classification system and property set name
    #[serde(rename = "DomainName", default)]
    pub domain_name: String,
    #[serde(rename = "DomainCode", default)]
    pub domain_code: String,
    #[serde(rename = "DomainVersion", default)]
    pub domain_version: String,
}

impl OntologyInfo {
    /// Create info with only a domain name
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            ..Default::default()
        }
    }
}

/// Header information of the generated document
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    /// Target IFC schema literal, e.g. `IFC4`
    #[serde(default)]
    pub ifc_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DocumentInfo {
    /// Create document info for the given IFC version literal
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
        ifc_version: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            date: date.into(),
            ifc_version: ifc_version.into(),
            version: None,
            description: None,
        }
    }

    /// Document version, if non-empty
    pub fn version(&self) -> Option<&str> {
        non_empty(&self.version)
    }

    /// Document description, if non-empty
    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }
}
