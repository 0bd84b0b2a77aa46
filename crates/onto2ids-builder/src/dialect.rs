// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Output dialects, one per IDS version
//!
//! Both versions describe the same document; they differ in element prefix,
//! a handful of element/attribute names, where occurrence bounds sit and how
//! cardinality is encoded. A [`Dialect`] captures all of that as data so one
//! builder serves both.

use onto2ids_model::{Cardinality, IdsVersion};

pub const IDS_NAMESPACE: &str = "http://standards.buildingsmart.org/IDS";
pub const XS_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Element carrying `minOccurs="0" maxOccurs="unbounded"` of a specification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OccursPlacement {
    Specification,
    Applicability,
}

/// Attribute list of a facet
pub type Attributes = Vec<(&'static str, String)>;

/// Everything that differs between IDS versions
#[derive(Debug)]
pub struct Dialect {
    pub version: IdsVersion,
    /// Prefix of IDS elements, including the colon
    pub prefix: &'static str,
    pub xml_declaration: Option<&'static str>,
    /// Attribute binding the IDS namespace on the root
    pub namespace_attribute: &'static str,
    pub schema_location: &'static str,
    pub occurs_on: OccursPlacement,
    pub datatype_attribute: &'static str,
    pub property_name_element: &'static str,
    /// Whether property facets accept a `uri` attribute
    pub supports_property_uri: bool,
    encode_cardinality: fn(Cardinality) -> Attributes,
}

fn encode_occurs(cardinality: Cardinality) -> Attributes {
    let occurs = cardinality.occurs();
    vec![
        ("minOccurs", occurs.min.to_string()),
        ("maxOccurs", occurs.max.to_string()),
    ]
}

fn encode_status(cardinality: Cardinality) -> Attributes {
    vec![("cardinality", cardinality.status().to_string())]
}

/// IDS 0.9.6
pub static IDS_0_9_6: Dialect = Dialect {
    version: IdsVersion::V0_9_6,
    prefix: "ids:",
    xml_declaration: None,
    namespace_attribute: "xmlns:ids",
    schema_location:
        "http://standards.buildingsmart.org/IDS http://standards.buildingsmart.org/IDS/0.9.6/ids.xsd",
    occurs_on: OccursPlacement::Specification,
    datatype_attribute: "datatype",
    property_name_element: "name",
    supports_property_uri: false,
    encode_cardinality: encode_occurs,
};

/// IDS 1.0
pub static IDS_1_0: Dialect = Dialect {
    version: IdsVersion::V1_0,
    prefix: "",
    xml_declaration: Some(r#"<?xml version="1.0" encoding="utf-8"?>"#),
    namespace_attribute: "xmlns",
    schema_location:
        "http://standards.buildingsmart.org/IDS http://standards.buildingsmart.org/IDS/1.0/ids.xsd",
    occurs_on: OccursPlacement::Applicability,
    datatype_attribute: "dataType",
    property_name_element: "baseName",
    supports_property_uri: true,
    encode_cardinality: encode_status,
};

impl Dialect {
    /// Dialect of the given IDS version
    pub fn of(version: IdsVersion) -> &'static Dialect {
        match version {
            IdsVersion::V0_9_6 => &IDS_0_9_6,
            IdsVersion::V1_0 => &IDS_1_0,
        }
    }

    /// Qualified name of an IDS element
    pub fn element(&self, local: &str) -> String {
        format!("{}{}", self.prefix, local)
    }

    /// Cardinality attributes of a facet
    pub fn cardinality(&self, cardinality: Cardinality) -> Attributes {
        (self.encode_cardinality)(cardinality)
    }

    /// Cardinality attributes of a facet that must be present
    pub fn mandatory(&self) -> Attributes {
        self.cardinality(Cardinality::new(Some(1), None))
    }

    /// Namespace declarations of the root element
    pub fn root_attributes(&self) -> Attributes {
        vec![
            ("xmlns:xs", XS_NAMESPACE.to_string()),
            ("xmlns:xsi", XSI_NAMESPACE.to_string()),
            ("xsi:schemaLocation", self.schema_location.to_string()),
            (self.namespace_attribute, IDS_NAMESPACE.to_string()),
        ]
    }
}
