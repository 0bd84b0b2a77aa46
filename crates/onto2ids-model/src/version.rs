// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Supported IDS and IFC schema versions

use crate::IdsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// IFC schema revision targeted by a document
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum IfcVersion {
    Ifc2x3,
    Ifc4,
    /// IFC 4.3 (ADD2 in IDS 1.0 spelling)
    Ifc4x3,
}

impl IfcVersion {
    pub const ALL: [IfcVersion; 3] = [IfcVersion::Ifc2x3, IfcVersion::Ifc4, IfcVersion::Ifc4x3];
}

/// IDS schema version, each one a distinct output dialect
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum IdsVersion {
    /// IDS 0.9.6: numeric occurs, `ids:` prefixed elements
    #[serde(rename = "0.9.6")]
    V0_9_6,
    /// IDS 1.0: categorical cardinality, default namespace
    #[default]
    #[serde(rename = "1.0")]
    V1_0,
}

const IFC_LITERALS_0_9_6: [(&str, IfcVersion); 3] = [
    ("IFC2X3", IfcVersion::Ifc2x3),
    ("IFC4", IfcVersion::Ifc4),
    ("IFC4X3", IfcVersion::Ifc4x3),
];

const IFC_LITERALS_1_0: [(&str, IfcVersion); 3] = [
    ("IFC2X3", IfcVersion::Ifc2x3),
    ("IFC4", IfcVersion::Ifc4),
    ("IFC4X3_ADD2", IfcVersion::Ifc4x3),
];

impl IdsVersion {
    pub const ALL: [IdsVersion; 2] = [IdsVersion::V0_9_6, IdsVersion::V1_0];

    /// Version number as written in schema locations
    pub fn as_str(&self) -> &'static str {
        match self {
            IdsVersion::V0_9_6 => "0.9.6",
            IdsVersion::V1_0 => "1.0",
        }
    }

    /// The `ifcVersion` literals this IDS version accepts, in catalog order
    pub fn ifc_version_literals(&self) -> &'static [(&'static str, IfcVersion)] {
        match self {
            IdsVersion::V0_9_6 => &IFC_LITERALS_0_9_6,
            IdsVersion::V1_0 => &IFC_LITERALS_1_0,
        }
    }

    /// Resolve an `ifcVersion` literal; matching is exact and case-sensitive
    pub fn parse_ifc_version(&self, literal: &str) -> Option<IfcVersion> {
        self.ifc_version_literals()
            .iter()
            .find(|(name, _)| *name == literal)
            .map(|(_, version)| *version)
    }

    /// Spelling of an IFC version in this IDS version
    pub fn ifc_version_literal(&self, version: IfcVersion) -> &'static str {
        self.ifc_version_literals()
            .iter()
            .find(|(_, v)| *v == version)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    /// Comma-separated list of accepted literals, for messages
    pub fn expected_ifc_versions(&self) -> String {
        self.ifc_version_literals()
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for IdsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdsVersion {
    type Err = IdsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches(['v', 'V']) {
            "0.9.6" => Ok(IdsVersion::V0_9_6),
            "1.0" | "1" => Ok(IdsVersion::V1_0),
            _ => Err(IdsError::UnsupportedIdsVersion(s.to_string())),
        }
    }
}
