// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for IDS generation

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, IdsError>;

/// Errors that can occur while turning ontology rows into an IDS document
#[derive(Error, Debug)]
pub enum IdsError {
    /// `DomainName` is empty or missing
    #[error("DomainName must not be empty")]
    MissingDomainName,

    /// `ifcVersion` is not one of the literals the selected IDS version accepts
    #[error("Unsupported ifcVersion {version:?} for IDS {ids_version} (expected one of: {expected})")]
    UnsupportedIfcVersion {
        version: String,
        ids_version: String,
        expected: String,
    },

    /// Unknown IDS version name
    #[error("Unsupported IDS version: {0}")]
    UnsupportedIdsVersion(String),

    /// A row could not be read from its source
    #[error("Invalid row at line {line}: {message}")]
    InvalidRow { line: u64, message: String },

    /// Delimited-text reader failure
    #[error("CSV error: {0}")]
    Csv(String),

    /// Configuration object could not be decoded
    #[error("JSON error: {0}")]
    Json(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IdsError {
    /// Create an invalid row error
    pub fn invalid_row(line: u64, msg: impl Into<String>) -> Self {
        IdsError::InvalidRow {
            line,
            message: msg.into(),
        }
    }

    /// Create a CSV error
    pub fn csv(msg: impl Into<String>) -> Self {
        IdsError::Csv(msg.into())
    }

    /// Whether this error stems from the caller's configuration rather than the row data
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            IdsError::MissingDomainName
                | IdsError::UnsupportedIfcVersion { .. }
                | IdsError::UnsupportedIdsVersion(_)
                | IdsError::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_ifc_version_message() {
        let err = IdsError::UnsupportedIfcVersion {
            version: "IFC5".to_string(),
            ids_version: "1.0".to_string(),
            expected: "IFC2X3, IFC4, IFC4X3_ADD2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported ifcVersion \"IFC5\" for IDS 1.0 (expected one of: IFC2X3, IFC4, IFC4X3_ADD2)"
        );
        assert!(err.is_config_error());
    }

    #[test]
    fn test_row_errors_are_not_config_errors() {
        let err = IdsError::invalid_row(3, "unterminated quote");
        assert_eq!(err.to_string(), "Invalid row at line 3: unterminated quote");
        assert!(!err.is_config_error());
    }
}
