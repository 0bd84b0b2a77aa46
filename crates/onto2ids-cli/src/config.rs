// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loading of the two JSON configuration objects

use anyhow::Context;
use onto2ids_model::{DocumentInfo, IdsError, OntologyInfo};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value = serde_json::from_str(&text)
        .map_err(|e| IdsError::Json(e.to_string()))
        .with_context(|| format!("decoding {}", path.display()))?;
    Ok(value)
}

pub fn load_ontology(path: &Path) -> anyhow::Result<OntologyInfo> {
    load_json(path)
}

/// Load document info, letting `ifc_version` override the file's value
pub fn load_document(path: &Path, ifc_version: Option<&str>) -> anyhow::Result<DocumentInfo> {
    let mut info: DocumentInfo = load_json(path)?;
    if let Some(version) = ifc_version {
        info.ifc_version = version.to_string();
    }
    Ok(info)
}
