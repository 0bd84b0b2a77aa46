// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::cli::GenerateArgs;
use crate::config::{load_document, load_ontology};
use anyhow::Context;
use log::info;
use onto2ids_builder::{catalog, CsvRowSource, IdsBuilder};
use onto2ids_model::{IdsError, IdsGenerator, IdsVersion, Row, RowSource};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

fn read_rows(args: &GenerateArgs) -> anyhow::Result<Vec<Row>> {
    let rows = if args.input.as_os_str() == "-" {
        CsvRowSource::with_delimiter(io::stdin().lock(), args.delimiter).rows()?
    } else {
        CsvRowSource::from_path(&args.input, args.delimiter)?.rows()?
    };
    Ok(rows)
}

pub fn generate(args: &GenerateArgs) -> anyhow::Result<()> {
    let ontology = load_ontology(&args.ontology)?;
    let document = load_document(&args.document, args.ifc_version.as_deref())?;

    let rows = read_rows(args)
        .with_context(|| format!("reading rows from {}", args.input.display()))?;

    let builder = IdsBuilder::new(args.ids_version)
        .allow_unknown_ifc_version(args.allow_unknown_ifc_version)
        .emit_property_uri(args.emit_property_uri);
    let xml = builder.generate(&rows, &ontology, &document)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &xml).with_context(|| format!("writing {}", path.display()))?;
            info!(
                "wrote IDS {} document for {} rows to {}",
                args.ids_version,
                rows.len(),
                path.display()
            );
        }
        None => io::stdout().lock().write_all(xml.as_bytes())?,
    }
    Ok(())
}

#[derive(Serialize)]
struct VersionEntry {
    ids_version: &'static str,
    ifc_versions: Vec<&'static str>,
}

pub fn versions(json: bool) -> anyhow::Result<()> {
    let entries: Vec<VersionEntry> = IdsVersion::ALL
        .iter()
        .map(|v| VersionEntry {
            ids_version: v.as_str(),
            ifc_versions: v.ifc_version_literals().iter().map(|(n, _)| *n).collect(),
        })
        .collect();

    if json {
        return print_json(&entries);
    }
    for entry in entries {
        println!("{}\t{}", entry.ids_version, entry.ifc_versions.join(", "));
    }
    Ok(())
}

pub fn classes(json: bool, ifc_version: &str, ids_version: IdsVersion) -> anyhow::Result<()> {
    let version = ids_version.parse_ifc_version(ifc_version).ok_or_else(|| {
        IdsError::UnsupportedIfcVersion {
            version: ifc_version.to_string(),
            ids_version: ids_version.to_string(),
            expected: ids_version.expected_ifc_versions(),
        }
    })?;

    let names = catalog::names_for(version);
    if json {
        return print_json(names);
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}
