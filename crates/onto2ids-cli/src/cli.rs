// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::{ArgAction, Parser, Subcommand};
use onto2ids_model::IdsVersion;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "onto2ids",
    version,
    about = "Turn an ontology table into a buildingSMART IDS document"
)]
pub struct Cli {
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    pub verbose: u8,
    #[arg(long, global = true, help = "Output machine-readable JSON (versions, classes)")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an IDS document
    Generate(GenerateArgs),
    /// List IDS versions and the ifcVersion values each accepts
    Versions,
    /// Print the IFC entity names used for the classification specification
    Classes {
        #[arg(long)]
        ifc_version: String,
        #[arg(long, default_value = "1.0", value_parser = parse_ids_version)]
        ids_version: IdsVersion,
    },
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    #[arg(short, long, help = "Ontology table (CSV with header line, '-' for stdin)")]
    pub input: PathBuf,
    #[arg(long, help = "JSON with OrganizationCode, DomainName, DomainCode, DomainVersion")]
    pub ontology: PathBuf,
    #[arg(long, help = "JSON with title, author, date, ifcVersion")]
    pub document: PathBuf,
    #[arg(long, default_value = "1.0", value_parser = parse_ids_version)]
    pub ids_version: IdsVersion,
    #[arg(long, help = "Override ifcVersion from the document JSON")]
    pub ifc_version: Option<String>,
    #[arg(short, long, help = "Write to this file instead of stdout")]
    pub output: Option<PathBuf>,
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
    #[arg(long, default_value_t = false, help = "Emit an empty entity list for unknown ifcVersion values")]
    pub allow_unknown_ifc_version: bool,
    #[arg(long, default_value_t = false, help = "Add property URIs to IDS 1.0 property facets")]
    pub emit_property_uri: bool,
}

fn parse_ids_version(value: &str) -> Result<IdsVersion, String> {
    value.parse().map_err(|e: onto2ids_model::IdsError| e.to_string())
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(format!("delimiter must be a single ASCII character, got {value:?}")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert_eq!(parse_delimiter(";").unwrap(), b';');
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("é").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::parse_from([
            "onto2ids",
            "generate",
            "-i",
            "rows.csv",
            "--ontology",
            "onto.json",
            "--document",
            "doc.json",
            "--ids-version",
            "0.9.6",
        ]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.ids_version, IdsVersion::V0_9_6);
                assert_eq!(args.delimiter, b',');
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
