// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ROWS: &str = "\
ontoClassPrefLabel,ontoClassURI,ifcClassLabel,ontoPropertyPrefLabel,ontoPropertyURI,ontoPropertyDatatype,ontoPropertyEnumValues,ontoPropertyCardinalityMin,ontoPropertyCardinalityMax
Wall,http://example.org/onto#Wall,IfcWall,Height,http://example.org/onto#height,IFCLENGTHMEASURE,,1,
Wall,http://example.org/onto#Wall,IfcWall,Fire rating,http://example.org/onto#fire,,EI30|EI60,,
Door,http://example.org/onto/Door,IfcDoor,,,,,,
";

fn cmd() -> Command {
    Command::cargo_bin("onto2ids").unwrap()
}

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(domain: &str, ifc_version: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("rows.csv"), ROWS).unwrap();
        fs::write(
            dir.path().join("onto.json"),
            format!(
                r#"{{"OrganizationCode":"org","DomainName":"{domain}","DomainCode":"dc","DomainVersion":"1"}}"#
            ),
        )
        .unwrap();
        fs::write(
            dir.path().join("doc.json"),
            format!(
                r#"{{"title":"Walls & doors","author":"a@b.c","date":"2024-01-01","ifcVersion":"{ifc_version}"}}"#
            ),
        )
        .unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn generate(&self) -> Command {
        let mut cmd = cmd();
        cmd.arg("generate")
            .arg("-i")
            .arg(self.path("rows.csv"))
            .arg("--ontology")
            .arg(self.path("onto.json"))
            .arg("--document")
            .arg(self.path("doc.json"));
        cmd
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_generate_ids_1_0_to_stdout() {
    let fixture = Fixture::new("MyDict", "IFC4");
    fixture
        .generate()
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"<?xml version="1.0" encoding="utf-8"?>"#,
        ))
        .stdout(contains(r#"<title>Walls &amp; doors</title>"#))
        .stdout(contains(r#"name="MyDict - Classification""#))
        .stdout(contains(r#"name="MyDict - Wall""#))
        .stdout(contains(r#"name="MyDict - Door""#))
        .stdout(contains(r#"cardinality="required""#))
        .stdout(contains(r#"<xs:enumeration value="EI60" />"#));
}

#[test]
fn test_generate_ids_0_9_6_to_file() {
    let fixture = Fixture::new("MyDict", "IFC4X3");
    let out = fixture.path("out.ids");
    fixture
        .generate()
        .args(["--ids-version", "0.9.6", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let xml = read(&out);
    assert!(xml.starts_with("<ids:ids "));
    assert!(xml.contains(r#"ifcVersion="IFC4X3""#));
    assert!(xml.contains(r#"minOccurs="1" maxOccurs="unbounded""#));
    assert!(xml.contains("<ids:name>"));
    assert!(xml.ends_with('\n'));
}

#[test]
fn test_generate_ifc_version_override() {
    let fixture = Fixture::new("MyDict", "IFC2X3");
    fixture
        .generate()
        .args(["--ifc-version", "IFC4X3_ADD2"])
        .assert()
        .success()
        .stdout(contains(r#"ifcVersion="IFC4X3_ADD2""#));
}

#[test]
fn test_generate_from_stdin() {
    let fixture = Fixture::new("MyDict", "IFC4");
    cmd()
        .args(["generate", "-i", "-", "--ontology"])
        .arg(fixture.path("onto.json"))
        .arg("--document")
        .arg(fixture.path("doc.json"))
        .write_stdin(ROWS)
        .assert()
        .success()
        .stdout(contains(r#"name="MyDict - Wall""#));
}

#[test]
fn test_generate_empty_domain_writes_nothing() {
    let fixture = Fixture::new("", "IFC4");
    let out = fixture.path("out.ids");
    fixture
        .generate()
        .arg("-o")
        .arg(&out)
        .assert()
        .code(2)
        .stderr(contains("DomainName must not be empty"));
    assert!(!out.exists());
}

#[test]
fn test_generate_unknown_ifc_version() {
    let fixture = Fixture::new("MyDict", "IFC5");
    fixture
        .generate()
        .assert()
        .code(2)
        .stderr(contains("Unsupported ifcVersion \"IFC5\""));

    fixture
        .generate()
        .arg("--allow-unknown-ifc-version")
        .assert()
        .success()
        .stdout(contains(r#"ifcVersion="IFC5""#));
}

#[test]
fn test_generate_missing_input() {
    let fixture = Fixture::new("MyDict", "IFC4");
    cmd()
        .args(["generate", "-i"])
        .arg(fixture.path("missing.csv"))
        .arg("--ontology")
        .arg(fixture.path("onto.json"))
        .arg("--document")
        .arg(fixture.path("doc.json"))
        .assert()
        .code(1)
        .stderr(contains("reading rows from"));
}

#[test]
fn test_versions() {
    cmd()
        .arg("versions")
        .assert()
        .success()
        .stdout(contains("0.9.6"))
        .stdout(contains("IFC4X3_ADD2"));
}

#[test]
fn test_versions_json() {
    cmd()
        .args(["--json", "versions"])
        .assert()
        .success()
        .stdout(contains(r#""ok": true"#))
        .stdout(contains(r#""ids_version": "1.0""#));
}

#[test]
fn test_classes() {
    cmd()
        .args(["classes", "--ifc-version", "IFC4"])
        .assert()
        .success()
        .stdout(contains("IFCWALL"));
}

#[test]
fn test_classes_unknown_version() {
    cmd()
        .args(["classes", "--ifc-version", "IFC4X3_ADD2", "--ids-version", "0.9.6"])
        .assert()
        .code(2)
        .stderr(contains("Unsupported ifcVersion \"IFC4X3_ADD2\" for IDS 0.9.6"));

    cmd()
        .args(["classes", "--ifc-version", "IFC5"])
        .assert()
        .code(2);
}

#[test]
fn test_generate_delimited_file() {
    let fixture = Fixture::new("MyDict", "IFC4");
    fs::write(
        fixture.path("rows.tsv"),
        "ontoClassURI\tontoClassPrefLabel\nhttp://example.org/onto#Slab\tSlab\n",
    )
    .unwrap();
    cmd()
        .args(["generate", "--delimiter", "tab", "-i"])
        .arg(fixture.path("rows.tsv"))
        .arg("--ontology")
        .arg(fixture.path("onto.json"))
        .arg("--document")
        .arg(fixture.path("doc.json"))
        .assert()
        .success()
        .stdout(contains(r#"name="MyDict - Slab""#));
}
