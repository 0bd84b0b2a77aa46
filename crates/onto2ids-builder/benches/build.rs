// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Document building throughput for growing ontology tables

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use onto2ids_builder::IdsBuilder;
use onto2ids_model::{DocumentInfo, IdsGenerator, IdsVersion, OntologyInfo, Row};

fn table(classes: usize, properties: usize) -> Vec<Row> {
    let mut rows = Vec::with_capacity(classes * properties);
    for c in 0..classes {
        for p in 0..properties {
            rows.push(
                Row::class(format!("http://example.org/onto#Class{c}"), format!("Class {c}"))
                    .with_ifc_class("IfcBuildingElementProxy")
                    .with_property(format!("Property {p}"), "IFCLABEL")
                    .with_enum_values("A|B|C")
                    .with_cardinality(Some((p % 2) as u32), None),
            );
        }
    }
    rows
}

fn bench_generate(c: &mut Criterion) {
    let ontology = OntologyInfo::new("Bench");
    let document = DocumentInfo::new("Bench", "bench@example.org", "2024-01-01", "IFC4");
    let mut group = c.benchmark_group("generate");

    for classes in [10, 100, 1000] {
        let rows = table(classes, 8);
        for version in IdsVersion::ALL {
            let builder = IdsBuilder::new(version);
            group.bench_with_input(
                BenchmarkId::new(format!("ids-{version}"), classes),
                &rows,
                |b, rows| {
                    b.iter(|| {
                        builder
                            .generate(black_box(rows), &ontology, &document)
                            .map(|xml| xml.len())
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
