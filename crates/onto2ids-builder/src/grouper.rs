// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Row grouping by class
//!
//! Groups keep the order in which their key was first seen; rows keep their
//! relative order inside a group. Groups borrow their rows.

use onto2ids_model::{Row, UNDEFINED_KEY};
use rustc_hash::FxHashMap;

/// All rows sharing one key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowGroup<'a> {
    key: String,
    rows: Vec<&'a Row>,
}

impl<'a> RowGroup<'a> {
    /// Group key (class URI or the `undefined` sentinel)
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Rows in source order; never empty
    pub fn rows(&self) -> &[&'a Row] {
        &self.rows
    }

    /// First row, which supplies the class-level fields
    pub fn first(&self) -> &'a Row {
        self.rows[0]
    }

    /// Class label of the group, empty when the first row has none
    pub fn class_label(&self) -> &'a str {
        self.first().class_label().unwrap_or_default()
    }

    /// Counterpart IFC entity of the group
    pub fn ifc_class_label(&self) -> Option<&'a str> {
        self.first().ifc_class_label()
    }

    /// Rows that contribute a property requirement
    pub fn property_rows(&self) -> impl Iterator<Item = &'a Row> + '_ {
        self.rows.iter().copied().filter(|row| row.has_property())
    }

    /// Class-level fields on which a later row disagrees with the first one
    ///
    /// Returns `(field, first value, conflicting value)` for each disagreement.
    /// Empty values are not counted as disagreement.
    pub fn conflicts(&self) -> Vec<(&'static str, &'a str, &'a str)> {
        let first = self.first();
        let mut conflicts = Vec::new();
        for &row in &self.rows[1..] {
            for (field, ours, theirs) in [
                ("classLabel", first.class_label(), row.class_label()),
                ("ifcClassLabel", first.ifc_class_label(), row.ifc_class_label()),
            ] {
                if let Some(theirs) = theirs {
                    let ours = ours.unwrap_or_default();
                    let conflict = (field, ours, theirs);
                    if ours != theirs && !conflicts.contains(&conflict) {
                        conflicts.push(conflict);
                    }
                }
            }
        }
        conflicts
    }
}

/// Group rows by an arbitrary key selector
///
/// Rows for which the selector yields `None` are grouped under
/// [`UNDEFINED_KEY`].
pub fn group_by<'a, F>(rows: &'a [Row], key: F) -> Vec<RowGroup<'a>>
where
    F: Fn(&Row) -> Option<&str>,
{
    let mut groups: Vec<RowGroup<'a>> = Vec::new();
    let mut positions: FxHashMap<String, usize> = FxHashMap::default();

    for row in rows {
        let value = key(row).unwrap_or(UNDEFINED_KEY);
        match positions.get(value) {
            Some(&idx) => groups[idx].rows.push(row),
            None => {
                positions.insert(value.to_string(), groups.len());
                groups.push(RowGroup {
                    key: value.to_string(),
                    rows: vec![row],
                });
            }
        }
    }

    groups
}

/// Group rows by their `classURI`
pub fn group_by_class(rows: &[Row]) -> Vec<RowGroup<'_>> {
    group_by(rows, |row| row.class_uri.as_deref())
}
