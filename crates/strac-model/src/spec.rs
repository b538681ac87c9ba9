//! Declarative field specifications.
//!
//! A jurisdiction's target schema is an ordered list of [`FieldSpec`]s: one
//! output column each, with an optional extraction rule over the source
//! record. Extraction rules are data, not closures, so a whole table can be
//! serialized, loaded from JSON, and tested independent of any host code.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::SourceRecord;
use crate::schema::StracColumn;

/// Failure signalled by an extraction rule. Extraction failures are data
/// quality conditions, not fatal errors; the row mapper degrades them to a
/// diagnostic and an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("no mapping for value {value:?} in column {column}")]
    Unmapped { column: StracColumn, value: String },
}

/// How one output cell is derived from a source record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Extractor {
    /// Always the given value.
    Constant { value: String },
    /// Direct passthrough of one canonical column.
    Field { column: StracColumn },
    /// Concatenation of several columns; empty parts are skipped.
    Join {
        columns: Vec<StracColumn>,
        separator: String,
    },
    /// Translate a column's value through a lookup table. With
    /// `passthrough`, unmapped values pass through verbatim; otherwise an
    /// unmapped non-empty value is an extraction failure.
    Map {
        column: StracColumn,
        table: BTreeMap<String, String>,
        #[serde(default)]
        passthrough: bool,
    },
}

impl Extractor {
    /// Evaluate this rule against a record. Pure; no side effects.
    pub fn apply(&self, record: &SourceRecord) -> Result<String, ExtractError> {
        match self {
            Extractor::Constant { value } => Ok(value.clone()),
            Extractor::Field { column } => Ok(record.get(*column).to_string()),
            Extractor::Join { columns, separator } => {
                let parts: Vec<&str> = columns
                    .iter()
                    .map(|column| record.get(*column))
                    .filter(|part| !part.is_empty())
                    .collect();
                Ok(parts.join(separator))
            }
            Extractor::Map {
                column,
                table,
                passthrough,
            } => {
                let raw = record.get(*column);
                if raw.is_empty() {
                    return Ok(String::new());
                }
                match table.get(raw) {
                    Some(mapped) => Ok(mapped.clone()),
                    None if *passthrough => Ok(raw.to_string()),
                    None => Err(ExtractError::Unmapped {
                        column: *column,
                        value: raw.to_string(),
                    }),
                }
            }
        }
    }
}

/// One output column of a target schema.
///
/// `name` must be unique within a table; the core does not police this, it
/// is a contract of the table author. A spec with no extractor is a
/// deliberately unmapped placeholder column that is always emitted empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extractor: Option<Extractor>,
}

impl FieldSpec {
    /// A placeholder column with no extraction rule.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            allowed_values: None,
            extractor: None,
        }
    }

    /// Shorthand for a direct passthrough of one canonical column.
    pub fn field(name: impl Into<String>, column: StracColumn) -> Self {
        Self::new(name).extract(Extractor::Field { column })
    }

    /// Shorthand for a constant-valued column.
    pub fn constant(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name).extract(Extractor::Constant {
            value: value.into(),
        })
    }

    #[must_use]
    pub fn extract(mut self, extractor: Extractor) -> Self {
        self.extractor = Some(extractor);
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict the column to an enumerated allow-list. Validation against
    /// the list is advisory: out-of-list values are flagged, not corrected.
    #[must_use]
    pub fn allowed<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

/// An ordered field-specification table. The order of the specs *is* the
/// output header and column order; downstream consumers key on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldTable {
    specs: Vec<FieldSpec>,
}

impl FieldTable {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        Self { specs }
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Output header labels, in specification order.
    pub fn target_header(&self) -> Vec<&str> {
        self.specs.iter().map(|spec| spec.name.as_str()).collect()
    }

    /// Load a table from JSON (an array of field specifications).
    pub fn from_json_reader(reader: impl Read) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl FromIterator<FieldSpec> for FieldTable {
    fn from_iter<I: IntoIterator<Item = FieldSpec>>(iter: I) -> Self {
        Self {
            specs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(StracColumn, &str)]) -> SourceRecord {
        let mut record = SourceRecord::new();
        for (column, value) in pairs {
            record.set(*column, *value);
        }
        record
    }

    #[test]
    fn constant_extractor() {
        let extractor = Extractor::Constant {
            value: "nasal swab".to_string(),
        };
        assert_eq!(extractor.apply(&SourceRecord::new()).unwrap(), "nasal swab");
    }

    #[test]
    fn field_extractor_passes_value_through() {
        let extractor = Extractor::Field {
            column: StracColumn::PtFname,
        };
        let record = record(&[(StracColumn::PtFname, "Jane")]);
        assert_eq!(extractor.apply(&record).unwrap(), "Jane");
        assert_eq!(extractor.apply(&SourceRecord::new()).unwrap(), "");
    }

    #[test]
    fn join_skips_empty_parts() {
        let extractor = Extractor::Join {
            columns: vec![
                StracColumn::PtFname,
                StracColumn::PtMiddleInitial,
                StracColumn::PtLname,
            ],
            separator: " ".to_string(),
        };
        let record = record(&[(StracColumn::PtFname, "Jane"), (StracColumn::PtLname, "Doe")]);
        assert_eq!(extractor.apply(&record).unwrap(), "Jane Doe");
    }

    #[test]
    fn map_extractor_translates_and_fails_on_unmapped() {
        let extractor = Extractor::Map {
            column: StracColumn::PtRace,
            table: BTreeMap::from([("Black".to_string(), "AFRICAN AMERICAN".to_string())]),
            passthrough: false,
        };
        let hit = record(&[(StracColumn::PtRace, "Black")]);
        assert_eq!(extractor.apply(&hit).unwrap(), "AFRICAN AMERICAN");

        // Empty source values never fail.
        assert_eq!(extractor.apply(&SourceRecord::new()).unwrap(), "");

        let miss = record(&[(StracColumn::PtRace, "Martian")]);
        assert_eq!(
            extractor.apply(&miss),
            Err(ExtractError::Unmapped {
                column: StracColumn::PtRace,
                value: "Martian".to_string(),
            })
        );
    }

    #[test]
    fn map_extractor_passthrough_keeps_unmapped_values() {
        let extractor = Extractor::Map {
            column: StracColumn::Sex,
            table: BTreeMap::from([("F".to_string(), "Female".to_string())]),
            passthrough: true,
        };
        let record = record(&[(StracColumn::Sex, "Male")]);
        assert_eq!(extractor.apply(&record).unwrap(), "Male");
    }

    #[test]
    fn table_json_roundtrip() {
        let table = FieldTable::new(vec![
            FieldSpec::field("PatientFirstName", StracColumn::PtFname).required(),
            FieldSpec::field("PatientGender", StracColumn::Sex)
                .allowed(["Female", "Male", "Unknown"]),
            FieldSpec::constant("SpecimenSource", "nasal swab"),
            FieldSpec::new("Notes"),
        ]);
        let json = serde_json::to_string_pretty(&table).unwrap();
        let back = FieldTable::from_json_str(&json).unwrap();
        assert_eq!(back, table);
        assert_eq!(
            back.target_header(),
            vec!["PatientFirstName", "PatientGender", "SpecimenSource", "Notes"]
        );
    }

    #[test]
    fn table_loads_from_handwritten_json() {
        let json = r#"[
            {"name": "First Name", "required": true,
             "extractor": {"kind": "field", "column": "Pt_Fname"}},
            {"name": "Gender",
             "allowed_values": ["FEMALE", "MALE"],
             "extractor": {"kind": "map", "column": "Sex",
                           "table": {"Female": "FEMALE", "Male": "MALE"}}},
            {"name": "Notes"}
        ]"#;
        let table = FieldTable::from_json_str(json).unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.specs()[0].required);
        assert!(table.specs()[2].extractor.is_none());
    }
}
