//! Philadelphia Department of Public Health reporting schema.
//!
//! Philadelphia wants its demographic values in its own vocabulary, so
//! gender, race, and ethnicity run through translation tables instead of
//! straight passthroughs. Race and ethnicity do not pass unknown source
//! values through: an untranslatable value is an extraction failure and the
//! cell stays empty rather than leaking a term the city does not accept.

use std::collections::BTreeMap;

use strac_model::{Extractor, FieldSpec, FieldTable, StracColumn};

fn translation(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
        .collect()
}

pub fn table() -> FieldTable {
    FieldTable::new(vec![
        FieldSpec::field("First Name", StracColumn::PtFname).required(),
        FieldSpec::field("Last Name", StracColumn::PtLname).required(),
        FieldSpec::field("DOB", StracColumn::DateOfBirth).required(),
        FieldSpec::field("Street", StracColumn::PtStr),
        FieldSpec::field("City", StracColumn::PtCity),
        FieldSpec::field("State", StracColumn::PtSt),
        FieldSpec::field("Zip", StracColumn::PtZip).required(),
        FieldSpec::field("Phone", StracColumn::PtPhone),
        // No STRAC source field carries email.
        FieldSpec::new("Email"),
        FieldSpec::new("Gender")
            .allowed(["FEMALE", "MALE", "UNKNOWN"])
            .extract(Extractor::Map {
                column: StracColumn::Sex,
                table: translation(&[
                    ("Female", "FEMALE"),
                    ("Male", "MALE"),
                    ("Unknown", "UNKNOWN"),
                ]),
                passthrough: true,
            }),
        FieldSpec::new("Race")
            .allowed([
                "AFRICAN AMERICAN",
                "AMERICAN INDIAN OR ALASKAN NATIVE",
                "ASIAN",
                "NATIVE HAWAIIAN OR OTHER PACIFIC ISLANDER",
                "WHITE",
                "OTHER",
            ])
            .extract(Extractor::Map {
                column: StracColumn::PtRace,
                table: translation(&[
                    ("Asian", "ASIAN"),
                    ("Black", "AFRICAN AMERICAN"),
                    ("Native America", "AMERICAN INDIAN OR ALASKAN NATIVE"),
                    ("Other", "OTHER"),
                    ("Pacific Islander", "NATIVE HAWAIIAN OR OTHER PACIFIC ISLANDER"),
                    ("White", "WHITE"),
                ]),
                passthrough: false,
            }),
        FieldSpec::new("Ethnicity")
            .allowed(["HISPANIC", "NON-HISPANIC"])
            .extract(Extractor::Map {
                column: StracColumn::PtEthnicity,
                table: translation(&[
                    ("Hispanic", "HISPANIC"),
                    ("Non-Hispanic", "NON-HISPANIC"),
                ]),
                passthrough: false,
            }),
        // Symptom data is not in the STRAC feed; the column is emitted empty
        // until a source field exists.
        FieldSpec::new("Symptoms").allowed([
            "Yes",
            "No",
            "Priority acute respiratory symptoms",
            "Cough",
            "Difficulty Breathing",
            "Shortness of Breath",
            "Fever",
        ]),
        FieldSpec::constant("Ordering Facility", "PDPH Ambulatory Health"),
        FieldSpec::constant("Lab", "LABCORP"),
        FieldSpec::field("Collection Date", StracColumn::DateSpecimenCollected),
        FieldSpec::field("Result Date", StracColumn::TestResultDate),
        FieldSpec::field("TestCode", StracColumn::LoincCode),
        FieldSpec::field("Result", StracColumn::Result),
    ])
}
