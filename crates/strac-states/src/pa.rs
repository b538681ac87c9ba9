//! Pennsylvania state reporting schema.

use strac_model::{FieldSpec, FieldTable, StracColumn};

pub fn table() -> FieldTable {
    FieldTable::new(vec![
        FieldSpec::field("PatientFirstName", StracColumn::PtFname).required(),
        FieldSpec::field("PatientMiddleInitial", StracColumn::PtMiddleInitial),
        FieldSpec::field("PatientLastName", StracColumn::PtLname).required(),
        FieldSpec::new("PatientSuffix"),
        FieldSpec::field("PatientDOB", StracColumn::DateOfBirth).required(),
        FieldSpec::field("PatientAddress1", StracColumn::PtStr),
        FieldSpec::field("PatientCity", StracColumn::PtCity),
        FieldSpec::field("PatientState", StracColumn::PtSt),
        FieldSpec::field("PatientZipCode", StracColumn::PtZip).required(),
        FieldSpec::field("PatientPhoneNumber", StracColumn::PtPhone),
        FieldSpec::field("PatientGender", StracColumn::Sex)
            .allowed(["Female", "Male", "Unknown"]),
        FieldSpec::field("PatientRace", StracColumn::PtRace).allowed([
            "Asian",
            "Black",
            "Native America",
            "Other",
            "Pacific Islander",
            "Unknown",
            "White",
        ]),
        // "Unkown" is how the state publishes it.
        FieldSpec::field("PatientEthnicity", StracColumn::PtEthnicity).allowed([
            "Hispanic",
            "Non-Hispanic",
            "Unkown",
        ]),
        FieldSpec::field("TestID", StracColumn::SpecimenId),
        FieldSpec::field("SpecimenCollectedDate", StracColumn::DateSpecimenCollected),
        FieldSpec::field("SpecimenSource", StracColumn::SpecimenType).allowed([
            "None",
            "NP swab",
            "Saliva",
            "Throat",
            "Unknown",
        ]),
        FieldSpec::field("TestName", StracColumn::OrderedTestName).allowed([
            "COVID-19 ANTIGEN test - Point-of-care",
            "COVID-19 PCR test - Point-of-care",
            "Influenza A ANTIGEN (positives only)",
            "Influenza A PCR (positives only)",
            "Influenza B ANTIGEN (positives only)",
            "Influenza B PCR (positives only)",
            "RSV ANTIGEN (positives only)",
            "RSV PCR (positives only)",
        ]),
        FieldSpec::field("TestQualitativeResult", StracColumn::Result).allowed([
            "Detected",
            "Not Detected",
            "Inconclusive",
        ]),
        FieldSpec::new("Notes"),
        FieldSpec::field("PerformingFacilityName", StracColumn::PerformingOrganizationName),
    ])
}
