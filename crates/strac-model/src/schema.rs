//! Canonical STRAC source schema.
//!
//! The STRAC reporting format fixes a set of 48 input columns. The enum below
//! gives compile-time safety to lookups against that set; matching against
//! incoming header cells is exact (case- and whitespace-sensitive).

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// One canonical STRAC input column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StracColumn {
    ReportingFacilityName,
    CliaNumber,
    PerformingOrganizationName,
    PerformingOrganizationAddress,
    PerformingOrganizationCity,
    PerformingOrganizationZip,
    PerformingOrganizationState,
    DeviceIdentifier,
    OrderedTestName,
    LoincCode,
    LoincText,
    Result,
    ResultUnits,
    ReferenceRange,
    DateTestPerformed,
    TestResultDate,
    PtFname,
    PtMiddleInitial,
    PtLname,
    DateOfBirth,
    PatientAge,
    Sex,
    PtRace,
    PtEthnicity,
    PtPhone,
    PtStr,
    PtCity,
    PtSt,
    PtZip,
    PtCounty,
    AccessionNumber,
    OrderingFacility,
    OrderingFacilityAddress,
    OrderingFacilityCity,
    OrderingFacilityState,
    OrderingFacilityZip,
    OrderingProviderLastName,
    OrderingProviderFirstName,
    OrderingProviderNpi,
    OrderingProviderStreetAddress,
    OrderingProviderCity,
    OrderingProviderState,
    OrderingProviderZip,
    OrderingProviderPhone,
    SpecimenId,
    SpecimenType,
    DateTestOrdered,
    DateSpecimenCollected,
}

impl StracColumn {
    /// Every canonical column, in schema order. This order drives record
    /// layout and the ordering of missing-column errors.
    pub const ALL: [StracColumn; 48] = [
        StracColumn::ReportingFacilityName,
        StracColumn::CliaNumber,
        StracColumn::PerformingOrganizationName,
        StracColumn::PerformingOrganizationAddress,
        StracColumn::PerformingOrganizationCity,
        StracColumn::PerformingOrganizationZip,
        StracColumn::PerformingOrganizationState,
        StracColumn::DeviceIdentifier,
        StracColumn::OrderedTestName,
        StracColumn::LoincCode,
        StracColumn::LoincText,
        StracColumn::Result,
        StracColumn::ResultUnits,
        StracColumn::ReferenceRange,
        StracColumn::DateTestPerformed,
        StracColumn::TestResultDate,
        StracColumn::PtFname,
        StracColumn::PtMiddleInitial,
        StracColumn::PtLname,
        StracColumn::DateOfBirth,
        StracColumn::PatientAge,
        StracColumn::Sex,
        StracColumn::PtRace,
        StracColumn::PtEthnicity,
        StracColumn::PtPhone,
        StracColumn::PtStr,
        StracColumn::PtCity,
        StracColumn::PtSt,
        StracColumn::PtZip,
        StracColumn::PtCounty,
        StracColumn::AccessionNumber,
        StracColumn::OrderingFacility,
        StracColumn::OrderingFacilityAddress,
        StracColumn::OrderingFacilityCity,
        StracColumn::OrderingFacilityState,
        StracColumn::OrderingFacilityZip,
        StracColumn::OrderingProviderLastName,
        StracColumn::OrderingProviderFirstName,
        StracColumn::OrderingProviderNpi,
        StracColumn::OrderingProviderStreetAddress,
        StracColumn::OrderingProviderCity,
        StracColumn::OrderingProviderState,
        StracColumn::OrderingProviderZip,
        StracColumn::OrderingProviderPhone,
        StracColumn::SpecimenId,
        StracColumn::SpecimenType,
        StracColumn::DateTestOrdered,
        StracColumn::DateSpecimenCollected,
    ];

    /// Number of canonical columns in the schema.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this column in schema order.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// The column name exactly as it appears in a STRAC header row.
    pub fn as_str(self) -> &'static str {
        match self {
            StracColumn::ReportingFacilityName => "Reporting_Facility_Name",
            StracColumn::CliaNumber => "CLIA_Number",
            StracColumn::PerformingOrganizationName => "Performing_Organization_Name",
            StracColumn::PerformingOrganizationAddress => "Performing_Organization_Address",
            StracColumn::PerformingOrganizationCity => "Performing_Organization_City",
            StracColumn::PerformingOrganizationZip => "Performing_Organization_Zip",
            StracColumn::PerformingOrganizationState => "Performing_Organization_State",
            StracColumn::DeviceIdentifier => "Device_Identifier",
            StracColumn::OrderedTestName => "Ordered_Test_Name",
            StracColumn::LoincCode => "LOINC_Code",
            StracColumn::LoincText => "LOINC_Text",
            StracColumn::Result => "Result",
            StracColumn::ResultUnits => "Result_Units",
            StracColumn::ReferenceRange => "Reference_Range",
            StracColumn::DateTestPerformed => "Date_Test_Performed",
            StracColumn::TestResultDate => "Test_Result_Date",
            StracColumn::PtFname => "Pt_Fname",
            StracColumn::PtMiddleInitial => "Pt_Middle_Initial",
            StracColumn::PtLname => "Pt_Lname",
            StracColumn::DateOfBirth => "Date_of_Birth",
            // The published format really does use a space here.
            StracColumn::PatientAge => "Patient Age",
            StracColumn::Sex => "Sex",
            StracColumn::PtRace => "Pt_Race",
            StracColumn::PtEthnicity => "Pt_Ethnicity",
            StracColumn::PtPhone => "Pt_Phone",
            StracColumn::PtStr => "Pt_Str",
            StracColumn::PtCity => "Pt_City",
            StracColumn::PtSt => "Pt_ST",
            StracColumn::PtZip => "Pt_Zip",
            StracColumn::PtCounty => "Pt_County",
            StracColumn::AccessionNumber => "Accession_Number",
            StracColumn::OrderingFacility => "Ordering_Facility",
            StracColumn::OrderingFacilityAddress => "Ordering_Facility_Address",
            StracColumn::OrderingFacilityCity => "Ordering_Facility_City",
            StracColumn::OrderingFacilityState => "Ordering_Facility_State",
            StracColumn::OrderingFacilityZip => "Ordering_Facility_Zip",
            StracColumn::OrderingProviderLastName => "Ordering_Provider_Last_Name",
            StracColumn::OrderingProviderFirstName => "Ordering_Provider_First_Name",
            StracColumn::OrderingProviderNpi => "Ordering_Provider_NPI",
            StracColumn::OrderingProviderStreetAddress => "Ordering_Provider_Street_Address",
            StracColumn::OrderingProviderCity => "Ordering_Provider_City",
            StracColumn::OrderingProviderState => "Ordering_Provider_State",
            StracColumn::OrderingProviderZip => "Ordering_Provider_Zip",
            StracColumn::OrderingProviderPhone => "Ordering_Provider_Phone",
            StracColumn::SpecimenId => "Specimen_ID",
            StracColumn::SpecimenType => "Specimen_Type",
            StracColumn::DateTestOrdered => "Date_Test_Ordered",
            StracColumn::DateSpecimenCollected => "Date_Specimen_Collected",
        }
    }

    /// Resolve a header cell to a canonical column. Exact match only; no
    /// case folding or whitespace trimming is performed.
    pub fn from_name(name: &str) -> Option<StracColumn> {
        Self::ALL.iter().copied().find(|col| col.as_str() == name)
    }
}

impl fmt::Display for StracColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StracColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StracColumn::from_name(s).ok_or_else(|| format!("unknown STRAC column: {s}"))
    }
}

impl Serialize for StracColumn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StracColumn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        StracColumn::from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown STRAC column: {name}")))
    }
}
