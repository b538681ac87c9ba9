//! Integration tests for the CLI subcommands.

use std::fs;

use strac_cli::cli::{ConvertArgs, ValidateArgs};
use strac_cli::commands::{run_convert, run_validate};
use strac_model::StracColumn;

fn canonical_header() -> String {
    StracColumn::ALL
        .iter()
        .map(|col| col.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn row_with(values: &[(StracColumn, &str)]) -> String {
    let mut cells = vec![String::new(); StracColumn::COUNT];
    for (column, value) in values {
        cells[column.ordinal()] = (*value).to_string();
    }
    cells.join(",")
}

fn sample_input() -> String {
    format!(
        "{}\n{}\n",
        canonical_header(),
        row_with(&[
            (StracColumn::PtFname, "Jane"),
            (StracColumn::PtLname, "Doe"),
            (StracColumn::DateOfBirth, "1980-01-02"),
            (StracColumn::PtZip, "17101"),
            (StracColumn::Sex, "Female"),
        ])
    )
}

#[test]
fn convert_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("strac.csv");
    let output = dir.path().join("pa.csv");
    fs::write(&input, sample_input()).unwrap();

    let args = ConvertArgs {
        input: Some(input),
        output: Some(output.clone()),
        state: Some("pa".to_string()),
        spec_file: None,
        no_summary: true,
    };
    let summary = run_convert(&args).unwrap();
    assert_eq!(summary.rows_written, 1);

    let written = fs::read_to_string(&output).unwrap();
    let mut lines = written.lines();
    assert!(lines.next().unwrap().starts_with("PatientFirstName,"));
    assert!(lines.next().unwrap().starts_with("Jane,,Doe"));
}

#[test]
fn convert_rejects_unknown_state() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("strac.csv");
    fs::write(&input, sample_input()).unwrap();

    let args = ConvertArgs {
        input: Some(input),
        output: Some(dir.path().join("out.csv")),
        state: Some("nj".to_string()),
        spec_file: None,
        no_summary: true,
    };
    let err = run_convert(&args).unwrap_err();
    assert!(err.to_string().contains("state not registered"));
}

#[test]
fn convert_loads_table_from_spec_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("strac.csv");
    let output = dir.path().join("out.csv");
    let spec = dir.path().join("table.json");
    fs::write(&input, sample_input()).unwrap();
    fs::write(
        &spec,
        r#"[{"name": "First", "extractor": {"kind": "field", "column": "Pt_Fname"}}]"#,
    )
    .unwrap();

    let args = ConvertArgs {
        input: Some(input),
        output: Some(output.clone()),
        state: None,
        spec_file: Some(spec),
        no_summary: true,
    };
    run_convert(&args).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "First\nJane\n");
}

#[test]
fn validate_fails_on_bad_header_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("strac.csv");
    fs::write(&input, "id,name\n1,Jane\n").unwrap();

    let args = ValidateArgs {
        input: Some(input),
        state: Some("pa".to_string()),
        spec_file: None,
    };
    let err = run_validate(&args).unwrap_err();
    assert!(err.to_string().contains("header validation failed"));
}

#[test]
fn validate_accepts_a_clean_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("strac.csv");
    fs::write(&input, sample_input()).unwrap();

    let args = ValidateArgs {
        input: Some(input),
        state: Some("pa-philly".to_string()),
        spec_file: None,
    };
    let summary = run_validate(&args).unwrap();
    assert_eq!(summary.rows_written, 1);
}
