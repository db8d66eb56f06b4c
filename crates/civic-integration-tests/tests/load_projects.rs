//! # Project Directory Loading
//!
//! End-to-end tests from YAML files on disk to validated, ordered records.
//! The `projects/` directory at the workspace root is the shared fixture.

use std::fs;
use std::path::{Path, PathBuf};

use civic_core::{Field, FieldValue, ProjectStatus, ProjectType, ValidationErrorKind};
use civic_loader::{load_dir, load_dir_with, load_file, LoadError, LoaderConfig};
use serde_json::json;

fn projects_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../projects")
}

fn austin_restaurant_scores() -> serde_json::Value {
    json!({
        "key": "austin-restaurant-scores",
        "name": "Austin Restaurant Scores",
        "description": "Application to query Austin/Travis County Health Department restaurant inspection scores.",
        "access_at": "http://open-austin.github.io/atx-restaurant-scores/public/index.html",
        "project_at": "https://github.com/open-austin/atx-restaurant-scores",
        "type": "web application",
        "status": "beta",
        "categories": ["food safety"],
        "contact": "hack@open-austin.org"
    })
}

// =========================================================================
// Single file
// =========================================================================

#[test]
fn austin_restaurant_scores_loads_verbatim() {
    let path = projects_dir().join("austin-restaurant-scores.yml");
    let record = load_file(&path, LoaderConfig::default().schema()).expect("fixture is valid");

    assert_eq!(record.to_json(), austin_restaurant_scores());
    assert_eq!(
        serde_json::to_value(&record).expect("serialize"),
        austin_restaurant_scores()
    );

    let map = record.to_map();
    assert_eq!(map.len(), 9);
    assert_eq!(
        map.get(&Field::Key),
        Some(&FieldValue::from("austin-restaurant-scores"))
    );
    assert_eq!(
        map.get(&Field::Categories),
        Some(&FieldValue::from(vec!["food safety"]))
    );
}

#[test]
fn loaded_record_answers_type_and_status_queries() {
    let path = projects_dir().join("austin-restaurant-scores.yml");
    let record = load_file(&path, LoaderConfig::default().schema()).expect("fixture is valid");

    assert!(record.is_type("Web Application"));
    assert!(!record.is_type("dataset"));
    assert!(record.is_status("BETA"));
    assert_eq!(record.project_type(), Some(ProjectType::WebApplication));
    assert_eq!(record.project_status(), Some(ProjectStatus::Beta));
    assert_eq!(record.type_rank(), Some(0));
    assert_eq!(record.status_rank(), Some(1));
}

#[test]
fn loaded_record_stays_validated_on_mutation() {
    let path = projects_dir().join("austin-restaurant-scores.yml");
    let mut record = load_file(&path, LoaderConfig::default().schema()).expect("fixture is valid");

    let err = record.set("Status", "abandoned").unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::DisallowedValue);
    assert!(record.is_status("beta"));

    record.set("STATUS", "deployed").expect("allowed status");
    assert!(record.is_status("deployed"));
}

// =========================================================================
// Directory
// =========================================================================

#[test]
fn projects_directory_loads_in_display_order() {
    let records = load_dir(&projects_dir()).expect("fixture directory is valid");
    let keys: Vec<&str> = records
        .iter()
        .map(|r| r.text(Field::Key).expect("key is always set"))
        .collect();
    // Web applications rank ahead of datasets regardless of file name.
    assert_eq!(keys, vec!["austin-restaurant-scores", "austin-budget-data"]);
}

#[test]
fn every_loaded_record_has_required_fields() {
    let records = load_dir(&projects_dir()).expect("fixture directory is valid");
    for record in &records {
        for field in record.schema().required_fields() {
            let value = record.value(field).expect("required field present");
            assert!(!value.is_empty(), "{field} is empty");
        }
    }
}

#[test]
fn missing_directory_is_no_records() {
    let err = load_dir(Path::new("/no/yml/files/here")).unwrap_err();
    assert!(matches!(err, LoadError::NoRecords { .. }));
    assert!(err.validation_error().is_none());
}

#[test]
fn empty_directory_is_no_records() {
    let tmp = tempfile::tempdir().unwrap();
    let err = load_dir(tmp.path()).unwrap_err();
    assert!(matches!(err, LoadError::NoRecords { .. }));
}

#[test]
fn invalid_file_reports_path_and_field() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("broken.yml"),
        "name: Broken\ndescription: Has a period.\ntype: spreadsheet\nstatus: beta\n",
    )
    .unwrap();

    let err = load_dir(tmp.path()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("broken.yml"), "{msg}");
    assert!(msg.contains("spreadsheet"), "{msg}");
    let source = err.validation_error().expect("validation failure");
    assert_eq!(source.field(), Some(Field::Type));
    assert_eq!(source.kind(), ValidationErrorKind::DisallowedValue);
}

#[test]
fn lenient_config_accepts_scalar_categories() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("pothole-map.yaml"),
        "name: Pothole Map\n\
         description: Reported potholes by council district.\n\
         type: website\n\
         status: ideation\n\
         categories: streets\n",
    )
    .unwrap();

    let strict = LoaderConfig {
        extensions: vec!["yaml".to_string()],
        coerce_scalars_to_lists: false,
    };
    let err = load_dir_with(tmp.path(), &strict).unwrap_err();
    assert_eq!(
        err.validation_error().map(|e| e.kind()),
        Some(ValidationErrorKind::ListExpected)
    );

    let lenient = LoaderConfig {
        coerce_scalars_to_lists: true,
        ..strict
    };
    let records = load_dir_with(tmp.path(), &lenient).expect("lenient load");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text(Field::Key), Some("pothole-map"));
    assert_eq!(
        records[0].value(Field::Categories),
        Some(&FieldValue::from(vec!["streets"]))
    );
}
