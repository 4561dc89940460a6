//! End-to-end pipeline tests over fixture files.
//!
//! Fixtures are written into a temp directory in the same shape as the
//! real data exports (catalog text file with decorations, JSON arrays,
//! Python-repr `aliases`/`requirements` literals).

use std::io::Write;
use std::path::Path;

use omscs_ratings::data::{DataError, DataPaths, DataStore, FREE_ELECTIVE};
use omscs_ratings::report;

fn write_file(dir: &Path, name: &str, contents: &str) {
    let mut f = std::fs::File::create(dir.join(name)).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
}

/// Lay down a small self-consistent dataset:
/// - four active courses (one of them, CS-6210, has no reviews)
/// - one retired course (CS-8903) present in metadata and reviews but not
///   in the catalog
/// - one specialization whose core and elective groups share CS-6200
fn write_fixtures(dir: &Path) {
    write_file(
        dir,
        "current_omscs_courses.csv",
        "*\"CS 6200\": Graduate Introduction to Operating Systems\n\
         CS 6210: Advanced Operating Systems\n\
         *\"CS 6250\": Computer Networks\n\
         CS 7638: Artificial Intelligence Techniques for Robotics\n",
    );

    write_file(
        dir,
        "omscentral_courses.json",
        r#"[
  {"id": "CS-6200", "name": "Graduate Introduction to Operating Systems",
   "link": "https://omscs.gatech.edu/cs-6200", "aliases": "['GIOS']",
   "foundational": "true", "deprecated": false, "number": "6200"},
  {"id": "CS-6210", "name": "Advanced Operating Systems",
   "link": "https://omscs.gatech.edu/cs-6210", "aliases": "['AOS']",
   "foundational": "false", "deprecated": false, "number": "6210"},
  {"id": "CS-6250", "name": "Computer Networks",
   "link": "https://omscs.gatech.edu/cs-6250", "aliases": "",
   "foundational": "true", "deprecated": false, "number": "6250"},
  {"id": "CS-7638", "name": "Artificial Intelligence Techniques for Robotics",
   "link": "https://omscs.gatech.edu/cs-7638", "aliases": "['AI4R']",
   "foundational": "false", "deprecated": false, "number": "7638"},
  {"id": "CS-8903", "name": "Special Problems",
   "link": "", "aliases": "", "foundational": "false",
   "deprecated": true, "number": "8903"}
]"#,
    );

    write_file(
        dir,
        "omscentral_reviews.json",
        r#"[
  {"course_id": "CS-6200", "rating": 3, "difficulty": 4.0, "workload": 18,
   "semester_id": "2020-3", "created": 1608249600000, "body": "Hard but fair."},
  {"course_id": "CS-6200", "rating": 5, "difficulty": 3.0, "workload": 14,
   "semester_id": "2021-1", "created": 1620000000000, "body": "Excellent."},
  {"course_id": "CS-6250", "rating": 4.5, "difficulty": 2.0, "workload": 8,
   "semester_id": "2021-2", "created": 1625097600000, "body": ""},
  {"course_id": "CS-7638", "rating": 5, "difficulty": 2.5, "workload": 12,
   "semester_id": "2021-3", "created": 1634256000000, "body": "Great projects."},
  {"course_id": "CS-8903", "rating": 2, "difficulty": 1.0, "workload": 3,
   "semester_id": "2019-3", "created": 1571097600000, "body": ""}
]"#,
    );

    write_file(
        dir,
        "omscentral_specializations.json",
        r#"[
  {"program_id": "compsci", "name": "Computing Systems",
   "requirements": "[{'type': 'core', 'count': 2, 'courses': ['CS-6200', 'CS-6210']}, {'type': 'elective', 'count': 3, 'courses': ['CS-6250', 'CS-6200']}]"}
]"#,
    );
}

fn load_store(dir: &Path) -> DataStore {
    DataStore::load(&DataPaths::from_dir(dir)).unwrap()
}

#[test]
fn summaries_obey_inner_join_semantics() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let store = load_store(dir.path());

    let ids: Vec<&str> = store
        .summaries()
        .iter()
        .map(|s| s.course_id.as_str())
        .collect();

    // Every summary id is in the catalog and has at least one review.
    assert_eq!(ids, ["CS-6200", "CS-6250", "CS-7638"]);
    // CS-6210 is active but reviewless: no summary row.
    assert!(store.summary("CS-6210").is_none());
    // CS-8903 is reviewed but retired: dropped by the catalog filter.
    assert!(store.summary("CS-8903").is_none());
    assert!(store.summaries().iter().all(|s| s.num_reviews >= 1));
}

#[test]
fn aggregation_means_are_unweighted() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let store = load_store(dir.path());

    let gios = store.summary("CS-6200").unwrap();
    assert_eq!(gios.num_reviews, 2);
    assert_eq!(gios.rating, 4.0); // mean of {3, 5}
    assert_eq!(gios.difficulty, 3.5);
    assert_eq!(gios.workload, 16.0);
    assert!(gios.foundational);
    assert_eq!(gios.name, "Graduate Introduction to Operating Systems");
}

#[test]
fn pipeline_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let first = load_store(dir.path());
    let second = load_store(dir.path());

    assert_eq!(
        report::format_summary_table(first.summaries()),
        report::format_summary_table(second.summaries())
    );
    assert_eq!(
        first.group_assignments("Computing Systems").unwrap(),
        second.group_assignments("Computing Systems").unwrap()
    );
}

#[test]
fn shared_course_gets_lexicographically_smallest_label() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let store = load_store(dir.path());

    let assignments = store.group_assignments("Computing Systems").unwrap();
    // CS-6200 is in both Core Group 1 and Elective Group 1; the smallest
    // label wins under the descending-order application rule.
    assert_eq!(assignments["CS-6200"], "Core Group 1");
    assert_eq!(assignments["CS-6250"], "Elective Group 1");
    // In the summary table but in no group.
    assert_eq!(assignments["CS-7638"], FREE_ELECTIVE);
    // Not in the summary table at all (no reviews).
    assert!(!assignments.contains_key("CS-6210"));
}

#[test]
fn course_detail_uses_semester_names() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let store = load_store(dir.path());

    let summary = store.summary("CS-6200").unwrap();
    let reviews = store.course_reviews("CS-6200").unwrap();
    let detail = report::format_course_detail(summary, &reviews);
    assert!(detail.contains("Fall 2020 review"));
    assert!(detail.contains("Spring 2021 review"));
    assert!(detail.contains("Hard but fair."));
}

#[test]
fn missing_input_file_is_a_typed_error() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    std::fs::remove_file(dir.path().join("omscentral_reviews.json")).unwrap();

    let err = DataStore::load(&DataPaths::from_dir(dir.path())).unwrap_err();
    match err {
        DataError::MissingFile { path } => {
            assert!(path.ends_with("omscentral_reviews.json"));
        }
        other => panic!("expected MissingFile, got {other:?}"),
    }
}

#[test]
fn reviewless_course_selection_is_empty_result() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let store = load_store(dir.path());

    let err = store.course_reviews("CS-6210").unwrap_err();
    assert!(matches!(err, DataError::EmptyResult { .. }));
}

#[test]
fn unknown_specialization_is_empty_result() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let store = load_store(dir.path());

    let err = store.group_assignments("Interactive Intelligence").unwrap_err();
    assert!(matches!(err, DataError::EmptyResult { .. }));
}

#[test]
fn csv_export_contains_all_summary_rows() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let store = load_store(dir.path());

    let out = dir.path().join("summary.csv");
    report::write_summary_csv(&out, store.summaries()).unwrap();
    let text = std::fs::read_to_string(&out).unwrap();
    // Header + one line per summary.
    assert_eq!(text.lines().count(), 1 + store.summaries().len());
}
