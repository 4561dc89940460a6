//! JSON loaders for the course, review and specialization files.
//!
//! The source files are exports from an external review site and carry a
//! few quirks the loaders absorb: the `foundational` flag is the string
//! `"true"`/`"false"`, and `aliases`/`requirements` are list literals
//! serialized as strings (decoded via [`literal`], never evaluated).
//! Records are walked as [`serde_json::Value`] so each field error can name
//! the offending record.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde_json::Value;

use crate::data::error::{DataError, Result};
use crate::data::literal;
use crate::data::model::{Course, CourseReview, GroupType, RequirementGroup, Review, Specialization};

// ---------------------------------------------------------------------------
// Course metadata
// ---------------------------------------------------------------------------

/// Load course metadata, keeping only courses whose id is in the active
/// catalog (set membership; catalog order and duplicates are irrelevant
/// here).
///
/// If the file contains duplicate ids after filtering, the last record
/// wins: records are inserted into the map in file order.
pub fn load_courses(path: &Path, catalog: &[String]) -> Result<BTreeMap<String, Course>> {
    let active: BTreeSet<&str> = catalog.iter().map(String::as_str).collect();
    let records = read_json_array(path)?;
    let file = file_name(path);

    let mut courses = BTreeMap::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| DataError::malformed(&file, format!("record {i} is not an object")))?;

        let id = get_str(obj, "id")
            .map_err(|e| DataError::malformed(&file, format!("record {i}: {e}")))?;
        if !active.contains(id) {
            continue;
        }

        let name = get_str(obj, "name")
            .map_err(|e| DataError::malformed(&file, format!("record {i} ({id}): {e}")))?;
        let link = opt_str(obj, "link").unwrap_or_default();
        let aliases = decode_aliases(obj.get("aliases"))
            .map_err(|e| DataError::malformed(&file, format!("record {i} ({id}): aliases: {e}")))?;
        let foundational = decode_bool_string(obj.get("foundational"))
            .map_err(|e| DataError::malformed(&file, format!("record {i} ({id}): foundational: {e}")))?;

        // `deprecated` and `number` are intentionally not carried over.
        courses.insert(
            id.to_string(),
            Course {
                id: id.to_string(),
                name: name.to_string(),
                link: link.to_string(),
                aliases,
                foundational,
            },
        );
    }

    log::info!(
        "courses: kept {} of {} records after catalog filter ({})",
        courses.len(),
        records.len(),
        path.display()
    );
    Ok(courses)
}

/// The `aliases` field is usually a serialized list literal, but tolerate a
/// genuine JSON array or an absent/null field.
fn decode_aliases(value: Option<&Value>) -> std::result::Result<Vec<String>, String> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(s)) => literal::decode_string_list(s),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| v.as_str().map(str::to_string).ok_or_else(|| format!("non-string alias {v}")))
            .collect(),
        Some(other) => Err(format!("unexpected value {other}")),
    }
}

fn decode_bool_string(value: Option<&Value>) -> std::result::Result<bool, String> {
    match value {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(Value::String(s)) => match s.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(format!("expected \"true\"/\"false\", got \"{other}\"")),
        },
        Some(other) => Err(format!("unexpected value {other}")),
    }
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

/// Load raw review records, converting the epoch-millisecond `created`
/// field to calendar time.
pub fn load_reviews(path: &Path) -> Result<Vec<Review>> {
    let records = read_json_array(path)?;
    let file = file_name(path);

    let mut reviews = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| DataError::malformed(&file, format!("record {i} is not an object")))?;
        let context = |e: String| DataError::malformed(&file, format!("record {i}: {e}"));

        let course_id = get_str(obj, "course_id").map_err(context)?;
        let rating = get_f64(obj, "rating").map_err(context)?;
        let difficulty = get_f64(obj, "difficulty").map_err(context)?;
        let workload = get_f64(obj, "workload").map_err(context)?;
        let semester_id = get_str(obj, "semester_id").map_err(context)?;
        let created_ms = obj
            .get("created")
            .and_then(Value::as_i64)
            .ok_or_else(|| context("missing or non-integer 'created'".to_string()))?;
        let created = chrono::DateTime::from_timestamp_millis(created_ms)
            .ok_or_else(|| context(format!("'created' {created_ms} out of range")))?;
        let body = opt_str(obj, "body").unwrap_or_default();

        reviews.push(Review {
            course_id: course_id.to_string(),
            rating,
            difficulty,
            workload,
            semester_id: semester_id.to_string(),
            created,
            body: body.to_string(),
        });
    }

    log::info!("reviews: {} records from {}", reviews.len(), path.display());
    Ok(reviews)
}

/// Inner join of reviews against the filtered course table. Reviews whose
/// course is not in the active, non-deprecated catalog are discarded.
pub fn join_reviews(reviews: Vec<Review>, courses: &BTreeMap<String, Course>) -> Vec<CourseReview> {
    let total = reviews.len();
    let joined: Vec<CourseReview> = reviews
        .into_iter()
        .filter_map(|review| {
            courses.get(&review.course_id).map(|course| CourseReview {
                review,
                course: course.clone(),
            })
        })
        .collect();

    if joined.len() < total {
        log::debug!("join: dropped {} reviews for inactive courses", total - joined.len());
    }
    joined
}

// ---------------------------------------------------------------------------
// Specializations
// ---------------------------------------------------------------------------

/// Load specialization records. The `requirements` field is a serialized
/// list of group descriptors; an unknown group `type` is a hard error
/// rather than the silent skip the source data was consumed with.
pub fn load_specializations(path: &Path) -> Result<Vec<Specialization>> {
    let records = read_json_array(path)?;
    let file = file_name(path);

    let mut specs = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| DataError::malformed(&file, format!("record {i} is not an object")))?;
        let context = |e: String| DataError::malformed(&file, format!("record {i}: {e}"));

        let program_id = get_str(obj, "program_id").map_err(context)?;
        let name = get_str(obj, "name").map_err(context)?;
        let requirements = decode_requirements(obj.get("requirements"), name, &file, i)?;

        specs.push(Specialization {
            program_id: program_id.to_string(),
            name: name.to_string(),
            requirements,
        });
    }

    log::info!("specializations: {} records from {}", specs.len(), path.display());
    Ok(specs)
}

fn decode_requirements(
    value: Option<&Value>,
    spec_name: &str,
    file: &str,
    record: usize,
) -> Result<Vec<RequirementGroup>> {
    let context =
        |e: String| DataError::malformed(file, format!("record {record} ({spec_name}): requirements: {e}"));

    let decoded = match value {
        Some(Value::String(s)) => literal::decode(s).map_err(context)?,
        // Tolerate an already-structured field.
        Some(v @ Value::Array(_)) => v.clone(),
        _ => return Err(context("missing or unexpected value".to_string())),
    };
    let groups = decoded
        .as_array()
        .ok_or_else(|| context("expected a list of groups".to_string()))?;

    let mut out = Vec::with_capacity(groups.len());
    for (g, group) in groups.iter().enumerate() {
        let obj = group
            .as_object()
            .ok_or_else(|| context(format!("group {g} is not an object")))?;

        let type_str = get_str(obj, "type").map_err(|e| context(format!("group {g}: {e}")))?;
        let group_type = GroupType::parse(type_str).ok_or_else(|| DataError::UnrecognizedGroupType {
            specialization: spec_name.to_string(),
            group_type: type_str.to_string(),
        })?;
        let count = obj
            .get("count")
            .and_then(Value::as_u64)
            .ok_or_else(|| context(format!("group {g}: missing or non-integer 'count'")))?
            as u32;
        let courses = obj
            .get("courses")
            .and_then(Value::as_array)
            .ok_or_else(|| context(format!("group {g}: missing 'courses' list")))?
            .iter()
            .map(|v| {
                v.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| context(format!("group {g}: non-string course id {v}")))
            })
            .collect::<Result<Vec<String>>>()?;

        out.push(RequirementGroup {
            group_type,
            count,
            courses,
        });
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Read a file expected to hold a top-level JSON array.
fn read_json_array(path: &Path) -> Result<Vec<Value>> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => DataError::Io(e),
    })?;
    let root: Value = serde_json::from_str(&text)
        .map_err(|e| DataError::malformed(file_name(path), format!("invalid JSON: {e}")))?;
    match root {
        Value::Array(records) => Ok(records),
        _ => Err(DataError::malformed(
            file_name(path),
            "expected a top-level JSON array",
        )),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn get_str<'a>(
    obj: &'a serde_json::Map<String, Value>,
    key: &str,
) -> std::result::Result<&'a str, String> {
    obj.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| format!("missing or non-string '{key}'"))
}

fn opt_str<'a>(obj: &'a serde_json::Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str)
}

fn get_f64(obj: &serde_json::Map<String, Value>, key: &str) -> std::result::Result<f64, String> {
    obj.get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| format!("missing or non-numeric '{key}'"))
}
