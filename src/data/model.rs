use chrono::{DateTime, Utc};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Course – one entry of the metadata table
// ---------------------------------------------------------------------------

/// A course from the metadata file, restricted to the active catalog.
///
/// The `deprecated` and `number` source fields are dropped at load time;
/// nothing downstream consumes them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    /// Normalized identifier, e.g. `CS-6200`.
    pub id: String,
    pub name: String,
    pub link: String,
    /// Alternative names, decoded from the serialized list literal in the
    /// source file.
    pub aliases: Vec<String>,
    /// Whether the course fulfills a foundational requirement (encoded as
    /// the string `"true"`/`"false"` in the source).
    pub foundational: bool,
}

// ---------------------------------------------------------------------------
// Review – one raw review record
// ---------------------------------------------------------------------------

/// A single course review as loaded from the reviews file.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub course_id: String,
    /// Rating, typically 1–5.
    pub rating: f64,
    pub difficulty: f64,
    /// Workload in hours per week.
    pub workload: f64,
    /// Semester code `YYYY-S` with S ∈ {1, 2, 3}.
    pub semester_id: String,
    /// Creation time, converted from epoch milliseconds.
    pub created: DateTime<Utc>,
    /// Free-text review body.
    pub body: String,
}

/// A review joined with its course's metadata (inner join: reviews whose
/// course is not in the active catalog are discarded before this exists).
#[derive(Debug, Clone, PartialEq)]
pub struct CourseReview {
    pub review: Review,
    pub course: Course,
}

// ---------------------------------------------------------------------------
// CourseSummary – per-course aggregate
// ---------------------------------------------------------------------------

/// Per-course aggregate of review statistics joined with course metadata.
///
/// One row exists per course with at least one review; courses with zero
/// reviews are silently absent (inner-join semantics).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSummary {
    pub course_id: String,
    pub name: String,
    pub link: String,
    pub foundational: bool,
    pub num_reviews: usize,
    /// Unweighted arithmetic mean rating.
    pub rating: f64,
    pub difficulty: f64,
    pub workload: f64,
}

// ---------------------------------------------------------------------------
// Specializations and requirement groups
// ---------------------------------------------------------------------------

/// Requirement-group type. Anything else in the source data is an error
/// (`DataError::UnrecognizedGroupType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupType {
    Core,
    Elective,
}

impl GroupType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "core" => Some(GroupType::Core),
            "elective" => Some(GroupType::Elective),
            _ => None,
        }
    }
}

/// A bundle of courses from which a specialization requires `count` picks.
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementGroup {
    pub group_type: GroupType,
    /// How many courses must be taken from this group.
    pub count: u32,
    pub courses: Vec<String>,
}

/// A program specialization: an ordered sequence of requirement groups.
#[derive(Debug, Clone, PartialEq)]
pub struct Specialization {
    pub program_id: String,
    pub name: String,
    /// Groups in file order; labeling depends on this order.
    pub requirements: Vec<RequirementGroup>,
}

/// Label given to courses that appear in no requirement group.
pub const FREE_ELECTIVE: &str = "Free Elective";
