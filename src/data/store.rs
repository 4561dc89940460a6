//! Load-once data store.
//!
//! The original consumer relied on implicit per-process memoization of its
//! loaders. Here the cache is an explicit value: [`DataStore::load`] runs
//! the whole pipeline once (catalog → courses → reviews → join →
//! summaries) and the store serves read-only views for its lifetime. The
//! reload policy is simply to build a new store. Tests inject fixture
//! tables through [`DataStore::from_parts`] instead of touching the
//! filesystem.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::data::aggregate::summarize;
use crate::data::catalog::load_catalog;
use crate::data::error::{DataError, Result};
use crate::data::grouping::assign_groups;
use crate::data::loader::{join_reviews, load_courses, load_reviews, load_specializations};
use crate::data::model::{Course, CourseReview, CourseSummary, Specialization};

// ---------------------------------------------------------------------------
// Input file locations
// ---------------------------------------------------------------------------

/// Locations of the four input files.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub catalog: PathBuf,
    pub courses: PathBuf,
    pub reviews: PathBuf,
    pub specializations: PathBuf,
}

impl DataPaths {
    /// Conventional file names under a single data directory.
    pub fn from_dir(dir: &Path) -> Self {
        DataPaths {
            catalog: dir.join("current_omscs_courses.csv"),
            courses: dir.join("omscentral_courses.json"),
            reviews: dir.join("omscentral_reviews.json"),
            specializations: dir.join("omscentral_specializations.json"),
        }
    }
}

// ---------------------------------------------------------------------------
// DataStore
// ---------------------------------------------------------------------------

/// All loaded and derived tables for one session.
#[derive(Debug)]
pub struct DataStore {
    catalog: Vec<String>,
    courses: BTreeMap<String, Course>,
    reviews: Vec<CourseReview>,
    summaries: Vec<CourseSummary>,
    specializations: Vec<Specialization>,
}

impl DataStore {
    /// Run the full pipeline over the given files.
    pub fn load(paths: &DataPaths) -> Result<Self> {
        let catalog = load_catalog(&paths.catalog)?;
        let courses = load_courses(&paths.courses, &catalog)?;
        let raw_reviews = load_reviews(&paths.reviews)?;
        let reviews = join_reviews(raw_reviews, &courses);
        let summaries = summarize(&reviews);
        let specializations = load_specializations(&paths.specializations)?;

        log::info!(
            "store: {} courses, {} joined reviews, {} summaries, {} specializations",
            courses.len(),
            reviews.len(),
            summaries.len(),
            specializations.len()
        );

        Ok(DataStore {
            catalog,
            courses,
            reviews,
            summaries,
            specializations,
        })
    }

    /// Build a store from pre-made tables (test fixtures, alternate
    /// loaders). Summaries are derived from the joined reviews.
    pub fn from_parts(
        catalog: Vec<String>,
        courses: BTreeMap<String, Course>,
        reviews: Vec<CourseReview>,
        specializations: Vec<Specialization>,
    ) -> Self {
        let summaries = summarize(&reviews);
        DataStore {
            catalog,
            courses,
            reviews,
            summaries,
            specializations,
        }
    }

    /// Active course identifiers in catalog file order.
    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Courses in the active catalog, keyed by id.
    pub fn courses(&self) -> &BTreeMap<String, Course> {
        &self.courses
    }

    /// The per-course summary table, sorted by course id.
    pub fn summaries(&self) -> &[CourseSummary] {
        &self.summaries
    }

    /// All loaded specializations.
    pub fn specializations(&self) -> &[Specialization] {
        &self.specializations
    }

    /// Look up a specialization by display name.
    pub fn specialization(&self, name: &str) -> Option<&Specialization> {
        self.specializations.iter().find(|s| s.name == name)
    }

    /// Group-label assignments of the summary table for one specialization.
    pub fn group_assignments(&self, spec_name: &str) -> Result<BTreeMap<String, String>> {
        let spec = self
            .specialization(spec_name)
            .ok_or_else(|| DataError::EmptyResult {
                what: format!("no specialization named '{spec_name}'"),
            })?;
        Ok(assign_groups(&self.summaries, spec, &self.catalog))
    }

    /// The joined reviews for one course, in file order.
    ///
    /// Returns [`DataError::EmptyResult`] when the course has no reviews —
    /// only reachable when a caller selects a course outside the summary
    /// table.
    pub fn course_reviews(&self, course_id: &str) -> Result<Vec<&CourseReview>> {
        let rows: Vec<&CourseReview> = self
            .reviews
            .iter()
            .filter(|r| r.review.course_id == course_id)
            .collect();
        if rows.is_empty() {
            return Err(DataError::EmptyResult {
                what: format!("no reviews for course '{course_id}'"),
            });
        }
        Ok(rows)
    }

    /// The summary row for one course, if it has any reviews.
    pub fn summary(&self, course_id: &str) -> Option<&CourseSummary> {
        self.summaries.iter().find(|s| s.course_id == course_id)
    }
}
