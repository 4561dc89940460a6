//! Per-course aggregation of joined reviews.
//!
//! Means are unweighted arithmetic averages with no outlier handling; a
//! single-review course reports that review's values verbatim. Grouping is
//! keyed by a `BTreeMap`, so the output is sorted by course id and stable
//! across runs on identical input.

use std::collections::BTreeMap;

use crate::data::model::{Course, CourseReview, CourseSummary};

#[derive(Default)]
struct Accumulator {
    count: usize,
    rating: f64,
    difficulty: f64,
    workload: f64,
}

/// Group joined reviews by course and compute per-course summaries.
///
/// Only courses present in the joined rows appear; a course with metadata
/// but no surviving reviews yields no summary (inner-join semantics).
pub fn summarize(rows: &[CourseReview]) -> Vec<CourseSummary> {
    let mut groups: BTreeMap<&str, (&Course, Accumulator)> = BTreeMap::new();
    for row in rows {
        let (_, acc) = groups
            .entry(row.review.course_id.as_str())
            .or_insert_with(|| (&row.course, Accumulator::default()));
        acc.count += 1;
        acc.rating += row.review.rating;
        acc.difficulty += row.review.difficulty;
        acc.workload += row.review.workload;
    }

    groups
        .into_iter()
        .map(|(course_id, (course, acc))| {
            let n = acc.count as f64;
            CourseSummary {
                course_id: course_id.to_string(),
                name: course.name.clone(),
                link: course.link.clone(),
                foundational: course.foundational,
                num_reviews: acc.count,
                rating: acc.rating / n,
                difficulty: acc.difficulty / n,
                workload: acc.workload / n,
            }
        })
        .collect()
}
