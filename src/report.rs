//! Text and CSV rendering of pipeline output.
//!
//! This is the stand-in for the dashboard: it consumes the summary table
//! and group assignments and formats them for a terminal. Keeping all
//! formatting here leaves the data layer clean and testable.

use std::collections::BTreeMap;
use std::path::Path;

use crate::data::error::Result;
use crate::data::model::{CourseReview, CourseSummary, FREE_ELECTIVE};
use crate::data::semester::semester_name;

/// Format the summary table, one row per course.
pub fn format_summary_table(summaries: &[CourseSummary]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<10} {:<46} {:>7} {:>7} {:>11} {:>9}\n",
        "course", "name", "reviews", "rating", "difficulty", "workload"
    ));
    for s in summaries {
        out.push_str(&format!(
            "{:<10} {:<46} {:>7} {:>7.2} {:>11.2} {:>9.1}\n",
            s.course_id,
            truncate(&s.name, 46),
            s.num_reviews,
            s.rating,
            s.difficulty,
            s.workload
        ));
    }
    out
}

/// Format group assignments bucketed by label, free electives last.
pub fn format_group_table(assignments: &BTreeMap<String, String>) -> String {
    let mut buckets: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (course_id, label) in assignments {
        buckets.entry(label.as_str()).or_default().push(course_id);
    }
    let free = buckets.remove(FREE_ELECTIVE);

    let mut out = String::new();
    for (label, courses) in buckets {
        push_bucket(&mut out, label, &courses);
    }
    if let Some(courses) = free {
        push_bucket(&mut out, FREE_ELECTIVE, &courses);
    }
    out
}

fn push_bucket(out: &mut String, label: &str, courses: &[&str]) {
    out.push_str(&format!("{label}:\n"));
    for id in courses {
        out.push_str(&format!("  {id}\n"));
    }
}

/// Format one course's detail page: the three means, then each review with
/// its semester name, deltas against the course means, and body.
pub fn format_course_detail(summary: &CourseSummary, reviews: &[&CourseReview]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}: {}\n", summary.course_id, summary.name));
    out.push_str(&format!(
        "rating {:.2} | difficulty {:.2} | workload {:.1} h/wk | {} reviews\n",
        summary.rating, summary.difficulty, summary.workload, summary.num_reviews
    ));

    for row in reviews {
        let r = &row.review;
        out.push_str(&format!(
            "\n--- {} review ({}) ---\n",
            semester_name(&r.semester_id),
            r.created.format("%Y-%m-%d")
        ));
        out.push_str(&format!(
            "rating {:.1} ({:+.2}) | difficulty {:.1} ({:+.2}) | workload {:.1} ({:+.1})\n",
            r.rating,
            r.rating - summary.rating,
            r.difficulty,
            r.difficulty - summary.difficulty,
            r.workload,
            r.workload - summary.workload
        ));
        if !r.body.is_empty() {
            out.push_str(&r.body);
            out.push('\n');
        }
    }
    out
}

/// Write the summary table to a CSV file.
pub fn write_summary_csv(path: &Path, summaries: &[CourseSummary]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for s in summaries {
        writer.serialize(s)?;
    }
    writer.flush().map_err(crate::data::DataError::from)?;
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
