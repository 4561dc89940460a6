//! Specialization requirement-group classification.
//!
//! Each course in the summary table gets a categorical label: the
//! requirement group it belongs to for a chosen specialization, or
//! `"Free Elective"` when it belongs to none. The presentation layer uses
//! the label as a coloring/grouping key.
//!
//! Label precedence is a behavioral contract, not a tidy policy: labels are
//! applied in descending lexicographic order, so the lexicographically
//! smallest label is written last and wins for any course that appears in
//! multiple groups. Do not "clean this up" without updating the fixture
//! tests that pin it.

use std::collections::{BTreeMap, BTreeSet};

use crate::data::model::{CourseSummary, GroupType, RequirementGroup, Specialization, FREE_ELECTIVE};

/// Synthetic label per requirement group, in file order.
///
/// Core and elective groups are numbered independently, 1-based:
/// `"Core Group 1"`, `"Core Group 2"`, `"Elective Group 1"`, ...
pub fn group_labels(spec: &Specialization) -> Vec<(String, &RequirementGroup)> {
    let mut core = 0u32;
    let mut elective = 0u32;
    spec.requirements
        .iter()
        .map(|group| {
            let label = match group.group_type {
                GroupType::Core => {
                    core += 1;
                    format!("Core Group {core}")
                }
                GroupType::Elective => {
                    elective += 1;
                    format!("Elective Group {elective}")
                }
            };
            (label, group)
        })
        .collect()
}

/// Map every summarized course to a group label for `spec`.
///
/// Group course lists are first restricted to the active catalog (stale
/// specialization data may reference retired courses). Courses in no group
/// default to [`FREE_ELECTIVE`].
pub fn assign_groups(
    summaries: &[CourseSummary],
    spec: &Specialization,
    catalog: &[String],
) -> BTreeMap<String, String> {
    let active: BTreeSet<&str> = catalog.iter().map(String::as_str).collect();

    let mut labeled: Vec<(String, Vec<&str>)> = group_labels(spec)
        .into_iter()
        .map(|(label, group)| {
            let courses: Vec<&str> = group
                .courses
                .iter()
                .map(String::as_str)
                .filter(|id| active.contains(id))
                .collect();
            (label, courses)
        })
        .collect();

    let mut assignments: BTreeMap<String, String> = summaries
        .iter()
        .map(|s| (s.course_id.clone(), FREE_ELECTIVE.to_string()))
        .collect();

    // Descending label order: the smallest label is processed last, so it
    // overwrites the others when a course appears in multiple groups.
    labeled.sort_by(|a, b| b.0.cmp(&a.0));
    for (label, courses) in &labeled {
        for id in courses {
            if let Some(slot) = assignments.get_mut(*id) {
                *slot = label.clone();
            }
        }
    }

    assignments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str) -> CourseSummary {
        CourseSummary {
            course_id: id.to_string(),
            name: format!("{id} name"),
            link: String::new(),
            foundational: false,
            num_reviews: 1,
            rating: 4.0,
            difficulty: 3.0,
            workload: 10.0,
        }
    }

    fn spec(requirements: Vec<RequirementGroup>) -> Specialization {
        Specialization {
            program_id: "compsci".to_string(),
            name: "Computing Systems".to_string(),
            requirements,
        }
    }

    fn group(group_type: GroupType, count: u32, courses: &[&str]) -> RequirementGroup {
        RequirementGroup {
            group_type,
            count,
            courses: courses.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn labels_numbered_independently_in_file_order() {
        let s = spec(vec![
            group(GroupType::Core, 2, &["CS-6200"]),
            group(GroupType::Elective, 3, &["CS-6250"]),
            group(GroupType::Core, 1, &["CS-6210"]),
        ]);
        let labels: Vec<String> = group_labels(&s).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, ["Core Group 1", "Elective Group 1", "Core Group 2"]);
    }

    #[test]
    fn shared_course_takes_smallest_label() {
        // CS-6200 sits in both a core and an elective group. The contract:
        // the lexicographically smallest label wins, here "Core Group 1".
        let s = spec(vec![
            group(GroupType::Core, 1, &["CS-6200"]),
            group(GroupType::Elective, 1, &["CS-6200"]),
        ]);
        let catalog = vec!["CS-6200".to_string()];
        let assignments = assign_groups(&[summary("CS-6200")], &s, &catalog);
        assert_eq!(assignments["CS-6200"], "Core Group 1");
    }

    #[test]
    fn unlisted_course_defaults_to_free_elective() {
        let s = spec(vec![group(GroupType::Core, 1, &["CS-6200"])]);
        let catalog = vec!["CS-6200".to_string(), "CS-7638".to_string()];
        let assignments = assign_groups(&[summary("CS-6200"), summary("CS-7638")], &s, &catalog);
        assert_eq!(assignments["CS-7638"], FREE_ELECTIVE);
        assert_eq!(assignments["CS-6200"], "Core Group 1");
    }

    #[test]
    fn retired_courses_dropped_from_groups() {
        // CS-9999 is in the group but not the active catalog; its summary
        // (if one somehow existed) must stay a free elective.
        let s = spec(vec![group(GroupType::Core, 1, &["CS-9999", "CS-6200"])]);
        let catalog = vec!["CS-6200".to_string()];
        let assignments = assign_groups(&[summary("CS-6200"), summary("CS-9999")], &s, &catalog);
        assert_eq!(assignments["CS-6200"], "Core Group 1");
        assert_eq!(assignments["CS-9999"], FREE_ELECTIVE);
    }

    #[test]
    fn group_member_without_summary_is_absent() {
        let s = spec(vec![group(GroupType::Core, 1, &["CS-6200", "CS-6210"])]);
        let catalog = vec!["CS-6200".to_string(), "CS-6210".to_string()];
        // CS-6210 has no reviews, so no summary row and no assignment.
        let assignments = assign_groups(&[summary("CS-6200")], &s, &catalog);
        assert!(!assignments.contains_key("CS-6210"));
    }
}
