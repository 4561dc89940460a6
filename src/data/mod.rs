/// Data layer: loading, joining, aggregation and grouping.
///
/// Pipeline:
/// ```text
///  current_omscs_courses.csv      omscentral_courses.json
///          │                              │
///          ▼                              ▼
///    ┌──────────┐   active ids     ┌──────────┐
///    │ catalog   │ ───────────────▶│  loader   │  filter to catalog
///    └──────────┘                  └──────────┘
///                                        │
///  omscentral_reviews.json               ▼
///          │                     ┌───────────────┐
///          └────────────────────▶│  inner join    │  CourseReview rows
///                                └───────────────┘
///                                        │
///                                        ▼
///                                ┌───────────────┐
///                                │  aggregate     │  CourseSummary table
///                                └───────────────┘
///                                        │
///  omscentral_specializations.json       ▼
///          │                     ┌───────────────┐
///          └────────────────────▶│  grouping      │  course → group label
///                                └───────────────┘
/// ```
pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod grouping;
pub mod literal;
pub mod loader;
pub mod model;
pub mod semester;
pub mod store;

pub use error::{DataError, Result};
pub use model::{
    Course, CourseReview, CourseSummary, GroupType, RequirementGroup, Review, Specialization,
    FREE_ELECTIVE,
};
pub use store::{DataPaths, DataStore};
