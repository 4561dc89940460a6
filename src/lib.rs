//! Course-review aggregation for the OMSCS catalog.
//!
//! The library joins raw review records with course metadata, computes
//! per-course summary statistics, and classifies courses into
//! specialization requirement groups. Rendering is left to consumers; the
//! bundled CLI formats the tables as text and CSV.

pub mod data;
pub mod report;
