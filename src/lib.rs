//! Grouped descriptive statistics for wine sample data.
//!
//! Pipeline: load a records-oriented dataset (`data::loader`), optionally
//! attach the derived Gamma column (`data::derive`), partition by the
//! `Alcohol` class and summarize a metric per group (`stats::grouped`), and
//! render the results as HTML tables (`report::html`).

pub mod data;
pub mod report;
pub mod stats;
