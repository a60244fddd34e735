//! Loading graphs and presenting solutions.
//!
//! - [`GraphDescription`] — node-link JSON graph description
//! - [`SolutionReport`] — plain-text rendering of a [`Solution`](crate::models::Solution)

mod description;
mod report;

pub use description::{GraphDescription, LinkDescription, NodeDescription};
pub use report::SolutionReport;
