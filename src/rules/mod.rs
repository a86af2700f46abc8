//! Match results: outcome classification and the end-of-match report.

pub mod outcome;
pub mod report;

pub use outcome::{MatchResult, Outcome};
pub use report::{MatchReport, PlayerResult};
