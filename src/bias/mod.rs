//! Bias Analysis
//!
//! Bias axis construction, scoring, and debiasing (neutralize/equalize).

mod analyzer;
mod debias;

pub use analyzer::{bias_axis, score_against_axis};
pub use debias::{equalize, neutralize};
