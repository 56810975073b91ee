//! Resume-to-job compatibility scoring.
//!
//! Two stateless stages: `parsing` turns an uploaded resume into a
//! `ParsedDocument`, and `analysis` scores that document against a
//! `JobRequirement`, producing a `ScoreReport` with gap analysis.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod models;
pub mod parsing;

pub use analysis::{analyze, input_warnings, CompatibilityScorer, RuleBasedScorer};
pub use errors::ParseError;
pub use models::{InputWarning, JobRequirement, MatchTier, ParsedDocument, ScoreReport};
pub use parsing::{parse_resume, DocumentFormat, DocumentParser};
