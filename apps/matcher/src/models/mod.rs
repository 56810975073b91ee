pub mod job;
pub mod report;
pub mod resume;

pub use job::JobRequirement;
pub use report::{InputWarning, MatchTier, ScoreReport};
pub use resume::ParsedDocument;
