pub mod identifiers;
pub mod recommendation;

pub use identifiers::{ItemId, SnapshotVersion};
pub use recommendation::{CandidateMatch, EngineResult, Outcome, RecommendationPayload};
