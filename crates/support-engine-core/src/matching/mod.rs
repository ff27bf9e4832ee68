pub mod factors;
pub mod keywords;
pub mod ranker;
pub mod scorer;
pub mod weights;

pub use factors::{Factor, FactorScore, FactorScorer};
pub use ranker::{rank_programs, MatchConfig, MatchInput, MatchOutput, MatchResult};
pub use scorer::{score_program, MatchScore, MatchScorer};
pub use weights::ScoreWeights;
