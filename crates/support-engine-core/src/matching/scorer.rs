use serde::{Deserialize, Serialize};

use crate::matching::factors::{standard_scorers, FactorScore, FactorScorer};
use crate::matching::weights::ScoreWeights;
use crate::types::{BusinessProfile, ProgramRecord};

/// Total score for one (profile, program) pair with its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub score: i32,
    /// Reasons in scorer evaluation order
    pub match_reasons: Vec<String>,
    pub breakdown: Vec<FactorScore>,
}

/// Sums the factor scorers' deltas for a single program.
pub struct MatchScorer {
    weights: ScoreWeights,
    scorers: Vec<Box<dyn FactorScorer>>,
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(ScoreWeights::default())
    }
}

impl MatchScorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self::with_scorers(weights, standard_scorers())
    }

    /// Custom scorer set, evaluated in the given order.
    pub fn with_scorers(weights: ScoreWeights, scorers: Vec<Box<dyn FactorScorer>>) -> Self {
        Self { weights, scorers }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    pub fn score(&self, profile: &BusinessProfile, program: &ProgramRecord) -> MatchScore {
        let breakdown: Vec<FactorScore> = self
            .scorers
            .iter()
            .map(|s| s.score(profile, program, &self.weights))
            .collect();

        let score = breakdown.iter().map(|f| f.delta).sum();
        let match_reasons = breakdown
            .iter()
            .flat_map(|f| f.reasons.iter().cloned())
            .collect();

        MatchScore {
            score,
            match_reasons,
            breakdown,
        }
    }
}

/// Score a single program with the default weights.
pub fn score_program(profile: &BusinessProfile, program: &ProgramRecord) -> MatchScore {
    MatchScorer::default().score(profile, program)
}
