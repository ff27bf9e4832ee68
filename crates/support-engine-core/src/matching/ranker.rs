use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::matching::scorer::MatchScorer;
use crate::matching::weights::ScoreWeights;
use crate::types::{with_metadata, BusinessProfile, ComputationOutput, ProgramRecord};

/// Upper bound on the shortlist length.
pub const MAX_RESULTS: usize = 10;

/// Candidate list size the platform caps requests at before calling the engine.
pub const PLATFORM_CANDIDATE_CAP: usize = 100;

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub weights: ScoreWeights,
    /// Clamped to `MAX_RESULTS`
    pub max_results: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            max_results: MAX_RESULTS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchInput {
    pub profile: BusinessProfile,
    /// Caller-ordered candidates, typically most recent first
    pub programs: Vec<ProgramRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<MatchConfig>,
}

/// A program with its score and the reasons it was recommended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub program: ProgramRecord,
    pub score: i32,
    pub match_reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutput {
    pub matches: Vec<MatchResult>,
    pub candidates_scored: usize,
    pub candidates_positive: usize,
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Score every candidate in input order, non-positive scores included.
pub fn score_candidates(
    scorer: &MatchScorer,
    profile: &BusinessProfile,
    programs: &[ProgramRecord],
) -> Vec<MatchResult> {
    programs
        .iter()
        .map(|program| {
            let scored = scorer.score(profile, program);
            MatchResult {
                program: program.clone(),
                score: scored.score,
                match_reasons: scored.match_reasons,
            }
        })
        .collect()
}

/// Keep positive scores, order by score descending (stable), truncate.
pub fn shortlist(scored: Vec<MatchResult>, max_results: usize) -> Vec<MatchResult> {
    let mut ranked: Vec<MatchResult> = scored.into_iter().filter(|m| m.score > 0).collect();

    // sort_by is stable: equal scores keep caller order
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(max_results.min(MAX_RESULTS));
    ranked
}

/// Score and shortlist `programs` for `profile`.
pub fn rank(
    scorer: &MatchScorer,
    profile: &BusinessProfile,
    programs: &[ProgramRecord],
    max_results: usize,
) -> Vec<MatchResult> {
    shortlist(score_candidates(scorer, profile, programs), max_results)
}

/// Rank programs for a business profile and wrap the shortlist in the
/// standard output envelope. Never fails; an empty shortlist is a valid result.
pub fn rank_programs(input: &MatchInput) -> ComputationOutput<MatchOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let config = input.config.clone().unwrap_or_default();
    let max_results = config.max_results.min(MAX_RESULTS);
    if config.max_results > MAX_RESULTS {
        warnings.push(format!(
            "max_results {} exceeds the limit; using {MAX_RESULTS}",
            config.max_results
        ));
    }
    if input.programs.len() > PLATFORM_CANDIDATE_CAP {
        warnings.push(format!(
            "{} candidates supplied; the platform normally caps requests at {PLATFORM_CANDIDATE_CAP}",
            input.programs.len()
        ));
    }

    let scorer = MatchScorer::new(config.weights);
    let all = score_candidates(&scorer, &input.profile, &input.programs);
    let candidates_scored = all.len();
    let candidates_positive = all.iter().filter(|m| m.score > 0).count();

    let output = MatchOutput {
        matches: shortlist(all, max_results),
        candidates_scored,
        candidates_positive,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Weighted eight-factor program matching",
        &serde_json::json!({
            "factors": [
                "business_type", "business_size", "industry", "classification_code",
                "region", "loan_amount", "experience", "revenue"
            ],
            "max_results": max_results,
            "minimum_score": 1,
            "tie_break": "input order",
        }),
        warnings,
        elapsed,
        output,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BusinessSize, BusinessType};

    fn profile() -> BusinessProfile {
        BusinessProfile {
            business_type: BusinessType::Individual,
            business_size: BusinessSize::Micro,
            industry: "услуги".into(),
            region: "Shymkent".into(),
            experience_years: 3,
            annual_revenue: None,
            classification_code: None,
            desired_loan_amount: None,
        }
    }

    fn restricted(title: &str) -> ProgramRecord {
        ProgramRecord {
            title: title.into(),
            supported_regions: Some(vec!["Atyrau".into()]),
            ..Default::default()
        }
    }

    fn unrestricted(title: &str) -> ProgramRecord {
        ProgramRecord {
            title: title.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_filters_non_positive() {
        let programs = vec![restricted("a"), unrestricted("b"), restricted("c")];
        let ranked = rank(&MatchScorer::default(), &profile(), &programs, MAX_RESULTS);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].program.title, "b");
    }

    #[test]
    fn test_truncates_to_ten() {
        let programs: Vec<ProgramRecord> = (0..25).map(|i| unrestricted(&format!("p{i}"))).collect();
        let ranked = rank(&MatchScorer::default(), &profile(), &programs, 50);
        assert_eq!(ranked.len(), MAX_RESULTS);
        // Ties keep input order
        let titles: Vec<&str> = ranked.iter().map(|m| m.program.title.as_str()).collect();
        assert_eq!(titles, vec!["p0", "p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8", "p9"]);
    }

    #[test]
    fn test_sorted_descending() {
        let mut better = unrestricted("services");
        better.description = "сфера услуг".into();
        let programs = vec![unrestricted("plain"), better];
        let ranked = rank(&MatchScorer::default(), &profile(), &programs, MAX_RESULTS);
        assert_eq!(ranked[0].program.title, "services");
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_score_candidates_keeps_everything() {
        let programs = vec![restricted("a"), unrestricted("b")];
        let all = score_candidates(&MatchScorer::default(), &profile(), &programs);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].score, 0);
    }

    #[test]
    fn test_rank_programs_envelope() {
        let input = MatchInput {
            profile: profile(),
            programs: vec![restricted("a"), unrestricted("b")],
            config: None,
        };
        let out = rank_programs(&input);
        assert_eq!(out.result.candidates_scored, 2);
        assert_eq!(out.result.candidates_positive, 1);
        assert_eq!(out.result.matches.len(), 1);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_rank_programs_warns_on_oversized_request() {
        let input = MatchInput {
            profile: profile(),
            programs: (0..101).map(|i| unrestricted(&format!("p{i}"))).collect(),
            config: Some(MatchConfig {
                max_results: 25,
                ..Default::default()
            }),
        };
        let out = rank_programs(&input);
        assert_eq!(out.result.matches.len(), MAX_RESULTS);
        assert_eq!(out.warnings.len(), 2);
    }

    #[test]
    fn test_match_result_serializes_flat() {
        let result = MatchResult {
            program: unrestricted("flat"),
            score: 15,
            match_reasons: vec!["x".into()],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["title"], "flat");
        assert_eq!(value["score"], 15);
        assert_eq!(value["match_reasons"][0], "x");
    }
}
