use clap::Args;
use serde_json::Value;

use support_engine_core::matching::ranker::{score_candidates, MatchInput};
use support_engine_core::matching::{rank_programs, MatchConfig, MatchScorer, ScoreWeights};

use crate::input;

/// Arguments for program matching
#[derive(Args)]
pub struct MatchArgs {
    /// Path to a JSON/YAML file with `profile` and `programs`
    #[arg(long)]
    pub input: Option<String>,

    /// Path to a JSON/YAML file overriding score weights
    #[arg(long)]
    pub weights: Option<String>,

    /// Maximum number of results (at most 10)
    #[arg(long)]
    pub max_results: Option<usize>,

    /// Print every candidate's score in input order, including non-positive ones
    #[arg(long)]
    pub all: bool,
}

/// Arguments for printing the scoring weights
#[derive(Args)]
pub struct WeightsArgs {
    /// Path to a JSON/YAML file to merge over the defaults
    #[arg(long)]
    pub weights: Option<String>,
}

fn load_weights(path: Option<&str>) -> Result<Option<ScoreWeights>, Box<dyn std::error::Error>> {
    match path {
        Some(p) => Ok(Some(input::file::read_input(p)?)),
        None => Ok(None),
    }
}

fn load_match_input(args: &MatchArgs) -> Result<MatchInput, Box<dyn std::error::Error>> {
    let mut match_input: MatchInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(piped) = input::stdin::read_stdin()? {
        piped
    } else {
        return Err("--input file is required for matching (or pipe JSON on stdin)".into());
    };

    let weights = load_weights(args.weights.as_deref())?;
    if weights.is_some() || args.max_results.is_some() {
        let mut config = match_input.config.take().unwrap_or_default();
        if let Some(w) = weights {
            config.weights = w;
        }
        if let Some(n) = args.max_results {
            config.max_results = n;
        }
        match_input.config = Some(config);
    }
    Ok(match_input)
}

pub fn run_match(args: MatchArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let match_input = load_match_input(&args)?;
    tracing::info!(
        programs = match_input.programs.len(),
        custom_config = match_input.config.is_some(),
        "ranking programs"
    );

    if args.all {
        let config = match_input.config.clone().unwrap_or_else(MatchConfig::default);
        let scorer = MatchScorer::new(config.weights);
        let candidates = score_candidates(&scorer, &match_input.profile, &match_input.programs);
        return Ok(serde_json::json!({ "result": { "candidates": candidates } }));
    }

    let output = rank_programs(&match_input);
    tracing::debug!(
        matched = output.result.matches.len(),
        positive = output.result.candidates_positive,
        "ranking complete"
    );
    Ok(serde_json::to_value(output)?)
}

pub fn run_weights(args: WeightsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let weights = load_weights(args.weights.as_deref())?.unwrap_or_default();
    Ok(serde_json::to_value(weights)?)
}
