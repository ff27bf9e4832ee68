use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use support_engine_core::matching::{self, MatchInput, MatchScorer, ScoreWeights};
use support_engine_core::subsidy::{self, CalculatorInput, ProgramCalculatorInput};
use support_engine_core::{BusinessProfile, EngineError, ProgramRecord};

/// Convert an engine error into a napi::Error whose reason starts with the error code.
fn to_napi_error(e: EngineError) -> napi::Error {
    napi::Error::from_reason(format!("{}: {}", e.code(), e))
}

fn parse<T: for<'de> Deserialize<'de>>(input_json: &str) -> NapiResult<T> {
    serde_json::from_str(input_json).map_err(|e| to_napi_error(e.into()))
}

fn render<T: serde::Serialize>(output: &T) -> NapiResult<String> {
    serde_json::to_string(output).map_err(|e| to_napi_error(e.into()))
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// One profile/program pair, optionally with custom weights.
#[derive(Deserialize)]
struct ScoreRequest {
    profile: BusinessProfile,
    program: ProgramRecord,
    #[serde(default)]
    weights: Option<ScoreWeights>,
}

#[napi]
pub fn match_programs(input_json: String) -> NapiResult<String> {
    let input: MatchInput = parse(&input_json)?;
    render(&matching::rank_programs(&input))
}

#[napi]
pub fn score_program(input_json: String) -> NapiResult<String> {
    let request: ScoreRequest = parse(&input_json)?;
    let scorer = MatchScorer::new(request.weights.unwrap_or_default());
    render(&scorer.score(&request.profile, &request.program))
}

#[napi]
pub fn default_score_weights() -> NapiResult<String> {
    render(&ScoreWeights::default())
}

// ---------------------------------------------------------------------------
// Subsidy calculator
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_subsidy(input_json: String) -> NapiResult<String> {
    let input: CalculatorInput = parse(&input_json)?;
    let output = subsidy::calculate_subsidy(&input).map_err(to_napi_error)?;
    render(&output)
}

#[napi]
pub fn calculate_program_subsidy(input_json: String) -> NapiResult<String> {
    let input: ProgramCalculatorInput = parse(&input_json)?;
    let output = subsidy::calculate_with_program(&input).map_err(to_napi_error)?;
    render(&output)
}

#[napi]
pub fn build_amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: CalculatorInput = parse(&input_json)?;
    let output = subsidy::build_amortization_schedule(&input).map_err(to_napi_error)?;
    render(&output)
}
