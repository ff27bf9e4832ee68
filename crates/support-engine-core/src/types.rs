use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Annual rates expressed as percentages (20 = 20%), as stored in the program catalog.
pub type Percent = Decimal;

/// Round to 2 decimal places, half away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// ---------------------------------------------------------------------------
// Business profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Startup,
    Sme,
    Individual,
    Ngo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessSize {
    Micro,
    Small,
    Medium,
    Large,
}

/// Read-only description of the applicant business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub business_type: BusinessType,
    pub business_size: BusinessSize,
    /// Free-text industry keywords, e.g. "it", "производство"
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_revenue: Option<Money>,
    /// Hierarchical activity code, e.g. "62.01"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_loan_amount: Option<Money>,
}

// ---------------------------------------------------------------------------
// Program catalog record
// ---------------------------------------------------------------------------

/// Sentinel region code meaning "available nationwide".
pub const ALL_REGIONS: &str = "ALL";

/// Read-only support program as materialised by the catalog layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free text used as the keyword surface for type/size/industry matching
    #[serde(default)]
    pub target_audience: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_amount: Option<Money>,
    /// Region codes, possibly containing the `ALL` sentinel. `None` = unrestricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_regions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification_filters: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_loan_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_loan_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_rate: Option<Percent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsidy_rate: Option<Percent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_loan_term_months: Option<u32>,
    #[serde(default)]
    pub calculator_enabled: bool,
}

impl ProgramRecord {
    /// Title, description and target audience joined and lower-cased.
    pub fn combined_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title, self.description, self.target_audience
        )
        .to_lowercase()
    }
}

// ---------------------------------------------------------------------------
// Output envelope
// ---------------------------------------------------------------------------

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
