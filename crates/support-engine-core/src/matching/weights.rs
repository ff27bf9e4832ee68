use serde::{Deserialize, Serialize};

/// Point values for every scoring rule.
///
/// All values are whole points; the mismatch penalty is the only negative
/// entry. Partial overrides deserialize on top of the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    // Business type
    pub business_type: i32,
    pub business_generic: i32,
    // Business size
    pub business_size: i32,
    // Industry categories
    pub industry_tech: i32,
    pub industry_manufacturing: i32,
    pub industry_agriculture: i32,
    pub industry_services: i32,
    pub industry_tourism: i32,
    pub industry_trade: i32,
    pub industry_construction: i32,
    pub industry_mismatch_penalty: i32,
    // Classification code
    pub classification_exact: i32,
    pub classification_related: i32,
    // Region
    pub region_exact: i32,
    pub region_all: i32,
    pub region_unrestricted: i32,
    // Loan amount
    pub loan_in_range: i32,
    pub loan_below_minimum: i32,
    pub loan_above_maximum: i32,
    pub loan_funding_fit: i32,
    // Experience
    pub experience_beginner: i32,
    pub experience_growth: i32,
    // Revenue
    pub revenue_funding_ratio: i32,
    pub revenue_grant_fit: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            business_type: 30,
            business_generic: 15,
            business_size: 20,
            industry_tech: 35,
            industry_manufacturing: 30,
            industry_agriculture: 35,
            industry_services: 30,
            industry_tourism: 30,
            industry_trade: 30,
            industry_construction: 30,
            industry_mismatch_penalty: -40,
            classification_exact: 35,
            classification_related: 20,
            region_exact: 25,
            region_all: 15,
            region_unrestricted: 15,
            loan_in_range: 30,
            loan_below_minimum: 15,
            loan_above_maximum: 5,
            loan_funding_fit: 20,
            experience_beginner: 20,
            experience_growth: 15,
            revenue_funding_ratio: 15,
            revenue_grant_fit: 10,
        }
    }
}

impl ScoreWeights {
    /// Every rule and its point value, in scorer evaluation order.
    pub fn point_values(&self) -> Vec<(&'static str, i32)> {
        vec![
            ("business_type", self.business_type),
            ("business_generic", self.business_generic),
            ("business_size", self.business_size),
            ("industry_tech", self.industry_tech),
            ("industry_manufacturing", self.industry_manufacturing),
            ("industry_agriculture", self.industry_agriculture),
            ("industry_services", self.industry_services),
            ("industry_tourism", self.industry_tourism),
            ("industry_trade", self.industry_trade),
            ("industry_construction", self.industry_construction),
            ("industry_mismatch_penalty", self.industry_mismatch_penalty),
            ("classification_exact", self.classification_exact),
            ("classification_related", self.classification_related),
            ("region_exact", self.region_exact),
            ("region_all", self.region_all),
            ("region_unrestricted", self.region_unrestricted),
            ("loan_in_range", self.loan_in_range),
            ("loan_below_minimum", self.loan_below_minimum),
            ("loan_above_maximum", self.loan_above_maximum),
            ("loan_funding_fit", self.loan_funding_fit),
            ("experience_beginner", self.experience_beginner),
            ("experience_growth", self.experience_growth),
            ("revenue_funding_ratio", self.revenue_funding_ratio),
            ("revenue_grant_fit", self.revenue_grant_fit),
        ]
    }

    /// Look up a single rule's point value by name.
    pub fn get(&self, rule: &str) -> Option<i32> {
        self.point_values()
            .into_iter()
            .find(|(name, _)| *name == rule)
            .map(|(_, points)| points)
    }
}
