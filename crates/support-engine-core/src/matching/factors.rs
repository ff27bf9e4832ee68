use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::matching::keywords::{
    business_size_keywords, business_type_keywords, contains_any, IndustryCategory,
    BEGINNER_KEYWORDS, GENERIC_BUSINESS_KEYWORDS, GRANT_KEYWORDS, GROWTH_KEYWORDS,
    STARTUP_KEYWORDS,
};
use crate::matching::weights::ScoreWeights;
use crate::types::{BusinessProfile, BusinessSize, BusinessType, Money, ProgramRecord, ALL_REGIONS};

/// Funding-to-desired ratio band accepted when a program only publishes a total.
const FUNDING_FIT_MIN_RATIO: Decimal = dec!(0.8);
const FUNDING_FIT_MAX_RATIO: Decimal = dec!(1.5);
/// Minimum funding-to-revenue ratio for the revenue factor.
const REVENUE_FUNDING_MIN_RATIO: Decimal = dec!(0.10);
const BEGINNER_MAX_YEARS: u32 = 2;
const GROWTH_MIN_YEARS: u32 = 5;

// ---------------------------------------------------------------------------
// Common types
// ---------------------------------------------------------------------------

/// The eight scoring dimensions, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    BusinessType,
    BusinessSize,
    Industry,
    ClassificationCode,
    Region,
    LoanAmount,
    Experience,
    Revenue,
}

/// Contribution of a single factor to a program's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: Factor,
    pub delta: i32,
    pub reasons: Vec<String>,
}

impl FactorScore {
    pub fn none(factor: Factor) -> Self {
        Self {
            factor,
            delta: 0,
            reasons: Vec::new(),
        }
    }

    fn add(&mut self, points: i32, reason: impl Into<String>) {
        self.delta += points;
        let reason = reason.into();
        if !reason.is_empty() {
            self.reasons.push(reason);
        }
    }
}

/// One scoring dimension. Implementations never fail: a missing optional
/// field yields a zero contribution.
pub trait FactorScorer: Send + Sync {
    fn factor(&self) -> Factor;

    fn score(
        &self,
        profile: &BusinessProfile,
        program: &ProgramRecord,
        weights: &ScoreWeights,
    ) -> FactorScore;
}

/// The eight standard scorers in evaluation order.
pub fn standard_scorers() -> Vec<Box<dyn FactorScorer>> {
    vec![
        Box::new(BusinessTypeScorer),
        Box::new(BusinessSizeScorer),
        Box::new(IndustryScorer),
        Box::new(ClassificationScorer),
        Box::new(RegionScorer),
        Box::new(LoanAmountScorer),
        Box::new(ExperienceScorer),
        Box::new(RevenueScorer),
    ]
}

// ---------------------------------------------------------------------------
// Business type
// ---------------------------------------------------------------------------

pub struct BusinessTypeScorer;

fn business_type_reason(business_type: BusinessType) -> &'static str {
    match business_type {
        BusinessType::Startup => "Программа для стартапов",
        BusinessType::Sme => "Программа для субъектов МСБ",
        BusinessType::Individual => "Программа для ИП и самозанятых",
        BusinessType::Ngo => "Программа для некоммерческих организаций",
    }
}

impl FactorScorer for BusinessTypeScorer {
    fn factor(&self) -> Factor {
        Factor::BusinessType
    }

    fn score(
        &self,
        profile: &BusinessProfile,
        program: &ProgramRecord,
        weights: &ScoreWeights,
    ) -> FactorScore {
        let mut out = FactorScore::none(self.factor());
        let audience = program.target_audience.to_lowercase();

        if contains_any(&audience, business_type_keywords(profile.business_type)) {
            out.add(
                weights.business_type,
                business_type_reason(profile.business_type),
            );
        }
        if contains_any(&audience, GENERIC_BUSINESS_KEYWORDS) {
            out.add(weights.business_generic, "Программа для предпринимателей");
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Business size
// ---------------------------------------------------------------------------

pub struct BusinessSizeScorer;

fn business_size_reason(size: BusinessSize) -> &'static str {
    match size {
        BusinessSize::Micro => "Подходит для микробизнеса",
        BusinessSize::Small => "Подходит для малого бизнеса",
        BusinessSize::Medium => "Подходит для среднего бизнеса",
        BusinessSize::Large => "Подходит для крупного бизнеса",
    }
}

impl FactorScorer for BusinessSizeScorer {
    fn factor(&self) -> Factor {
        Factor::BusinessSize
    }

    fn score(
        &self,
        profile: &BusinessProfile,
        program: &ProgramRecord,
        weights: &ScoreWeights,
    ) -> FactorScore {
        let mut out = FactorScore::none(self.factor());
        let audience = program.target_audience.to_lowercase();

        if contains_any(&audience, business_size_keywords(profile.business_size)) {
            out.add(
                weights.business_size,
                business_size_reason(profile.business_size),
            );
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Industry
// ---------------------------------------------------------------------------

pub struct IndustryScorer;

/// Industry categories present in both the profile and the program text.
pub fn shared_industries(profile_industry: &str, program_text: &str) -> Vec<IndustryCategory> {
    let industry = profile_industry.to_lowercase();
    IndustryCategory::ALL
        .into_iter()
        .filter(|c| c.matches(&industry) && c.matches(program_text))
        .collect()
}

/// A non-tech business looking at a program framed as a tech startup scheme.
pub fn is_tech_startup_mismatch(profile_industry: &str, program_text: &str) -> bool {
    let industry = profile_industry.trim().to_lowercase();
    if industry.is_empty() || IndustryCategory::Tech.matches(&industry) {
        return false;
    }
    IndustryCategory::Tech.matches(program_text) && contains_any(program_text, STARTUP_KEYWORDS)
}

impl FactorScorer for IndustryScorer {
    fn factor(&self) -> Factor {
        Factor::Industry
    }

    fn score(
        &self,
        profile: &BusinessProfile,
        program: &ProgramRecord,
        weights: &ScoreWeights,
    ) -> FactorScore {
        let mut out = FactorScore::none(self.factor());
        let text = program.combined_text();

        for category in shared_industries(&profile.industry, &text) {
            out.add(
                category.points(weights),
                format!("Отраслевое соответствие: {}", category.label()),
            );
        }

        // Penalty carries no user-facing reason.
        if is_tech_startup_mismatch(&profile.industry, &text) {
            out.add(weights.industry_mismatch_penalty, "");
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Classification code
// ---------------------------------------------------------------------------

pub struct ClassificationScorer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "filter", rename_all = "snake_case")]
pub enum ClassificationMatch {
    Exact(String),
    Related(String),
}

/// Loose hierarchy test between a user code and a program filter: the user
/// code lies under the filter, or both start with the same character.
///
/// The first-character branch over-matches (e.g. "62.01" vs "6") and is kept
/// isolated here so it can be tightened on its own.
pub fn shares_classification_root(user_code: &str, filter: &str) -> bool {
    if filter.is_empty() {
        return false;
    }
    if user_code.starts_with(filter) {
        return true;
    }
    match (filter.chars().next(), user_code.chars().next()) {
        (Some(f), Some(u)) => f == u,
        _ => false,
    }
}

/// Exact filter match wins; otherwise the first related filter, scanning in order.
pub fn classification_match(user_code: &str, filters: &[String]) -> Option<ClassificationMatch> {
    let code = user_code.trim();
    if code.is_empty() {
        return None;
    }

    let filters: Vec<&str> = filters
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect();

    if let Some(exact) = filters.iter().find(|f| **f == code) {
        return Some(ClassificationMatch::Exact((*exact).to_string()));
    }
    filters
        .iter()
        .find(|f| shares_classification_root(code, f))
        .map(|f| ClassificationMatch::Related((*f).to_string()))
}

impl FactorScorer for ClassificationScorer {
    fn factor(&self) -> Factor {
        Factor::ClassificationCode
    }

    fn score(
        &self,
        profile: &BusinessProfile,
        program: &ProgramRecord,
        weights: &ScoreWeights,
    ) -> FactorScore {
        let mut out = FactorScore::none(self.factor());
        let (Some(code), Some(filters)) = (
            profile.classification_code.as_deref(),
            program.classification_filters.as_deref(),
        ) else {
            return out;
        };

        match classification_match(code, filters) {
            Some(ClassificationMatch::Exact(filter)) => out.add(
                weights.classification_exact,
                format!("Точное совпадение кода ОКЭД {filter}"),
            ),
            Some(ClassificationMatch::Related(filter)) => out.add(
                weights.classification_related,
                format!("Смежный код ОКЭД ({filter})"),
            ),
            None => {}
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

pub struct RegionScorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionMatch {
    Exact,
    AllRegions,
    Unrestricted,
}

/// Precedence: exact region > `ALL` sentinel > no restriction at all.
pub fn region_match(region: &str, supported: Option<&[String]>) -> Option<RegionMatch> {
    let supported = match supported {
        None | Some([]) => return Some(RegionMatch::Unrestricted),
        Some(list) => list,
    };

    let region = region.trim().to_lowercase();
    if !region.is_empty()
        && supported
            .iter()
            .any(|r| r.trim().to_lowercase() == region)
    {
        return Some(RegionMatch::Exact);
    }
    if supported
        .iter()
        .any(|r| r.trim().eq_ignore_ascii_case(ALL_REGIONS))
    {
        return Some(RegionMatch::AllRegions);
    }
    None
}

impl FactorScorer for RegionScorer {
    fn factor(&self) -> Factor {
        Factor::Region
    }

    fn score(
        &self,
        profile: &BusinessProfile,
        program: &ProgramRecord,
        weights: &ScoreWeights,
    ) -> FactorScore {
        let mut out = FactorScore::none(self.factor());
        match region_match(&profile.region, program.supported_regions.as_deref()) {
            Some(RegionMatch::Exact) => {
                out.add(weights.region_exact, "Доступна в вашем регионе")
            }
            Some(RegionMatch::AllRegions) => {
                out.add(weights.region_all, "Доступна во всех регионах")
            }
            Some(RegionMatch::Unrestricted) => {
                out.add(weights.region_unrestricted, "Без региональных ограничений")
            }
            None => {}
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Loan amount
// ---------------------------------------------------------------------------

pub struct LoanAmountScorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanRangePosition {
    Within,
    BelowMinimum,
    AboveMaximum,
}

/// Position of `amount` relative to the closed interval [min, max]. A missing
/// bound is open on that side.
pub fn loan_range_position(
    amount: Money,
    min: Option<Money>,
    max: Option<Money>,
) -> LoanRangePosition {
    if min.is_some_and(|m| amount < m) {
        LoanRangePosition::BelowMinimum
    } else if max.is_some_and(|m| amount > m) {
        LoanRangePosition::AboveMaximum
    } else {
        LoanRangePosition::Within
    }
}

/// Whether a program's total funding is comparable to the requested amount.
pub fn funding_fits_request(funding: Money, desired: Money) -> bool {
    if desired <= Decimal::ZERO {
        return false;
    }
    // Compared as products: a tiny `desired` would overflow a quotient.
    match (
        desired.checked_mul(FUNDING_FIT_MIN_RATIO),
        desired.checked_mul(FUNDING_FIT_MAX_RATIO),
    ) {
        (Some(low), Some(high)) => funding >= low && funding <= high,
        _ => false,
    }
}

/// Whether funding reaches the minimum share of annual revenue.
pub fn funding_covers_revenue_share(funding: Money, revenue: Money) -> bool {
    funding >= revenue * REVENUE_FUNDING_MIN_RATIO
}

impl FactorScorer for LoanAmountScorer {
    fn factor(&self) -> Factor {
        Factor::LoanAmount
    }

    fn score(
        &self,
        profile: &BusinessProfile,
        program: &ProgramRecord,
        weights: &ScoreWeights,
    ) -> FactorScore {
        let mut out = FactorScore::none(self.factor());
        let Some(desired) = profile.desired_loan_amount.filter(|d| *d > Decimal::ZERO) else {
            return out;
        };

        if program.min_loan_amount.is_some() || program.max_loan_amount.is_some() {
            match loan_range_position(desired, program.min_loan_amount, program.max_loan_amount) {
                LoanRangePosition::Within => {
                    out.add(weights.loan_in_range, "Сумма займа в пределах программы")
                }
                LoanRangePosition::BelowMinimum => out.add(
                    weights.loan_below_minimum,
                    "Запрашиваемая сумма ниже минимальной по программе",
                ),
                LoanRangePosition::AboveMaximum => out.add(
                    weights.loan_above_maximum,
                    "Запрашиваемая сумма выше максимальной по программе",
                ),
            }
        } else if let Some(funding) = program.funding_amount {
            if funding_fits_request(funding, desired) {
                out.add(
                    weights.loan_funding_fit,
                    "Объём финансирования соответствует запросу",
                );
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Experience
// ---------------------------------------------------------------------------

pub struct ExperienceScorer;

impl FactorScorer for ExperienceScorer {
    fn factor(&self) -> Factor {
        Factor::Experience
    }

    fn score(
        &self,
        profile: &BusinessProfile,
        program: &ProgramRecord,
        weights: &ScoreWeights,
    ) -> FactorScore {
        let mut out = FactorScore::none(self.factor());
        let text = program.combined_text();

        if profile.experience_years <= BEGINNER_MAX_YEARS && contains_any(&text, BEGINNER_KEYWORDS)
        {
            out.add(
                weights.experience_beginner,
                "Подходит для начинающих предпринимателей",
            );
        } else if profile.experience_years >= GROWTH_MIN_YEARS
            && contains_any(&text, GROWTH_KEYWORDS)
        {
            out.add(
                weights.experience_growth,
                "Поддержка развития опытного бизнеса",
            );
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Revenue
// ---------------------------------------------------------------------------

pub struct RevenueScorer;

impl FactorScorer for RevenueScorer {
    fn factor(&self) -> Factor {
        Factor::Revenue
    }

    fn score(
        &self,
        profile: &BusinessProfile,
        program: &ProgramRecord,
        weights: &ScoreWeights,
    ) -> FactorScore {
        let mut out = FactorScore::none(self.factor());

        match profile.annual_revenue.filter(|r| *r > Decimal::ZERO) {
            Some(revenue) => {
                if let Some(funding) = program.funding_amount {
                    if funding_covers_revenue_share(funding, revenue) {
                        out.add(
                            weights.revenue_funding_ratio,
                            "Объём финансирования соизмерим с выручкой",
                        );
                    }
                }
            }
            None => {
                if contains_any(&program.title.to_lowercase(), GRANT_KEYWORDS) {
                    out.add(
                        weights.revenue_grant_fit,
                        "Грантовая поддержка без требований к выручке",
                    );
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn profile() -> BusinessProfile {
        BusinessProfile {
            business_type: BusinessType::Startup,
            business_size: BusinessSize::Small,
            industry: String::new(),
            region: String::new(),
            experience_years: 3,
            annual_revenue: None,
            classification_code: None,
            desired_loan_amount: None,
        }
    }

    fn program() -> ProgramRecord {
        ProgramRecord {
            supported_regions: Some(vec!["Astana".into()]),
            ..Default::default()
        }
    }

    fn run(scorer: &dyn FactorScorer, profile: &BusinessProfile, program: &ProgramRecord) -> FactorScore {
        scorer.score(profile, program, &ScoreWeights::default())
    }

    #[test]
    fn test_standard_scorers_order() {
        let factors: Vec<Factor> = standard_scorers().iter().map(|s| s.factor()).collect();
        assert_eq!(
            factors,
            vec![
                Factor::BusinessType,
                Factor::BusinessSize,
                Factor::Industry,
                Factor::ClassificationCode,
                Factor::Region,
                Factor::LoanAmount,
                Factor::Experience,
                Factor::Revenue,
            ]
        );
    }

    #[test]
    fn test_business_type_and_generic_are_independent() {
        let mut prog = program();
        prog.target_audience = "стартапы".into();
        assert_eq!(run(&BusinessTypeScorer, &profile(), &prog).delta, 30);

        prog.target_audience = "предприниматели".into();
        assert_eq!(run(&BusinessTypeScorer, &profile(), &prog).delta, 15);

        prog.target_audience = "стартапы и бизнес".into();
        let score = run(&BusinessTypeScorer, &profile(), &prog);
        assert_eq!(score.delta, 45);
        assert_eq!(score.reasons.len(), 2);
    }

    #[test]
    fn test_business_size() {
        let mut prog = program();
        prog.target_audience = "малый бизнес".into();
        assert_eq!(run(&BusinessSizeScorer, &profile(), &prog).delta, 20);

        let mut large = profile();
        large.business_size = BusinessSize::Large;
        assert_eq!(run(&BusinessSizeScorer, &large, &prog).delta, 0);
    }

    #[test]
    fn test_industry_category_points() {
        let mut p = profile();
        p.industry = "сельское хозяйство".into();
        let mut prog = program();
        prog.description = "поддержка фермерских хозяйств".into();
        let score = run(&IndustryScorer, &p, &prog);
        assert_eq!(score.delta, 35);
        assert_eq!(score.reasons, vec!["Отраслевое соответствие: сельское хозяйство"]);
    }

    #[test]
    fn test_industry_mismatch_penalty() {
        let mut p = profile();
        p.industry = "производство".into();
        let mut prog = program();
        prog.title = "IT-стартап акселератор".into();
        let score = run(&IndustryScorer, &p, &prog);
        assert_eq!(score.delta, -40);
        assert!(score.reasons.is_empty());
    }

    #[test]
    fn test_no_penalty_for_tech_profile_or_blank_industry() {
        let mut prog = program();
        prog.title = "IT-стартап акселератор".into();
        assert!(!is_tech_startup_mismatch("it", &prog.combined_text()));
        assert!(!is_tech_startup_mismatch("", &prog.combined_text()));
        assert!(!is_tech_startup_mismatch("производство", "гранты для стартапов"));
    }

    #[test]
    fn test_classification_exact_beats_earlier_related() {
        let filters = vec!["62".to_string(), "62.01".to_string()];
        assert_eq!(
            classification_match("62.01", &filters),
            Some(ClassificationMatch::Exact("62.01".into()))
        );
    }

    #[test]
    fn test_classification_first_related_wins() {
        let filters = vec!["10.1".to_string(), "62".to_string(), "6".to_string()];
        assert_eq!(
            classification_match("62.01", &filters),
            Some(ClassificationMatch::Related("62".into()))
        );
        let mut p = profile();
        p.classification_code = Some("62.01".into());
        let mut prog = program();
        prog.classification_filters = Some(filters);
        assert_eq!(run(&ClassificationScorer, &p, &prog).delta, 20);
    }

    #[test]
    fn test_shares_classification_root_first_character() {
        assert!(shares_classification_root("62.01", "62"));
        assert!(shares_classification_root("62.01", "63.11"));
        assert!(!shares_classification_root("62.01", "10.1"));
        assert!(!shares_classification_root("62.01", ""));
    }

    #[test]
    fn test_classification_missing_fields() {
        let mut prog = program();
        prog.classification_filters = Some(vec!["62.01".into()]);
        assert_eq!(run(&ClassificationScorer, &profile(), &prog), FactorScore::none(Factor::ClassificationCode));
    }

    #[test]
    fn test_region_precedence() {
        let list = vec!["ALL".to_string(), "Almaty".to_string()];
        assert_eq!(region_match("Almaty", Some(&list)), Some(RegionMatch::Exact));
        assert_eq!(region_match("Shymkent", Some(&list)), Some(RegionMatch::AllRegions));
        assert_eq!(region_match("Shymkent", None), Some(RegionMatch::Unrestricted));
        assert_eq!(region_match("Shymkent", Some(&[])), Some(RegionMatch::Unrestricted));
        let only = vec!["Almaty".to_string()];
        assert_eq!(region_match("Shymkent", Some(&only)), None);
    }

    #[test]
    fn test_loan_range_closed_interval() {
        let min = Some(dec!(1000));
        let max = Some(dec!(5000));
        assert_eq!(loan_range_position(dec!(1000), min, max), LoanRangePosition::Within);
        assert_eq!(loan_range_position(dec!(5000), min, max), LoanRangePosition::Within);
        assert_eq!(loan_range_position(dec!(999), min, max), LoanRangePosition::BelowMinimum);
        assert_eq!(loan_range_position(dec!(5001), min, max), LoanRangePosition::AboveMaximum);
        assert_eq!(loan_range_position(dec!(1), None, max), LoanRangePosition::Within);
    }

    #[test]
    fn test_loan_amount_points() {
        let mut p = profile();
        p.desired_loan_amount = Some(dec!(500));
        let mut prog = program();
        prog.min_loan_amount = Some(dec!(1000));
        assert_eq!(run(&LoanAmountScorer, &p, &prog).delta, 15);

        prog.min_loan_amount = None;
        prog.max_loan_amount = Some(dec!(100));
        assert_eq!(run(&LoanAmountScorer, &p, &prog).delta, 5);

        prog.max_loan_amount = None;
        prog.funding_amount = Some(dec!(600));
        assert_eq!(run(&LoanAmountScorer, &p, &prog).delta, 20);

        prog.funding_amount = Some(dec!(800));
        assert_eq!(run(&LoanAmountScorer, &p, &prog).delta, 0);
    }

    #[test]
    fn test_funding_fit_band_is_inclusive() {
        assert!(funding_fits_request(dec!(80), dec!(100)));
        assert!(funding_fits_request(dec!(150), dec!(100)));
        assert!(!funding_fits_request(dec!(79), dec!(100)));
        assert!(!funding_fits_request(dec!(151), dec!(100)));
        assert!(!funding_fits_request(dec!(100), dec!(0)));
    }

    #[test]
    fn test_funding_ratios_with_tiny_and_huge_amounts() {
        let huge = dec!(1000000000000000000000000);
        let tiny = dec!(0.000001);
        assert!(!funding_fits_request(huge, tiny));
        assert!(funding_covers_revenue_share(huge, tiny));
        assert!(!funding_fits_request(dec!(1), Decimal::MAX));
        assert!(funding_covers_revenue_share(Decimal::MAX, Decimal::MAX));

        let mut p = profile();
        p.annual_revenue = Some(tiny);
        p.desired_loan_amount = Some(tiny);
        let mut prog = program();
        prog.funding_amount = Some(huge);
        assert_eq!(run(&LoanAmountScorer, &p, &prog).delta, 0);
        assert_eq!(run(&RevenueScorer, &p, &prog).delta, 15);
    }

    #[test]
    fn test_experience_beginner_and_growth() {
        let mut p = profile();
        p.experience_years = 1;
        let mut prog = program();
        prog.description = "для начинающих предпринимателей".into();
        assert_eq!(run(&ExperienceScorer, &p, &prog).delta, 20);

        p.experience_years = 7;
        assert_eq!(run(&ExperienceScorer, &p, &prog).delta, 0);
        prog.description = "расширение производства".into();
        assert_eq!(run(&ExperienceScorer, &p, &prog).delta, 15);

        p.experience_years = 3;
        assert_eq!(run(&ExperienceScorer, &p, &prog).delta, 0);
    }

    #[test]
    fn test_revenue_ratio_and_grant() {
        let mut p = profile();
        p.annual_revenue = Some(dec!(1000));
        let mut prog = program();
        prog.funding_amount = Some(dec!(100));
        assert_eq!(run(&RevenueScorer, &p, &prog).delta, 15);

        prog.funding_amount = Some(dec!(99));
        assert_eq!(run(&RevenueScorer, &p, &prog).delta, 0);

        p.annual_revenue = Some(Decimal::ZERO);
        prog.title = "Государственный грант".into();
        assert_eq!(run(&RevenueScorer, &p, &prog).delta, 10);
    }
}
