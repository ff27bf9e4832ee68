//! Keyword tables used by the text heuristics.
//!
//! All keywords are lower-case. Keywords of three characters or fewer
//! ("it", "мсб", "нко") only match whole tokens; longer ones match as
//! substrings so that stems cover inflected forms.

use serde::{Deserialize, Serialize};

use crate::matching::weights::ScoreWeights;
use crate::types::{BusinessSize, BusinessType};

const SHORT_KEYWORD_CHARS: usize = 3;

/// True when `text` (already lower-cased) contains `keyword`.
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    if keyword.chars().count() <= SHORT_KEYWORD_CHARS {
        text.split(|c: char| !c.is_alphanumeric())
            .any(|token| token == keyword)
    } else {
        text.contains(keyword)
    }
}

/// True when `text` (already lower-cased) contains any of `keywords`.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| contains_keyword(text, kw))
}

// ---------------------------------------------------------------------------
// Audience keywords
// ---------------------------------------------------------------------------

pub fn business_type_keywords(business_type: BusinessType) -> &'static [&'static str] {
    match business_type {
        BusinessType::Startup => &["стартап", "startup", "инновацион"],
        BusinessType::Sme => &["мсб", "малого и среднего", "малый и средний", "sme", "smb"],
        BusinessType::Individual => &[
            "индивидуальн",
            "самозанят",
            "физических лиц",
            "individual",
            "self-employed",
        ],
        BusinessType::Ngo => &["нко", "некоммерческ", "общественн", "ngo", "non-profit"],
    }
}

pub const GENERIC_BUSINESS_KEYWORDS: &[&str] =
    &["предпринимат", "бизнес", "entrepreneur", "business"];

pub fn business_size_keywords(size: BusinessSize) -> &'static [&'static str] {
    match size {
        BusinessSize::Micro => &[
            "микробизнес",
            "микропредприят",
            "микропредприним",
            "микро-",
            "micro business",
            "micro-business",
            "microenterprise",
            "micro-enterprise",
        ],
        BusinessSize::Small => &["малый", "малого", "малых", "малому", "малым", "small"],
        BusinessSize::Medium => &[
            "средний",
            "среднего",
            "средних",
            "среднему",
            "средним",
            "medium",
        ],
        BusinessSize::Large => &["крупный", "крупного", "крупных", "крупному", "large"],
    }
}

// ---------------------------------------------------------------------------
// Program focus keywords
// ---------------------------------------------------------------------------

pub const STARTUP_KEYWORDS: &[&str] = &["стартап", "startup"];

pub const BEGINNER_KEYWORDS: &[&str] = &[
    "начинающ",
    "стартап",
    "startup",
    "молод",
    "впервые",
    "beginner",
    "new business",
];

pub const GROWTH_KEYWORDS: &[&str] = &[
    "расширен",
    "развити",
    "модернизац",
    "масштабир",
    "роста",
    "expansion",
    "growth",
];

pub const GRANT_KEYWORDS: &[&str] = &[
    "грант",
    "микрокредит",
    "безвозмезд",
    "grant",
    "microcredit",
    "micro-credit",
];

// ---------------------------------------------------------------------------
// Industry categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryCategory {
    Tech,
    Manufacturing,
    Agriculture,
    Services,
    Tourism,
    Trade,
    Construction,
}

impl IndustryCategory {
    /// Evaluation order; also the order reasons are emitted in.
    pub const ALL: [IndustryCategory; 7] = [
        IndustryCategory::Tech,
        IndustryCategory::Manufacturing,
        IndustryCategory::Agriculture,
        IndustryCategory::Services,
        IndustryCategory::Tourism,
        IndustryCategory::Trade,
        IndustryCategory::Construction,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            IndustryCategory::Tech => &[
                "it",
                "ит",
                "айти",
                "информацион",
                "цифров",
                "технолог",
                "программ",
                "software",
                "digital",
                "tech",
            ],
            IndustryCategory::Manufacturing => &[
                "производ",
                "завод",
                "промышлен",
                "фабрик",
                "переработ",
                "manufactur",
            ],
            IndustryCategory::Agriculture => &[
                "сельск",
                "агро",
                "фермер",
                "животновод",
                "растениевод",
                "agri",
                "farm",
            ],
            IndustryCategory::Services => &["услуг", "сервис", "обслуживан", "service"],
            IndustryCategory::Tourism => &[
                "туризм",
                "туристи",
                "гостинич",
                "отель",
                "tourism",
                "hotel",
                "hospitality",
            ],
            IndustryCategory::Trade => &["торгов", "ритейл", "экспорт", "trade", "retail"],
            IndustryCategory::Construction => &["строит", "стройк", "construction"],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IndustryCategory::Tech => "IT и технологии",
            IndustryCategory::Manufacturing => "производство",
            IndustryCategory::Agriculture => "сельское хозяйство",
            IndustryCategory::Services => "сфера услуг",
            IndustryCategory::Tourism => "туризм",
            IndustryCategory::Trade => "торговля",
            IndustryCategory::Construction => "строительство",
        }
    }

    pub fn points(self, weights: &ScoreWeights) -> i32 {
        match self {
            IndustryCategory::Tech => weights.industry_tech,
            IndustryCategory::Manufacturing => weights.industry_manufacturing,
            IndustryCategory::Agriculture => weights.industry_agriculture,
            IndustryCategory::Services => weights.industry_services,
            IndustryCategory::Tourism => weights.industry_tourism,
            IndustryCategory::Trade => weights.industry_trade,
            IndustryCategory::Construction => weights.industry_construction,
        }
    }

    pub fn matches(self, text: &str) -> bool {
        contains_any(text, self.keywords())
    }
}
