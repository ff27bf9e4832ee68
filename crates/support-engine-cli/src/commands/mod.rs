pub mod matching;
pub mod subsidy;
