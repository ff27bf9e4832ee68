pub mod amortization;
pub mod calculator;
pub mod program_bounds;

pub use amortization::{build_amortization_schedule, AmortizationRow, AmortizationSchedule};
pub use calculator::{calculate_subsidy, compare_payments, CalculatorInput, CalculatorResult};
pub use program_bounds::{
    calculate_with_program, ProgramCalculation, ProgramCalculatorInput, ProgramCalculatorMeta,
};
