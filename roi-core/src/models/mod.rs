mod employee_tier;
mod estimator_input;
mod monthly_savings;

pub use employee_tier::EmployeeTier;
pub use estimator_input::EstimatorInput;
pub use monthly_savings::MonthlySavings;
