pub mod descriptive;
pub mod diagnostic;
pub mod maturity;
pub mod predictive;
pub mod prescriptive;

pub use maturity::AnalyticsMaturityView;
