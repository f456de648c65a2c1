// Advertising metrics derived from validated inputs
pub mod acos;
pub mod organic;
pub mod tacos;

pub use acos::Acos;
pub use organic::{OrganicPercent, OrganicSales};
pub use tacos::Tacos;

use shared::models::{DerivedMetrics, ParsedInputs};

// Common trait for all metrics
pub trait MetricCalculator: Send + Sync {
    fn name(&self) -> &str;
    fn formula(&self) -> &str; // Human-readable formula, shown next to the results
    fn calculate(&self, inputs: &ParsedInputs) -> f64; // Inputs are validated, so this cannot fail
}

/// Computes all four metrics. No rounding happens here.
pub fn calculate_metrics(inputs: &ParsedInputs) -> DerivedMetrics {
    DerivedMetrics {
        tacos: Tacos.calculate(inputs),
        acos: Acos.calculate(inputs),
        organic_sales: OrganicSales.calculate(inputs),
        organic_percent: OrganicPercent.calculate(inputs),
    }
}

/// The calculators whose formulas are printed under the results.
pub fn headline_metrics() -> [&'static dyn MetricCalculator; 2] {
    [&Tacos, &Acos]
}
