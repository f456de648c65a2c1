// Organic sales: whatever was sold without an ad click
use super::MetricCalculator;
use shared::models::ParsedInputs;

#[derive(Debug, Clone, Copy, Default)]
pub struct OrganicSales;

impl MetricCalculator for OrganicSales {
    fn name(&self) -> &str {
        "Organic Sales"
    }

    fn formula(&self) -> &str {
        "Organic Sales = Total Sales − Ad Sales"
    }

    // Never negative for validated inputs (ad sales <= total sales)
    fn calculate(&self, inputs: &ParsedInputs) -> f64 {
        inputs.total_sales - inputs.ad_sales
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OrganicPercent;

impl MetricCalculator for OrganicPercent {
    fn name(&self) -> &str {
        "Organic Sales %"
    }

    fn formula(&self) -> &str {
        "Organic Sales % = ( Organic Sales ÷ Total Sales ) × 100"
    }

    fn calculate(&self, inputs: &ParsedInputs) -> f64 {
        (OrganicSales.calculate(inputs) / inputs.total_sales) * 100.0
    }
}
