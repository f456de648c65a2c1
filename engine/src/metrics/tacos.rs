// Total Advertising Cost of Sales: ad spend as a share of all sales
use super::MetricCalculator;
use shared::models::ParsedInputs;

#[derive(Debug, Clone, Copy, Default)]
pub struct Tacos;

impl MetricCalculator for Tacos {
    fn name(&self) -> &str {
        "TACoS"
    }

    fn formula(&self) -> &str {
        "TACoS = ( Total Ad Spend ÷ Total Sales ) × 100"
    }

    fn calculate(&self, inputs: &ParsedInputs) -> f64 {
        (inputs.ad_spend / inputs.total_sales) * 100.0
    }
}
