// Advertising Cost of Sales: ad spend as a share of ad-attributed sales
use super::MetricCalculator;
use shared::models::ParsedInputs;

#[derive(Debug, Clone, Copy, Default)]
pub struct Acos;

impl MetricCalculator for Acos {
    fn name(&self) -> &str {
        "ACoS"
    }

    fn formula(&self) -> &str {
        "ACoS = ( Total Ad Spend ÷ Ad Sales ) × 100"
    }

    fn calculate(&self, inputs: &ParsedInputs) -> f64 {
        (inputs.ad_spend / inputs.ad_sales) * 100.0
    }
}
