//! The single entry point a caller needs: three raw strings in, an [`Evaluation`] out.
//!
//! Evaluation is pure. The same three strings always produce the same result,
//! and derived metrics are only ever produced from a triple that passed validation.

use shared::models::{Evaluation, RawInputs};

use crate::format::render;
use crate::metrics::calculate_metrics;
use crate::validation::validate;

pub fn evaluate(ad_spend: &str, ad_sales: &str, total_sales: &str) -> Evaluation {
    match validate(ad_spend, ad_sales, total_sales) {
        Ok(inputs) => {
            let metrics = calculate_metrics(&inputs);
            let display = render(&metrics);
            Evaluation::Ok { metrics, display }
        }
        Err(reason) => {
            tracing::debug!(?reason, "Inputs rejected");
            Evaluation::Error { reason }
        }
    }
}

pub fn evaluate_raw(raw: &RawInputs) -> Evaluation {
    evaluate(&raw.ad_spend, &raw.ad_sales, &raw.total_sales)
}
