// Application service the CLI dispatches to. Every request is logged here,
// the evaluation itself stays in the pure engine modules.
use shared::models::{Evaluation, RawInputs};
use std::path::Path;

use crate::config::EngineSettings;
use crate::data::csv_batch::{BatchCsvReader, BatchRow};
use crate::error::EngineResult;
use crate::evaluate::evaluate_raw;
use crate::input::sanitize;

pub struct CalculatorService {
    settings: EngineSettings,
}

impl CalculatorService {
    pub fn new(settings: EngineSettings) -> Self {
        CalculatorService { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn calculate(&self, raw: &RawInputs) -> Evaluation {
        tracing::info!(
            ad_spend = %raw.ad_spend,
            ad_sales = %raw.ad_sales,
            total_sales = %raw.total_sales,
            "Received calculate request"
        );
        let evaluation = evaluate_raw(raw);
        match evaluation.reason() {
            Some(reason) => tracing::info!(?reason, "Calculation rejected"),
            None => tracing::info!("Calculation succeeded"),
        }
        evaluation
    }

    pub fn batch(&self, path: &Path) -> EngineResult<Vec<BatchRow>> {
        let delimiter = self.settings.csv_delimiter_byte()?;
        tracing::info!(
            path = %path.display(),
            delimiter = %(delimiter as char),
            "Received batch request"
        );
        let rows = BatchCsvReader::evaluate_file(path, delimiter).inspect_err(|e| {
            tracing::error!(path = %path.display(), error_detail = %e, "Batch evaluation failed");
        })?;
        let rejected = rows.iter().filter(|r| !r.evaluation.is_ok()).count();
        tracing::info!(rows = rows.len(), rejected, "Batch finished");
        Ok(rows)
    }

    pub fn sanitize(&self, text: &str) -> String {
        let sanitized = sanitize(text);
        tracing::debug!(raw = %text, sanitized = %sanitized, "Sanitized input");
        sanitized
    }
}
