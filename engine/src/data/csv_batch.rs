use anyhow::anyhow;
use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;
use shared::models::{Evaluation, RawInputs};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::evaluate::evaluate_raw;
use crate::format::CURRENCY_SYMBOL;
use shared::utils::number_format::THOUSANDS_SEPARATOR;

pub const AD_SPEND_HEADER: &str = "Ad Spend";
pub const AD_SALES_HEADER: &str = "Ad Sales";
pub const TOTAL_SALES_HEADER: &str = "Total Sales";
pub const LABEL_HEADER: &str = "Label";

/// One evaluated data row. `line` is the 1-based line in the file (the header is line 1).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatchRow {
    pub line: usize,
    pub label: Option<String>,
    pub inputs: RawInputs,
    pub evaluation: Evaluation,
}

/// Drops the currency symbol and thousands separators a spreadsheet export tends to carry.
/// Signs are kept, so a negative amount is still reported as such.
pub fn normalize_amount(cell: &str) -> String {
    cell.chars()
        .filter(|c| {
            !CURRENCY_SYMBOL.contains(*c) && *c != THOUSANDS_SEPARATOR && !c.is_whitespace()
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    ad_spend: usize,
    ad_sales: usize,
    total_sales: usize,
    label: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> EngineResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name));
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                EngineError::CsvDataFormatError(format!("Missing '{}' column in CSV header", name))
            })
        };
        Ok(Columns {
            ad_spend: require(AD_SPEND_HEADER)?,
            ad_sales: require(AD_SALES_HEADER)?,
            total_sales: require(TOTAL_SALES_HEADER)?,
            label: find(LABEL_HEADER),
        })
    }
}

pub struct BatchCsvReader;

impl BatchCsvReader {
    // Header: Label,Ad Spend,Ad Sales,Total Sales (any order, Label optional)
    // Example Row: Garlic Press,500,2000,2500
    pub fn evaluate_file(path: &Path, delimiter: u8) -> EngineResult<Vec<BatchRow>> {
        let file = File::open(path)
            .map_err(|e| anyhow!("Failed to open CSV file '{}': {}", path.display(), e))?;
        Self::evaluate_reader(BufReader::new(file), delimiter)
    }

    pub fn evaluate_reader<R: Read>(reader: R, delimiter: u8) -> EngineResult<Vec<BatchRow>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let columns = Columns::from_headers(&headers)?;

        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result?;
            let line = idx + 2;

            let cell = |pos: usize| record.get(pos).map(normalize_amount).unwrap_or_default();
            let inputs = RawInputs::new(
                cell(columns.ad_spend),
                cell(columns.ad_sales),
                cell(columns.total_sales),
            );
            let label = columns
                .label
                .and_then(|pos| record.get(pos))
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string);

            let evaluation = evaluate_raw(&inputs);
            if let Some(reason) = evaluation.reason() {
                tracing::warn!(line, label = ?label, ?reason, "Row rejected");
            }
            rows.push(BatchRow { line, label, inputs, evaluation });
        }
        tracing::info!(rows = rows.len(), "Batch evaluated");
        Ok(rows)
    }
}
