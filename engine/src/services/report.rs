// Plain-text rendering of evaluations for terminal output
use shared::models::Evaluation;

use crate::data::csv_batch::BatchRow;
use crate::metrics::{headline_metrics, Acos, MetricCalculator, OrganicSales, Tacos};

const LABEL_WIDTH: usize = 15;

fn labelled_line(metric: &dyn MetricCalculator, value: &str) -> String {
    format!("{:<width$}{}\n", format!("{}:", metric.name()), value, width = LABEL_WIDTH)
}

pub fn text_report(evaluation: &Evaluation) -> String {
    match evaluation {
        Evaluation::Ok { display, .. } => {
            let mut out = String::new();
            out.push_str(&labelled_line(&Tacos, &display.tacos));
            out.push_str(&labelled_line(&Acos, &display.acos));
            out.push_str(&labelled_line(&OrganicSales, &display.organic_summary));
            out.push('\n');
            for metric in headline_metrics() {
                out.push_str(metric.formula());
                out.push('\n');
            }
            out
        }
        Evaluation::Error { reason } => format!("{}\n", reason),
    }
}

pub fn batch_text_report(rows: &[BatchRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let label = row.label.as_deref().unwrap_or("-");
        let line = match &row.evaluation {
            Evaluation::Ok { display, .. } => format!(
                "line {}\t{}\tTACoS {}\tACoS {}\tOrganic {}\n",
                row.line, label, display.tacos, display.acos, display.organic_summary
            ),
            Evaluation::Error { reason } => {
                format!("line {}\t{}\terror: {}\n", row.line, label, reason)
            }
        };
        out.push_str(&line);
    }
    out
}
