use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three user-edited inputs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum InputField {
    AdSpend,
    AdSales,
    TotalSales,
}

impl InputField {
    pub const ALL: [InputField; 3] =
        [InputField::AdSpend, InputField::AdSales, InputField::TotalSales];

    pub fn label(&self) -> &'static str {
        match self {
            InputField::AdSpend => "Total Ad Spend ($)",
            InputField::AdSales => "Ad Sales ($)",
            InputField::TotalSales => "Total Sales ($)",
        }
    }
}

/// Raw text of all three fields, as typed by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawInputs {
    pub ad_spend: String,
    pub ad_sales: String,
    pub total_sales: String,
}

impl RawInputs {
    pub fn new(
        ad_spend: impl Into<String>,
        ad_sales: impl Into<String>,
        total_sales: impl Into<String>,
    ) -> Self {
        Self {
            ad_spend: ad_spend.into(),
            ad_sales: ad_sales.into(),
            total_sales: total_sales.into(),
        }
    }

    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::AdSpend => &self.ad_spend,
            InputField::AdSales => &self.ad_sales,
            InputField::TotalSales => &self.total_sales,
        }
    }

    pub fn get_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::AdSpend => &mut self.ad_spend,
            InputField::AdSales => &mut self.ad_sales,
            InputField::TotalSales => &mut self.total_sales,
        }
    }

    pub fn is_empty(&self) -> bool {
        InputField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ParsedInputs {
    pub ad_spend: f64,
    pub ad_sales: f64,
    pub total_sales: f64,
}

/// Why a triple of inputs was rejected. Display gives the default English message;
/// callers are free to translate the variant themselves.
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    #[error("Please enter valid numbers for all fields.")]
    MissingOrNonNumeric,

    #[error("Total Sales must be greater than 0.")]
    TotalSalesNotPositive,

    #[error("Ad Sales must be greater than 0.")]
    AdSalesNotPositive,

    #[error("Ad Spend cannot be negative.")]
    AdSpendNegative,

    #[error("Ad Sales cannot be greater than Total Sales.")]
    AdSalesExceedsTotalSales,
}

/// `Ok` is the Valid case, `Err` the Invalid case.
pub type ValidationOutcome = Result<ParsedInputs, ValidationErrorKind>;

/// TACoS, ACoS and organic percentage are in percent units, organic sales in currency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DerivedMetrics {
    pub tacos: f64,
    pub acos: f64,
    pub organic_sales: f64,
    pub organic_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayStrings {
    pub tacos: String,
    pub acos: String,
    pub organic_sales: String,
    pub organic_percent: String,
    /// e.g. `$500 (20% of total sales)`
    pub organic_summary: String,
}

/// Result of one evaluation, serialised as `{"kind": "ok", ...}` or `{"kind": "error", ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Evaluation {
    Ok {
        metrics: DerivedMetrics,
        display: DisplayStrings,
    },
    Error {
        reason: ValidationErrorKind,
    },
}

impl Evaluation {
    pub fn is_ok(&self) -> bool {
        matches!(self, Evaluation::Ok { .. })
    }

    pub fn metrics(&self) -> Option<&DerivedMetrics> {
        match self {
            Evaluation::Ok { metrics, .. } => Some(metrics),
            Evaluation::Error { .. } => None,
        }
    }

    pub fn display(&self) -> Option<&DisplayStrings> {
        match self {
            Evaluation::Ok { display, .. } => Some(display),
            Evaluation::Error { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<ValidationErrorKind> {
        match self {
            Evaluation::Ok { .. } => None,
            Evaluation::Error { reason } => Some(*reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_evaluation_serializes_with_kind_tag() {
        let eval = Evaluation::Error { reason: ValidationErrorKind::AdSalesExceedsTotalSales };
        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["reason"], "AdSalesExceedsTotalSales");
    }

    #[test]
    fn test_ok_evaluation_serializes_metrics_and_display() {
        let eval = Evaluation::Ok {
            metrics: DerivedMetrics {
                tacos: 20.0,
                acos: 25.0,
                organic_sales: 500.0,
                organic_percent: 20.0,
            },
            display: DisplayStrings {
                tacos: "20%".to_string(),
                acos: "25%".to_string(),
                organic_sales: "$500".to_string(),
                organic_percent: "20%".to_string(),
                organic_summary: "$500 (20% of total sales)".to_string(),
            },
        };
        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(json["kind"], "ok");
        assert_eq!(json["metrics"]["acos"], 25.0);
        assert_eq!(json["display"]["organic_sales"], "$500");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationErrorKind::TotalSalesNotPositive.to_string(),
            "Total Sales must be greater than 0."
        );
        assert_eq!(
            ValidationErrorKind::AdSpendNegative.to_string(),
            "Ad Spend cannot be negative."
        );
    }

    #[test]
    fn test_raw_inputs_field_access() {
        let mut raw = RawInputs::default();
        assert!(raw.is_empty());
        raw.get_mut(InputField::AdSales).push_str("2000");
        assert_eq!(raw.get(InputField::AdSales), "2000");
        assert!(!raw.is_empty());
    }
}
