// Display formatting for derived metrics
use shared::models::{DerivedMetrics, DisplayStrings};
use shared::utils::number_format::{format_grouped, format_trimmed};

pub const CURRENCY_SYMBOL: &str = "$";

/// `1234.5` -> `$1,234.50`, `500.0` -> `$500`. Negative amounts get the sign first: `-$5`.
pub fn format_currency(value: f64) -> String {
    let grouped = format_grouped(value);
    match grouped.strip_prefix('-') {
        Some(unsigned) => format!("-{}{}", CURRENCY_SYMBOL, unsigned),
        None => format!("{}{}", CURRENCY_SYMBOL, grouped),
    }
}

/// `20.0` -> `20%`, `66.666` -> `66.67%`. No thousands grouping.
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_trimmed(value))
}

pub fn organic_summary(organic_sales: f64, organic_percent: f64) -> String {
    format!(
        "{} ({} of total sales)",
        format_currency(organic_sales),
        format_percent(organic_percent)
    )
}

pub fn render(metrics: &DerivedMetrics) -> DisplayStrings {
    DisplayStrings {
        tacos: format_percent(metrics.tacos),
        acos: format_percent(metrics.acos),
        organic_sales: format_currency(metrics.organic_sales),
        organic_percent: format_percent(metrics.organic_percent),
        organic_summary: organic_summary(metrics.organic_sales, metrics.organic_percent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(500.0), "$500");
        assert_eq!(format_currency(11013.0), "$11,013");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.004), "$0");
        assert_eq!(format_currency(999.999), "$1,000");
    }

    #[test]
    fn test_format_currency_huge_amount() {
        let text = format_currency(1e307);
        assert!(!text.contains("inf"));
        assert!(text.starts_with("$99,999,999,999,999,998,603"));
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-5.0), "-$5");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(50.0), "50%");
        assert_eq!(format_percent(200.0 / 3.0), "66.67%");
        assert_eq!(format_percent(12.5), "12.50%");
        assert_eq!(format_percent(1500.0), "1500%");
    }

    #[test]
    fn test_render() {
        let metrics = DerivedMetrics {
            tacos: 20.0,
            acos: 25.0,
            organic_sales: 500.0,
            organic_percent: 20.0,
        };
        let display = render(&metrics);
        assert_eq!(display.tacos, "20%");
        assert_eq!(display.acos, "25%");
        assert_eq!(display.organic_sales, "$500");
        assert_eq!(display.organic_percent, "20%");
        assert_eq!(display.organic_summary, "$500 (20% of total sales)");
    }

    #[test]
    fn test_render_leaves_metrics_unrounded() {
        let metrics = DerivedMetrics {
            tacos: 1.0 / 3.0,
            acos: 0.5,
            organic_sales: 0.125,
            organic_percent: 99.999,
        };
        let before = metrics;
        let display = render(&metrics);
        assert_eq!(metrics, before);
        assert_eq!(display.tacos, "0.33%");
        assert_eq!(display.organic_sales, "$0.13");
        assert_eq!(display.organic_percent, "100%");
    }
}
