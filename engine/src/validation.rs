// Parsing and validation of the three input fields.
use shared::models::{ParsedInputs, RawInputs, ValidationErrorKind, ValidationOutcome};

/// Parses one field. Empty text, unparseable text and non-finite values
/// (`inf`, `NaN`, overflowing exponents) are all `None`.
pub fn parse_field(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Checks the rules in a fixed order; the first one that fails is reported.
///
/// 1. every field parses to a finite number
/// 2. total sales > 0
/// 3. ad sales > 0
/// 4. ad spend >= 0
/// 5. ad sales <= total sales
pub fn validate(ad_spend: &str, ad_sales: &str, total_sales: &str) -> ValidationOutcome {
    let parsed = (parse_field(ad_spend), parse_field(ad_sales), parse_field(total_sales));
    let (ad_spend, ad_sales, total_sales) = match parsed {
        (Some(spend), Some(sales), Some(total)) => (spend, sales, total),
        _ => return Err(ValidationErrorKind::MissingOrNonNumeric),
    };

    if total_sales <= 0.0 {
        return Err(ValidationErrorKind::TotalSalesNotPositive);
    }
    if ad_sales <= 0.0 {
        return Err(ValidationErrorKind::AdSalesNotPositive);
    }
    if ad_spend < 0.0 {
        return Err(ValidationErrorKind::AdSpendNegative);
    }
    if ad_sales > total_sales {
        return Err(ValidationErrorKind::AdSalesExceedsTotalSales);
    }

    Ok(ParsedInputs { ad_spend, ad_sales, total_sales })
}

pub fn validate_raw(raw: &RawInputs) -> ValidationOutcome {
    validate(&raw.ad_spend, &raw.ad_sales, &raw.total_sales)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field("500"), Some(500.0));
        assert_eq!(parse_field(" 12.5 "), Some(12.5));
        assert_eq!(parse_field(".5"), Some(0.5));
        assert_eq!(parse_field("5."), Some(5.0));
        assert_eq!(parse_field("-5"), Some(-5.0));
    }

    #[test]
    fn test_parse_field_failures() {
        assert_eq!(parse_field(""), None);
        assert_eq!(parse_field("   "), None);
        assert_eq!(parse_field("."), None);
        assert_eq!(parse_field("12abc"), None);
        assert_eq!(parse_field("inf"), None);
        assert_eq!(parse_field("NaN"), None);
        assert_eq!(parse_field("1e400"), None);
    }

    #[test]
    fn test_valid_inputs() {
        let parsed = validate("500", "2000", "2500").unwrap();
        assert_eq!(parsed, ParsedInputs { ad_spend: 500.0, ad_sales: 2000.0, total_sales: 2500.0 });
    }

    #[test]
    fn test_zero_ad_spend_is_valid() {
        assert!(validate("0", "2000", "2500").is_ok());
    }

    #[test]
    fn test_ad_sales_equal_to_total_is_valid() {
        assert!(validate("100", "2500", "2500").is_ok());
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(validate("", "2000", "2500"), Err(ValidationErrorKind::MissingOrNonNumeric));
        assert_eq!(validate("500", ".", "2500"), Err(ValidationErrorKind::MissingOrNonNumeric));
    }

    #[test]
    fn test_ad_sales_exceeds_total() {
        assert_eq!(
            validate("500", "2600", "2500"),
            Err(ValidationErrorKind::AdSalesExceedsTotalSales)
        );
    }

    #[test]
    fn test_total_sales_zero() {
        assert_eq!(validate("500", "2000", "0"), Err(ValidationErrorKind::TotalSalesNotPositive));
    }

    #[test]
    fn test_ad_spend_negative() {
        assert_eq!(validate("-5", "2000", "2500"), Err(ValidationErrorKind::AdSpendNegative));
    }

    #[test]
    fn test_ad_sales_zero() {
        assert_eq!(validate("5", "0", "2500"), Err(ValidationErrorKind::AdSalesNotPositive));
    }

    #[test]
    fn test_rule_order_first_failure_wins() {
        // fails rules 2, 3 and 4: total sales is reported
        assert_eq!(validate("-1", "0", "0"), Err(ValidationErrorKind::TotalSalesNotPositive));
        // fails rules 3 and 4
        assert_eq!(validate("-1", "-3", "10"), Err(ValidationErrorKind::AdSalesNotPositive));
        // fails rules 4 and 5
        assert_eq!(validate("-1", "30", "10"), Err(ValidationErrorKind::AdSpendNegative));
        // non-numeric beats everything
        assert_eq!(validate("x", "0", "0"), Err(ValidationErrorKind::MissingOrNonNumeric));
    }

    #[test]
    fn test_validate_raw() {
        let raw = RawInputs::new("500", "2000", "2500");
        assert!(validate_raw(&raw).is_ok());
    }
}
