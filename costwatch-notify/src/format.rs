//! Pure text formatting helpers for the report.

use serde_json::Value;

use costwatch_core::CostReportResult;

/// Renders a value as a dollar amount with two decimal places.
pub fn format_currency(value: f64) -> String {
    format_currency_with(value, 2)
}

/// Renders a value as a dollar amount with explicit precision.
///
/// NaN renders as `"$NaN"`, matching what a lenient numeric parse of
/// non-numeric input produces downstream.
pub fn format_currency_with(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    format!("${value:.decimals$}")
}

/// Coerces a loosely typed JSON amount into a float.
///
/// Numbers pass through, numeric strings parse, anything else becomes NaN.
pub fn coerce_amount(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Renders the weekly cost block of the report.
///
/// A failed fetch renders a one-line error placeholder with no currency
/// figure. A successful fetch renders the window dates and the total
/// summed across every bucket, or an explicit no-usage line when the
/// window carries no data.
pub fn format_cost_report(report: &CostReportResult) -> String {
    match report {
        Err(e) => format!("*OpenAI Weekly API Cost:* Error fetching data - {e}"),
        Ok(report) => {
            let mut message = format!(
                "*OpenAI Weekly API Cost* ({} to {}):\n",
                report.start_date, report.end_date
            );

            if report.has_usage() {
                message.push_str(&format!(
                    "• *Total:* {}",
                    format_currency(report.total())
                ));
            } else {
                message.push_str("No usage data available for this period.");
            }

            message
        }
    }
}
