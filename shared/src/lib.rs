use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub mod aggregation;

/// A single expense record as returned by the backend.
///
/// Records are immutable on the client; every create/update/delete goes
/// through the REST API and the list is re-fetched afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    /// Monetary amount. The wire value may be a JSON number or a numeric
    /// string; anything non-numeric is rejected at deserialization.
    #[serde(deserialize_with = "amount_from_wire")]
    pub amount: f64,
    /// ISO 8601 date string (YYYY-MM-DD), no time component.
    pub date: String,
    /// Free-text category label. Known categories get dedicated icons,
    /// anything else falls back to the generic one.
    pub category: String,
    pub payment_method: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A budget ceiling as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    /// Either a category name or the sentinel [`OVERALL_CATEGORY`] for the
    /// whole-month cap.
    pub category: String,
    #[serde(deserialize_with = "amount_from_wire")]
    pub amount: f64,
    /// Currently always "monthly".
    pub period: String,
}

/// Sentinel category marking the whole-month budget cap.
pub const OVERALL_CATEGORY: &str = "Overall";

/// Categories offered in the expense form select. Free-text entries beyond
/// this list are allowed ("custom" option).
pub const KNOWN_CATEGORIES: [&str; 9] = [
    "Food",
    "Transportation",
    "Petrol",
    "Shopping",
    "Entertainment",
    "Bills",
    "Healthcare",
    "Education",
    "Other",
];

pub const PAYMENT_METHODS: [&str; 5] =
    ["Cash", "Credit Card", "Debit Card", "UPI", "Bank Transfer"];

/// Body for POST /api/expenses and PUT /api/expenses/{id}.
///
/// The amount travels as the raw form string; the backend parses it and
/// reports validation failures through the response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensePayload {
    pub amount: String,
    pub date: String,
    pub category: String,
    pub payment_method: String,
    pub notes: String,
}

/// Body for POST /api/budgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetPayload {
    pub category: String,
    pub amount: String,
    pub period: String,
}

impl BudgetPayload {
    pub fn monthly(category: String, amount: String) -> Self {
        Self {
            category,
            amount,
            period: "monthly".to_string(),
        }
    }
}

/// Envelope for GET /api/expenses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpenseListResponse {
    pub success: bool,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Envelope for GET /api/budgets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BudgetListResponse {
    pub success: bool,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Envelope for every mutating endpoint: `{success, error?}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Envelope for GET /api/reports/summary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummaryResponse {
    pub success: bool,
    #[serde(default)]
    pub summary: Option<Summary>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Server-computed totals shown on the dashboard and reports pages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Summary {
    pub total_expenses: f64,
    pub monthly_total: f64,
    pub daily_average: f64,
    pub expense_count: u64,
    #[serde(default)]
    pub category_breakdown: HashMap<String, f64>,
    #[serde(default)]
    pub payment_method_breakdown: HashMap<String, f64>,
}

/// Display configuration for the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub currency_symbol: String,
    pub notification_duration_ms: u32,
    pub recent_expense_count: usize,
    pub top_category_count: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            notification_duration_ms: 3000,
            recent_expense_count: 5,
            top_category_count: 5,
        }
    }
}

impl Expense {
    /// Case-insensitive search over category, payment method and notes,
    /// mirroring the list filter on the expenses page.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.category.to_lowercase().contains(&term)
            || self.payment_method.to_lowercase().contains(&term)
            || self
                .notes
                .as_deref()
                .map(|n| n.to_lowercase().contains(&term))
                .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateParseError {
    #[error("invalid date string: {0:?}")]
    Invalid(String),
}

/// Parse a wire date (YYYY-MM-DD) into a calendar date.
pub fn parse_iso_date(date: &str) -> Result<chrono::NaiveDate, DateParseError> {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| DateParseError::Invalid(date.to_string()))
}

/// Fixed-symbol currency formatting: prefix plus exactly two decimals.
pub fn format_currency(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

/// Icon for a category. Total over all inputs: unknown categories get the
/// pin, same as the explicit "Other".
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Food" => "🍽️",
        "Transportation" => "🚗",
        "Petrol" => "⛽",
        "Shopping" => "🛍️",
        "Entertainment" => "🎬",
        "Bills" => "📄",
        "Healthcare" => "🏥",
        "Education" => "📚",
        "Other" => "📌",
        _ => "📌",
    }
}

pub fn payment_method_icon(method: &str) -> &'static str {
    match method {
        "Cash" => "💵",
        "Credit Card" => "💳",
        "Debit Card" => "💳",
        "UPI" => "📱",
        "Bank Transfer" => "🏦",
        _ => "💰",
    }
}

fn amount_from_wire<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(f64),
        Text(String),
    }

    match Wire::deserialize(deserializer)? {
        Wire::Number(n) => Ok(n),
        Wire::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount: {:?}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(amount: f64, category: &str) -> Expense {
        Expense {
            id: "e1".to_string(),
            amount,
            date: "2025-08-29".to_string(),
            category: category.to_string(),
            payment_method: "Cash".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_amount_accepts_number_and_numeric_string() {
        let from_number: Expense = serde_json::from_str(
            r#"{"id":"a","amount":12.5,"date":"2025-08-29","category":"Food","payment_method":"Cash"}"#,
        )
        .unwrap();
        assert_eq!(from_number.amount, 12.5);

        let from_string: Expense = serde_json::from_str(
            r#"{"id":"a","amount":"12.50","date":"2025-08-29","category":"Food","payment_method":"Cash"}"#,
        )
        .unwrap();
        assert_eq!(from_string.amount, 12.5);
    }

    #[test]
    fn test_amount_rejects_non_numeric_string() {
        let result: Result<Expense, _> = serde_json::from_str(
            r#"{"id":"a","amount":"twelve","date":"2025-08-29","category":"Food","payment_method":"Cash"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_notes_defaults_to_none() {
        let expense: Expense = serde_json::from_str(
            r#"{"id":"a","amount":1,"date":"2025-08-29","category":"Food","payment_method":"Cash"}"#,
        )
        .unwrap();
        assert_eq!(expense.notes, None);
    }

    #[test]
    fn test_error_envelope_without_data_fields() {
        let response: ExpenseListResponse =
            serde_json::from_str(r#"{"success":false,"error":"boom"}"#).unwrap();
        assert!(!response.success);
        assert!(response.expenses.is_empty());
        assert_eq!(response.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_budget_amount_from_string() {
        let budget: Budget = serde_json::from_str(
            r#"{"id":"b","category":"Overall","amount":"1000","period":"monthly"}"#,
        )
        .unwrap();
        assert_eq!(budget.amount, 1000.0);
    }

    #[test]
    fn test_format_currency_two_decimals() {
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(1234.5), "₹1234.50");
        assert_eq!(format_currency(99.999), "₹100.00");
    }

    #[test]
    fn test_category_icon_fallback() {
        assert_eq!(category_icon("Food"), "🍽️");
        assert_eq!(category_icon("Other"), "📌");
        assert_eq!(category_icon("Llama Rental"), "📌");
    }

    #[test]
    fn test_payment_method_icon_fallback() {
        assert_eq!(payment_method_icon("UPI"), "📱");
        assert_eq!(payment_method_icon("Barter"), "💰");
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        let mut e = expense(10.0, "Food");
        e.notes = Some("Weekly groceries".to_string());
        assert!(e.matches_search("food"));
        assert!(e.matches_search("GROCER"));
        assert!(e.matches_search("cash"));
        assert!(!e.matches_search("petrol"));
    }

    #[test]
    fn test_matches_search_without_notes() {
        let e = expense(10.0, "Bills");
        assert!(!e.matches_search("groceries"));
        assert!(e.matches_search("bill"));
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("2025-08-29"),
            Ok(chrono::NaiveDate::from_ymd_opt(2025, 8, 29).unwrap())
        );
        assert!(parse_iso_date("29/08/2025").is_err());
        assert!(parse_iso_date("").is_err());
    }
}
