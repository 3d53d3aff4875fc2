use gloo::net::http::Request;
use shared::{
    Budget, BudgetListResponse, BudgetPayload, Expense, ExpenseListResponse, ExpensePayload,
    MutationResponse, Summary, SummaryResponse,
};

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Get all expenses for the signed-in user
    pub async fn get_expenses(&self) -> Result<Vec<Expense>, String> {
        let url = format!("{}/api/expenses", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<ExpenseListResponse>().await {
                Ok(data) if data.success => Ok(data.expenses),
                Ok(data) => Err(data.error.unwrap_or_else(|| "Unknown error".to_string())),
                Err(e) => Err(format!("Failed to parse expenses: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch expenses: {}", e)),
        }
    }

    /// Add a new expense
    pub async fn add_expense(&self, payload: ExpensePayload) -> Result<(), String> {
        let url = format!("{}/api/expenses", self.base_url);

        match Request::post(&url)
            .json(&payload)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => Self::check_mutation(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Update an existing expense
    pub async fn update_expense(&self, id: &str, payload: ExpensePayload) -> Result<(), String> {
        let url = format!("{}/api/expenses/{}", self.base_url, id);

        match Request::put(&url)
            .json(&payload)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => Self::check_mutation(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Delete an expense
    pub async fn delete_expense(&self, id: &str) -> Result<(), String> {
        let url = format!("{}/api/expenses/{}", self.base_url, id);

        match Request::delete(&url).send().await {
            Ok(response) => Self::check_mutation(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Get all budgets for the signed-in user
    pub async fn get_budgets(&self) -> Result<Vec<Budget>, String> {
        let url = format!("{}/api/budgets", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<BudgetListResponse>().await {
                Ok(data) if data.success => Ok(data.budgets),
                Ok(data) => Err(data.error.unwrap_or_else(|| "Unknown error".to_string())),
                Err(e) => Err(format!("Failed to parse budgets: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch budgets: {}", e)),
        }
    }

    /// Set or replace the budget for a category
    pub async fn set_budget(&self, payload: BudgetPayload) -> Result<(), String> {
        let url = format!("{}/api/budgets", self.base_url);

        match Request::post(&url)
            .json(&payload)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => Self::check_mutation(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Delete a budget
    pub async fn delete_budget(&self, id: &str) -> Result<(), String> {
        let url = format!("{}/api/budgets/{}", self.base_url, id);

        match Request::delete(&url).send().await {
            Ok(response) => Self::check_mutation(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Get the server-computed spending summary
    pub async fn get_summary(&self) -> Result<Summary, String> {
        let url = format!("{}/api/reports/summary", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<SummaryResponse>().await {
                Ok(data) => match data.summary {
                    Some(summary) if data.success => Ok(summary),
                    _ => Err(data.error.unwrap_or_else(|| "Unknown error".to_string())),
                },
                Err(e) => Err(format!("Failed to parse summary: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch summary: {}", e)),
        }
    }

    async fn check_mutation(response: gloo::net::http::Response) -> Result<(), String> {
        match response.json::<MutationResponse>().await {
            Ok(data) if data.success => Ok(()),
            Ok(data) => Err(data.error.unwrap_or_else(|| "Unknown error".to_string())),
            Err(e) => Err(format!("Failed to parse response: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
