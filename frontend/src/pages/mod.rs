pub mod budgets;
pub mod dashboard;
pub mod expenses;
pub mod reports;

pub use budgets::BudgetsPage;
pub use dashboard::DashboardPage;
pub use expenses::ExpensesPage;
pub use reports::ReportsPage;

/// Top-level navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Expenses,
    Budgets,
    Reports,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Expenses, Page::Budgets, Page::Reports];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Expenses => "Expenses",
            Page::Budgets => "Budgets",
            Page::Reports => "Reports",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_labels() {
        assert_eq!(Page::ALL.len(), 4);
        assert_eq!(Page::Dashboard.label(), "Dashboard");
        assert_eq!(Page::Reports.label(), "Reports");
    }
}
