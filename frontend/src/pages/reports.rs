use shared::aggregation::{category_breakdown, payment_method_breakdown, top_categories};
use shared::{format_currency, TrackerConfig};
use yew::prelude::*;

use crate::components::breakdown_list::{BreakdownList, IconStyle};
use crate::components::charts::{ComparisonChart, TrendChart};
use crate::hooks::{use_expenses, use_summary};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ReportsPageProps {
    pub api_client: ApiClient,
}

/// Analytics page: headline numbers from the server summary, plus charts and
/// breakdowns computed client-side from the raw expense list.
#[function_component(ReportsPage)]
pub fn reports_page(props: &ReportsPageProps) -> Html {
    let config = TrackerConfig::default();
    let expenses = use_expenses(&props.api_client);
    let summary = use_summary(&props.api_client);

    {
        let refresh_expenses = expenses.actions.refresh.clone();
        let refresh_summary = summary.refresh.clone();
        use_effect_with((), move |_| {
            refresh_expenses.emit(());
            refresh_summary.emit(());
            || ()
        });
    }

    let categories = category_breakdown(&expenses.state.expenses);
    let payment_methods = payment_method_breakdown(&expenses.state.expenses);
    let top = top_categories(&expenses.state.expenses, config.top_category_count);

    let category_entries: Vec<(String, f64)> = categories
        .sorted_desc()
        .entries()
        .map(|(label, value)| (label.to_string(), value))
        .collect();
    let payment_entries: Vec<(String, f64)> = payment_methods
        .sorted_desc()
        .entries()
        .map(|(label, value)| (label.to_string(), value))
        .collect();
    let top_entries: Vec<(String, f64)> = top
        .entries()
        .map(|(label, value)| (label.to_string(), value))
        .collect();

    html! {
        <div class="page reports-page">
            <section class="summary-cards">
                {if let Some(s) = summary.state.summary.as_ref() {
                    html! {
                        <>
                            <div class="summary-card">
                                <span class="card-label">{"Total Expenses"}</span>
                                <span class="card-value">{format_currency(s.total_expenses)}</span>
                            </div>
                            <div class="summary-card">
                                <span class="card-label">{"This Month"}</span>
                                <span class="card-value">{format_currency(s.monthly_total)}</span>
                            </div>
                            <div class="summary-card">
                                <span class="card-label">{"Daily Average"}</span>
                                <span class="card-value">{format_currency(s.daily_average)}</span>
                            </div>
                            <div class="summary-card">
                                <span class="card-label">{"Transactions"}</span>
                                <span class="card-value">{s.expense_count}</span>
                            </div>
                        </>
                    }
                } else if summary.state.loading {
                    html! { <div class="loading">{"Loading summary..."}</div> }
                } else {
                    html! {}
                }}
            </section>

            <section class="report-charts">
                <TrendChart
                    expenses={expenses.state.expenses.clone()}
                    loading={expenses.state.loading}
                />
                <ComparisonChart
                    expenses={expenses.state.expenses.clone()}
                    loading={expenses.state.loading}
                />
            </section>

            <section class="report-breakdowns">
                <div class="report-panel">
                    <h3>{"Spending by Category"}</h3>
                    <BreakdownList
                        entries={category_entries}
                        total={categories.total()}
                        icon={IconStyle::Category}
                    />
                </div>

                <div class="report-panel">
                    <h3>{"Payment Methods"}</h3>
                    <BreakdownList
                        entries={payment_entries}
                        total={payment_methods.total()}
                        icon={IconStyle::PaymentMethod}
                    />
                </div>

                <div class="report-panel">
                    <h3>{"Top 5 Categories"}</h3>
                    <BreakdownList
                        entries={top_entries}
                        total={categories.total()}
                        icon={IconStyle::Category}
                    />
                </div>
            </section>
        </div>
    }
}
