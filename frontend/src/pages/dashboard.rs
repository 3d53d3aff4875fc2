use shared::aggregation::{
    budget_status, category_monthly_total, progress_width, sorted_breakdown,
};
use shared::{
    category_icon, format_currency, ExpensePayload, TrackerConfig, KNOWN_CATEGORIES,
    OVERALL_CATEGORY,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::breakdown_list::{BreakdownList, IconStyle};
use crate::components::notification::FlashMessage;
use crate::hooks::{use_budgets, use_expenses, use_summary};
use crate::services::api::ApiClient;
use crate::services::date_utils::{current_date, current_date_iso, format_display_date};

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub api_client: ApiClient,
}

/// Overview page: summary cards, top category breakdown, recent expenses,
/// a glance at the budgets and a quick-add form.
#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let config = TrackerConfig::default();
    let expenses = use_expenses(&props.api_client);
    let budgets = use_budgets(&props.api_client);
    let summary = use_summary(&props.api_client);

    let quick_amount = use_state(String::new);
    let quick_category = use_state(|| KNOWN_CATEGORIES[0].to_string());

    {
        let refresh_expenses = expenses.actions.refresh.clone();
        use_effect_with((), move |_| {
            refresh_expenses.emit(());
            || ()
        });
    }

    // Summary and budgets follow the expense list: this runs on mount and
    // again after every mutation's re-fetch, so the joined views stay fresh.
    {
        let refresh_budgets = budgets.actions.refresh.clone();
        let refresh_summary = summary.refresh.clone();
        use_effect_with(expenses.state.expenses.clone(), move |_| {
            refresh_budgets.emit(());
            refresh_summary.emit(());
            || ()
        });
    }

    let on_quick_amount_change = {
        let quick_amount = quick_amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            quick_amount.set(input.value());
        })
    };

    let on_quick_category_change = {
        let quick_category = quick_category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            quick_category.set(select.value());
        })
    };

    // Quick add always books to today, paid in cash.
    let on_quick_submit = {
        let quick_amount = quick_amount.clone();
        let quick_category = quick_category.clone();
        let add_expense = expenses.actions.add_expense.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            add_expense.emit(ExpensePayload {
                amount: (*quick_amount).clone(),
                date: current_date_iso(),
                category: (*quick_category).clone(),
                payment_method: "Cash".to_string(),
                notes: "Quick expense entry".to_string(),
            });

            quick_amount.set(String::new());
        })
    };

    let top_categories = summary
        .state
        .summary
        .as_ref()
        .map(|s| {
            let mut entries = sorted_breakdown(&s.category_breakdown);
            entries.truncate(config.top_category_count);
            entries
        })
        .unwrap_or_default();

    let breakdown_total: f64 = summary
        .state
        .summary
        .as_ref()
        .map(|s| s.category_breakdown.values().sum())
        .unwrap_or(0.0);

    let recent: Vec<_> = expenses
        .state
        .expenses
        .iter()
        .take(config.recent_expense_count)
        .cloned()
        .collect();

    // Budget tiles need the expense list to compute this month's spend, so
    // hold them back until both fetches are in.
    let joined_ready = !expenses.state.loading && !budgets.state.loading;
    let today = current_date();

    let overall_budget = budgets
        .state
        .budgets
        .iter()
        .find(|b| b.category == OVERALL_CATEGORY);

    html! {
        <div class="page dashboard-page">
            <FlashMessage notice={expenses.state.notice.clone()} />

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
                                <span class="card-label">{"Transactions"}</span>
                                <span class="card-value">{s.expense_count}</span>
                            </div>
                            <div class="summary-card">
                                <span class="card-label">{"Overall Budget"}</span>
                                <span class="card-value">
                                    {match overall_budget {
                                        Some(b) => format_currency(b.amount),
                                        None => "Not Set".to_string(),
                                    }}
                                </span>
                            </div>
                        </>
                    }
                } else if summary.state.loading {
                    html! { <div class="loading">{"Loading summary..."}</div> }
                } else {
                    html! {}
                }}
            </section>

            <section class="dashboard-grid">
                <div class="dashboard-panel">
                    <h3>{"Top Categories"}</h3>
                    <BreakdownList
                        entries={top_categories}
                        total={breakdown_total}
                        icon={IconStyle::Category}
                        empty_message={"No expenses to show breakdown.".to_string()}
                    />
                </div>

                <div class="dashboard-panel">
                    <h3>{"Recent Expenses"}</h3>
                    {if expenses.state.loading {
                        html! { <div class="loading">{"Loading expenses..."}</div> }
                    } else if recent.is_empty() {
                        html! {
                            <p class="empty-state">{"No expenses yet. Add your first expense!"}</p>
                        }
                    } else {
                        html! {
                            <div class="recent-expenses">
                                {for recent.iter().map(|expense| html! {
                                    <div class="recent-expense-item" key={expense.id.clone()}>
                                        <div class="expense-icon">{category_icon(&expense.category)}</div>
                                        <div class="expense-details">
                                            <span class="expense-category">{&expense.category}</span>
                                            <span class="expense-date">{format_display_date(&expense.date)}</span>
                                        </div>
                                        <div class="expense-amount">{format_currency(expense.amount)}</div>
                                    </div>
                                })}
                            </div>
                        }
                    }}
                </div>

                <div class="dashboard-panel">
                    <h3>{"Budget Overview"}</h3>
                    {if !joined_ready {
                        html! { <div class="loading">{"Loading budgets..."}</div> }
                    } else {
                        let category_budgets: Vec<_> = budgets
                            .state
                            .budgets
                            .iter()
                            .filter(|b| b.category != OVERALL_CATEGORY)
                            .take(3)
                            .cloned()
                            .collect();

                        if category_budgets.is_empty() {
                            html! {
                                <p class="empty-state">
                                    {"No category budgets set. Set budgets for specific categories to track spending by category."}
                                </p>
                            }
                        } else {
                            html! {
                                <div class="budget-overview">
                                    {for category_budgets.iter().map(|budget| {
                                        let spent = category_monthly_total(
                                            &expenses.state.expenses,
                                            &budget.category,
                                            today,
                                        );
                                        let status = budget_status(budget.amount, spent);
                                        let width = progress_width(&status);
                                        let percentage_text = match status.percentage {
                                            Some(p) => format!("{:.0}%", p),
                                            None => "N/A".to_string(),
                                        };

                                        html! {
                                            <div class="budget-overview-item" key={budget.id.clone()}>
                                                <div class="budget-header">
                                                    <span class="budget-category">
                                                        {format!("{} {}", category_icon(&budget.category), budget.category)}
                                                    </span>
                                                    <span class={if status.over_budget { "budget-percentage over-budget" } else { "budget-percentage" }}>
                                                        {percentage_text}
                                                    </span>
                                                </div>
                                                <div class="progress-bar">
                                                    <div
                                                        class={if status.over_budget { "progress-fill danger" } else { "progress-fill" }}
                                                        style={format!("width: {:.1}%", width)}
                                                    ></div>
                                                </div>
                                                <div class="budget-amounts">
                                                    <span>{format!("{} / {}", format_currency(spent), format_currency(budget.amount))}</span>
                                                </div>
                                            </div>
                                        }
                                    })}
                                </div>
                            }
                        }
                    }}
                </div>

                <div class="dashboard-panel">
                    <h3>{"Quick Add"}</h3>
                    <form class="quick-expense-form" onsubmit={on_quick_submit}>
                        <input
                            type="number"
                            step="0.01"
                            min="0.01"
                            placeholder="Amount"
                            required=true
                            value={(*quick_amount).clone()}
                            onchange={on_quick_amount_change}
                            disabled={expenses.state.saving}
                        />
                        <select onchange={on_quick_category_change} disabled={expenses.state.saving}>
                            {for KNOWN_CATEGORIES.iter().map(|c| html! {
                                <option value={*c} selected={*quick_category == *c}>{*c}</option>
                            })}
                        </select>
                        <button type="submit" class="btn btn-primary" disabled={expenses.state.saving}>
                            {"Add"}
                        </button>
                    </form>
                </div>
            </section>
        </div>
    }
}
