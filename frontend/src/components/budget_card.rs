use shared::aggregation::{budget_status, progress_width};
use shared::{category_icon, format_currency, Budget, OVERALL_CATEGORY};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BudgetCardProps {
    pub budget: Budget,
    /// Current-month spend for this budget's category (or all categories for
    /// the overall budget).
    pub spent: f64,
    pub on_delete: Callback<String>,
}

/// One budget with its progress bar. The displayed percentage is the real
/// consumption (it can exceed 100%); only the bar width is clamped.
#[function_component(BudgetCard)]
pub fn budget_card(props: &BudgetCardProps) -> Html {
    let status = budget_status(props.budget.amount, props.spent);
    let width = progress_width(&status);

    let percentage_text = match status.percentage {
        Some(p) => format!("{:.1}%", p),
        None => "N/A".to_string(),
    };

    let icon = if props.budget.category == OVERALL_CATEGORY {
        "🎯"
    } else {
        category_icon(&props.budget.category)
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = props.budget.id.clone();
        Callback::from(move |_| on_delete.emit(id.clone()))
    };

    html! {
        <div class={if status.over_budget { "budget-card over-budget" } else { "budget-card" }}>
            <div class="budget-card-header">
                <h4>{format!("{} {}", icon, props.budget.category)}</h4>
                <button class="btn btn-small btn-danger" onclick={on_delete}>{"Delete"}</button>
            </div>

            <div class="budget-amounts">
                <span>{format!("Spent: {}", format_currency(status.spent))}</span>
                <span>{format!("Budget: {}", format_currency(status.budget))}</span>
            </div>

            <div class="progress-bar">
                <div
                    class={if status.over_budget { "progress-fill danger" } else { "progress-fill" }}
                    style={format!("width: {:.1}%", width)}
                ></div>
            </div>

            <div class="budget-footer">
                <span class="budget-percentage">{percentage_text}</span>
                {if status.over_budget {
                    html! {
                        <span class="budget-warning">
                            {format!("Over by {}", format_currency(-status.remaining))}
                        </span>
                    }
                } else {
                    html! {
                        <span class="budget-remaining">
                            {format!("{} remaining", format_currency(status.remaining))}
                        </span>
                    }
                }}
            </div>
        </div>
    }
}
