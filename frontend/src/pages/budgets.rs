use shared::aggregation::{category_monthly_total, find_budget, monthly_total};
use shared::{BudgetPayload, KNOWN_CATEGORIES, OVERALL_CATEGORY};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::budget_card::BudgetCard;
use crate::components::notification::FlashMessage;
use crate::hooks::{use_budgets, use_expenses};
use crate::services::api::ApiClient;
use crate::services::date_utils::current_date;

#[derive(Properties, PartialEq)]
pub struct BudgetsPageProps {
    pub api_client: ApiClient,
}

/// Budget management: one form for the overall monthly cap, one for
/// per-category budgets, and a card per budget showing this month's
/// consumption.
#[function_component(BudgetsPage)]
pub fn budgets_page(props: &BudgetsPageProps) -> Html {
    let budgets = use_budgets(&props.api_client);
    let expenses = use_expenses(&props.api_client);

    let overall_amount = use_state(String::new);
    let category_choice = use_state(|| KNOWN_CATEGORIES[0].to_string());
    let category_amount = use_state(String::new);

    {
        let refresh_budgets = budgets.actions.refresh.clone();
        let refresh_expenses = expenses.actions.refresh.clone();
        use_effect_with((), move |_| {
            refresh_budgets.emit(());
            refresh_expenses.emit(());
            || ()
        });
    }

    let on_overall_amount_change = {
        let overall_amount = overall_amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            overall_amount.set(input.value());
        })
    };

    let on_category_choice_change = {
        let category_choice = category_choice.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category_choice.set(select.value());
        })
    };

    let on_category_amount_change = {
        let category_amount = category_amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            category_amount.set(input.value());
        })
    };

    let on_overall_submit = {
        let overall_amount = overall_amount.clone();
        let set_budget = budgets.actions.set_budget.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            set_budget.emit(BudgetPayload::monthly(
                OVERALL_CATEGORY.to_string(),
                (*overall_amount).clone(),
            ));
            overall_amount.set(String::new());
        })
    };

    let on_category_submit = {
        let category_choice = category_choice.clone();
        let category_amount = category_amount.clone();
        let set_budget = budgets.actions.set_budget.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            set_budget.emit(BudgetPayload::monthly(
                (*category_choice).clone(),
                (*category_amount).clone(),
            ));
            category_amount.set(String::new());
        })
    };

    let today = current_date();
    let loading = budgets.state.loading || expenses.state.loading;
    let overall = find_budget(&budgets.state.budgets, OVERALL_CATEGORY);
    let overall_spent = monthly_total(&expenses.state.expenses, today);

    html! {
        <div class="page budgets-page">
            <FlashMessage notice={budgets.state.notice.clone()} />

            <section class="budget-forms">
                <div class="budget-form-panel">
                    <h3>{"Overall Monthly Budget"}</h3>
                    <form onsubmit={on_overall_submit}>
                        <div class="form-group">
                            <label for="overallAmount">{"Amount (₹)"}</label>
                            <input
                                type="number"
                                id="overallAmount"
                                step="0.01"
                                min="0.01"
                                required=true
                                value={(*overall_amount).clone()}
                                onchange={on_overall_amount_change}
                                disabled={budgets.state.saving}
                            />
                        </div>
                        <button type="submit" class="btn btn-primary" disabled={budgets.state.saving}>
                            {"Set Overall Budget"}
                        </button>
                    </form>
                </div>

                <div class="budget-form-panel">
                    <h3>{"Category Budget"}</h3>
                    <form onsubmit={on_category_submit}>
                        <div class="form-group">
                            <label for="budgetCategory">{"Category"}</label>
                            <select
                                id="budgetCategory"
                                onchange={on_category_choice_change}
                                disabled={budgets.state.saving}
                            >
                                {for KNOWN_CATEGORIES.iter().map(|c| html! {
                                    <option value={*c} selected={*category_choice == *c}>{*c}</option>
                                })}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="budgetAmount">{"Amount (₹)"}</label>
                            <input
                                type="number"
                                id="budgetAmount"
                                step="0.01"
                                min="0.01"
                                required=true
                                value={(*category_amount).clone()}
                                onchange={on_category_amount_change}
                                disabled={budgets.state.saving}
                            />
                        </div>
                        <button type="submit" class="btn btn-primary" disabled={budgets.state.saving}>
                            {"Set Category Budget"}
                        </button>
                    </form>
                </div>
            </section>

            <section class="budget-cards">
                {if loading {
                    html! { <div class="loading">{"Loading budgets..."}</div> }
                } else if budgets.state.budgets.is_empty() {
                    html! {
                        <p class="empty-state">{"No budgets set yet. Start with an overall monthly budget."}</p>
                    }
                } else {
                    html! {
                        <>
                            {if let Some(budget) = overall {
                                html! {
                                    <BudgetCard
                                        budget={budget.clone()}
                                        spent={overall_spent}
                                        on_delete={budgets.actions.delete_budget.clone()}
                                    />
                                }
                            } else {
                                html! {}
                            }}

                            {for budgets
                                .state
                                .budgets
                                .iter()
                                .filter(|b| b.category != OVERALL_CATEGORY)
                                .map(|budget| {
                                    let spent = category_monthly_total(
                                        &expenses.state.expenses,
                                        &budget.category,
                                        today,
                                    );
                                    html! {
                                        <BudgetCard
                                            key={budget.id.clone()}
                                            budget={budget.clone()}
                                            spent={spent}
                                            on_delete={budgets.actions.delete_budget.clone()}
                                        />
                                    }
                                })}
                        </>
                    }
                }}
            </section>
        </div>
    }
}
