use shared::{Expense, KNOWN_CATEGORIES};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::edit_expense_modal::EditExpenseModal;
use crate::components::expense_form::ExpenseForm;
use crate::components::expense_list::ExpenseList;
use crate::components::notification::FlashMessage;
use crate::hooks::use_expenses;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ExpensesPageProps {
    pub api_client: ApiClient,
}

/// Full expense management: add form, searchable and filterable list, and
/// an edit modal. Search and category filter are purely client-side.
#[function_component(ExpensesPage)]
pub fn expenses_page(props: &ExpensesPageProps) -> Html {
    let expenses = use_expenses(&props.api_client);
    let search_term = use_state(String::new);
    let category_filter = use_state(String::new);
    let editing = use_state(|| None::<Expense>);

    {
        let refresh = expenses.actions.refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let on_search_input = {
        let search_term = search_term.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_term.set(input.value());
        })
    };

    let on_filter_change = {
        let category_filter = category_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category_filter.set(select.value());
        })
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |expense: Expense| editing.set(Some(expense)))
    };

    let on_close_modal = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    let on_save = {
        let editing = editing.clone();
        let update_expense = expenses.actions.update_expense.clone();
        Callback::from(move |(id, payload)| {
            update_expense.emit((id, payload));
            editing.set(None);
        })
    };

    let filtered: Vec<Expense> = expenses
        .state
        .expenses
        .iter()
        .filter(|e| search_term.is_empty() || e.matches_search(&search_term))
        .filter(|e| category_filter.is_empty() || e.category == *category_filter)
        .cloned()
        .collect();

    html! {
        <div class="page expenses-page">
            <FlashMessage notice={expenses.state.notice.clone()} />

            <section class="expense-form-section">
                <h2>{"Add Expense"}</h2>
                <ExpenseForm
                    on_submit={expenses.actions.add_expense.clone()}
                    saving={expenses.state.saving}
                />
            </section>

            <section class="expense-list-section">
                <div class="list-controls">
                    <h2>{"All Expenses"}</h2>
                    <input
                        type="search"
                        class="search-input"
                        placeholder="Search expenses..."
                        value={(*search_term).clone()}
                        oninput={on_search_input}
                    />
                    <select class="category-filter" onchange={on_filter_change}>
                        <option value="" selected={category_filter.is_empty()}>{"All Categories"}</option>
                        {for KNOWN_CATEGORIES.iter().map(|c| html! {
                            <option value={*c} selected={*category_filter == *c}>{*c}</option>
                        })}
                    </select>
                </div>

                <ExpenseList
                    expenses={filtered}
                    loading={expenses.state.loading}
                    on_edit={on_edit}
                    on_delete={expenses.actions.delete_expense.clone()}
                />
            </section>

            {if let Some(expense) = (*editing).clone() {
                html! {
                    <EditExpenseModal
                        expense={expense}
                        on_save={on_save}
                        on_close={on_close_modal}
                        saving={expenses.state.saving}
                    />
                }
            } else {
                html! {}
            }}
        </div>
    }
}
