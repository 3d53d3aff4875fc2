use shared::{ExpensePayload, KNOWN_CATEGORIES, PAYMENT_METHODS};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::date_utils::current_date_iso;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub on_submit: Callback<ExpensePayload>,
    pub saving: bool,
}

/// Add-expense form. Picking "Other (Custom)" in the category dropdown swaps
/// in a free-text input; submitting with that input empty is rejected locally
/// before anything reaches the server.
#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let amount = use_state(String::new);
    let date = use_state(current_date_iso);
    let category = use_state(|| KNOWN_CATEGORIES[0].to_string());
    let custom_category = use_state(String::new);
    let payment_method = use_state(|| PAYMENT_METHODS[0].to_string());
    let notes = use_state(String::new);
    let local_error = use_state(|| None::<String>);

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_date_change = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };

    let on_custom_category_change = {
        let custom_category = custom_category.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            custom_category.set(input.value());
        })
    };

    let on_payment_method_change = {
        let payment_method = payment_method.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            payment_method.set(select.value());
        })
    };

    let on_notes_change = {
        let notes = notes.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            notes.set(input.value());
        })
    };

    let onsubmit = {
        let amount = amount.clone();
        let date = date.clone();
        let category = category.clone();
        let custom_category = custom_category.clone();
        let payment_method = payment_method.clone();
        let notes = notes.clone();
        let local_error = local_error.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let chosen_category = if *category == "custom" {
                let name = custom_category.trim().to_string();
                if name.is_empty() {
                    local_error.set(Some("Please enter a custom category name".to_string()));
                    return;
                }
                name
            } else {
                (*category).clone()
            };
            local_error.set(None);

            on_submit.emit(ExpensePayload {
                amount: (*amount).clone(),
                date: (*date).clone(),
                category: chosen_category,
                payment_method: (*payment_method).clone(),
                notes: (*notes).clone(),
            });

            amount.set(String::new());
            custom_category.set(String::new());
            notes.set(String::new());
        })
    };

    html! {
        <form class="expense-form" onsubmit={onsubmit}>
            {if let Some(error) = (*local_error).as_ref() {
                html! { <div class="notification danger">{error}</div> }
            } else {
                html! {}
            }}

            <div class="form-group">
                <label for="amount">{"Amount (₹)"}</label>
                <input
                    type="number"
                    id="amount"
                    step="0.01"
                    min="0.01"
                    placeholder="0.00"
                    required=true
                    value={(*amount).clone()}
                    onchange={on_amount_change}
                    disabled={props.saving}
                />
            </div>

            <div class="form-group">
                <label for="date">{"Date"}</label>
                <input
                    type="date"
                    id="date"
                    required=true
                    max={current_date_iso()}
                    value={(*date).clone()}
                    onchange={on_date_change}
                    disabled={props.saving}
                />
            </div>

            <div class="form-group">
                <label for="category">{"Category"}</label>
                <select id="category" onchange={on_category_change} disabled={props.saving}>
                    {for KNOWN_CATEGORIES.iter().map(|c| html! {
                        <option value={*c} selected={*category == *c}>{*c}</option>
                    })}
                    <option value="custom" selected={*category == "custom"}>{"Other (Custom)"}</option>
                </select>
            </div>

            {if *category == "custom" {
                html! {
                    <div class="form-group">
                        <label for="customCategory">{"Custom Category"}</label>
                        <input
                            type="text"
                            id="customCategory"
                            placeholder="Category name"
                            value={(*custom_category).clone()}
                            onchange={on_custom_category_change}
                            disabled={props.saving}
                        />
                    </div>
                }
            } else {
                html! {}
            }}

            <div class="form-group">
                <label for="paymentMethod">{"Payment Method"}</label>
                <select id="paymentMethod" onchange={on_payment_method_change} disabled={props.saving}>
                    {for PAYMENT_METHODS.iter().map(|m| html! {
                        <option value={*m} selected={*payment_method == *m}>{*m}</option>
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for="notes">{"Notes (optional)"}</label>
                <textarea
                    id="notes"
                    placeholder="What was this for?"
                    value={(*notes).clone()}
                    onchange={on_notes_change}
                    disabled={props.saving}
                />
            </div>

            <button type="submit" class="btn btn-primary" disabled={props.saving}>
                {if props.saving { "Adding..." } else { "Add Expense" }}
            </button>
        </form>
    }
}
