use shared::{Expense, ExpensePayload, KNOWN_CATEGORIES, PAYMENT_METHODS};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::date_utils::current_date_iso;

#[derive(Properties, PartialEq)]
pub struct EditExpenseModalProps {
    pub expense: Expense,
    pub on_save: Callback<(String, ExpensePayload)>,
    pub on_close: Callback<()>,
    pub saving: bool,
}

/// Modal for editing an existing expense, pre-filled from the record. A
/// custom category that is not in the standard list shows up as its own
/// option so editing does not silently reassign it.
#[function_component(EditExpenseModal)]
pub fn edit_expense_modal(props: &EditExpenseModalProps) -> Html {
    let amount = use_state(|| format!("{}", props.expense.amount));
    let date = use_state(|| props.expense.date.clone());
    let category = use_state(|| props.expense.category.clone());
    let payment_method = use_state(|| props.expense.payment_method.clone());
    let notes = use_state(|| props.expense.notes.clone().unwrap_or_default());

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
        let payment_method = payment_method.clone();
        let notes = notes.clone();
        let id = props.expense.id.clone();
        let on_save = props.on_save.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit((
                id.clone(),
                ExpensePayload {
                    amount: (*amount).clone(),
                    date: (*date).clone(),
                    category: (*category).clone(),
                    payment_method: (*payment_method).clone(),
                    notes: (*notes).clone(),
                },
            ));
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let has_custom_category = !KNOWN_CATEGORIES.contains(&props.expense.category.as_str());

    html! {
        <div class="modal-overlay">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{"Edit Expense"}</h3>
                    <button class="modal-close" onclick={on_close.clone()}>{"×"}</button>
                </div>

                <form class="expense-form" onsubmit={onsubmit}>
                    <div class="form-group">
                        <label for="editAmount">{"Amount (₹)"}</label>
                        <input
                            type="number"
                            id="editAmount"
                            step="0.01"
                            min="0.01"
                            required=true
                            value={(*amount).clone()}
                            onchange={on_amount_change}
                            disabled={props.saving}
                        />
                    </div>

                    <div class="form-group">
                        <label for="editDate">{"Date"}</label>
                        <input
                            type="date"
                            id="editDate"
                            required=true
                            max={current_date_iso()}
                            value={(*date).clone()}
                            onchange={on_date_change}
                            disabled={props.saving}
                        />
                    </div>

                    <div class="form-group">
                        <label for="editCategory">{"Category"}</label>
                        <select id="editCategory" onchange={on_category_change} disabled={props.saving}>
                            {for KNOWN_CATEGORIES.iter().map(|c| html! {
                                <option value={*c} selected={*category == *c}>{*c}</option>
                            })}
                            {if has_custom_category {
                                let custom = props.expense.category.clone();
                                html! {
                                    <option value={custom.clone()} selected={*category == custom}>
                                        {custom.clone()}
                                    </option>
                                }
                            } else {
                                html! {}
                            }}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="editPaymentMethod">{"Payment Method"}</label>
                        <select id="editPaymentMethod" onchange={on_payment_method_change} disabled={props.saving}>
                            {for PAYMENT_METHODS.iter().map(|m| html! {
                                <option value={*m} selected={*payment_method == *m}>{*m}</option>
                            })}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="editNotes">{"Notes (optional)"}</label>
                        <textarea
                            id="editNotes"
                            value={(*notes).clone()}
                            onchange={on_notes_change}
                            disabled={props.saving}
                        />
                    </div>

                    <div class="modal-actions">
                        <button type="button" class="btn" onclick={on_close}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary" disabled={props.saving}>
                            {if props.saving { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
