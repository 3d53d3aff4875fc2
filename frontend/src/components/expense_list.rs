use shared::{category_icon, format_currency, payment_method_icon, Expense};
use yew::prelude::*;

use crate::services::date_utils::format_display_date;

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub on_edit: Callback<Expense>,
    pub on_delete: Callback<String>,
    /// Shown when the list is empty, e.g. "No expenses yet".
    #[prop_or("No expenses found".to_string())]
    pub empty_message: String,
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    if props.loading {
        return html! { <div class="loading">{"Loading expenses..."}</div> };
    }

    if props.expenses.is_empty() {
        return html! { <div class="empty-state">{&props.empty_message}</div> };
    }

    html! {
        <div class="table-container">
            <table class="expenses-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Category"}</th>
                        <th>{"Payment"}</th>
                        <th>{"Notes"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.expenses.iter().map(|expense| {
                        let on_edit = {
                            let on_edit = props.on_edit.clone();
                            let expense = expense.clone();
                            Callback::from(move |_| on_edit.emit(expense.clone()))
                        };
                        let on_delete = {
                            let on_delete = props.on_delete.clone();
                            let id = expense.id.clone();
                            Callback::from(move |_| on_delete.emit(id.clone()))
                        };

                        html! {
                            <tr key={expense.id.clone()}>
                                <td class="date">{format_display_date(&expense.date)}</td>
                                <td class="category">
                                    {format!("{} {}", category_icon(&expense.category), expense.category)}
                                </td>
                                <td class="payment">
                                    {format!("{} {}", payment_method_icon(&expense.payment_method), expense.payment_method)}
                                </td>
                                <td class="notes">{expense.notes.clone().unwrap_or_default()}</td>
                                <td class="amount">{format_currency(expense.amount)}</td>
                                <td class="actions">
                                    <button class="btn btn-small" onclick={on_edit}>{"Edit"}</button>
                                    <button class="btn btn-small btn-danger" onclick={on_delete}>{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
