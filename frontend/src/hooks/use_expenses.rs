use shared::{Expense, ExpensePayload};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::notification::Notice;
use crate::hooks::{confirm_dialog, show_notice};
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct ExpenseState {
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub saving: bool,
    pub notice: Option<Notice>,
}

pub struct UseExpensesResult {
    pub state: ExpenseState,
    pub actions: ExpenseActions,
}

#[derive(Clone)]
pub struct ExpenseActions {
    pub refresh: Callback<()>,
    pub add_expense: Callback<ExpensePayload>,
    pub update_expense: Callback<(String, ExpensePayload)>,
    pub delete_expense: Callback<String>,
}

/// Owns the expense list plus the add/edit/delete mutations. Every mutation
/// re-fetches the list afterwards so the page never shows stale records.
#[hook]
pub fn use_expenses(api_client: &ApiClient) -> UseExpensesResult {
    let expenses = use_state(Vec::<Expense>::new);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let notice = use_state(|| None::<Notice>);

    let refresh = {
        let api_client = api_client.clone();
        let expenses = expenses.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let expenses = expenses.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_expenses().await {
                    Ok(data) => expenses.set(data),
                    Err(e) => {
                        gloo::console::error!("Failed to load expenses:", e);
                    }
                }

                loading.set(false);
            });
        })
    };

    let add_expense = {
        let api_client = api_client.clone();
        let saving = saving.clone();
        let notice = notice.clone();
        let refresh = refresh.clone();

        use_callback((), move |payload: ExpensePayload, _| {
            let api_client = api_client.clone();
            let saving = saving.clone();
            let notice = notice.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                saving.set(true);

                match api_client.add_expense(payload).await {
                    Ok(()) => {
                        show_notice(&notice, Notice::success("Expense added successfully!"));
                        refresh.emit(());
                    }
                    Err(e) => {
                        show_notice(&notice, Notice::danger(e));
                    }
                }

                saving.set(false);
            });
        })
    };

    let update_expense = {
        let api_client = api_client.clone();
        let saving = saving.clone();
        let notice = notice.clone();
        let refresh = refresh.clone();

        use_callback((), move |(id, payload): (String, ExpensePayload), _| {
            let api_client = api_client.clone();
            let saving = saving.clone();
            let notice = notice.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                saving.set(true);

                match api_client.update_expense(&id, payload).await {
                    Ok(()) => {
                        show_notice(&notice, Notice::success("Expense updated successfully!"));
                        refresh.emit(());
                    }
                    Err(e) => {
                        show_notice(&notice, Notice::danger(e));
                    }
                }

                saving.set(false);
            });
        })
    };

    let delete_expense = {
        let api_client = api_client.clone();
        let notice = notice.clone();
        let refresh = refresh.clone();

        use_callback((), move |id: String, _| {
            if !confirm_dialog("Are you sure you want to delete this expense?") {
                return;
            }

            let api_client = api_client.clone();
            let notice = notice.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match api_client.delete_expense(&id).await {
                    Ok(()) => {
                        show_notice(&notice, Notice::success("Expense deleted successfully!"));
                        refresh.emit(());
                    }
                    Err(e) => {
                        show_notice(&notice, Notice::danger(e));
                    }
                }
            });
        })
    };

    let state = ExpenseState {
        expenses: (*expenses).clone(),
        loading: *loading,
        saving: *saving,
        notice: (*notice).clone(),
    };

    let actions = ExpenseActions {
        refresh,
        add_expense,
        update_expense,
        delete_expense,
    };

    UseExpensesResult { state, actions }
}
