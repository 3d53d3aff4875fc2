use shared::{Budget, BudgetPayload, OVERALL_CATEGORY};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::notification::Notice;
use crate::hooks::{confirm_dialog, show_notice};
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct BudgetState {
    pub budgets: Vec<Budget>,
    pub loading: bool,
    pub saving: bool,
    pub notice: Option<Notice>,
}

pub struct UseBudgetsResult {
    pub state: BudgetState,
    pub actions: BudgetActions,
}

#[derive(Clone)]
pub struct BudgetActions {
    pub refresh: Callback<()>,
    pub set_budget: Callback<BudgetPayload>,
    pub delete_budget: Callback<String>,
}

/// Owns the budget list and its mutations. Setting a budget for a category
/// that already has one replaces it server-side; the follow-up refresh picks
/// up whichever record the server kept.
#[hook]
pub fn use_budgets(api_client: &ApiClient) -> UseBudgetsResult {
    let budgets = use_state(Vec::<Budget>::new);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let notice = use_state(|| None::<Notice>);

    let refresh = {
        let api_client = api_client.clone();
        let budgets = budgets.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let budgets = budgets.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_budgets().await {
                    Ok(data) => budgets.set(data),
                    Err(e) => {
                        gloo::console::error!("Failed to load budgets:", e);
                    }
                }

                loading.set(false);
            });
        })
    };

    let set_budget = {
        let api_client = api_client.clone();
        let saving = saving.clone();
        let notice = notice.clone();
        let refresh = refresh.clone();

        use_callback((), move |payload: BudgetPayload, _| {
            let api_client = api_client.clone();
            let saving = saving.clone();
            let notice = notice.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                saving.set(true);

                let message = if payload.category == OVERALL_CATEGORY {
                    "Overall budget set successfully!"
                } else {
                    "Category budget set successfully!"
                };

                match api_client.set_budget(payload).await {
                    Ok(()) => {
                        show_notice(&notice, Notice::success(message));
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

    let delete_budget = {
        let api_client = api_client.clone();
        let notice = notice.clone();
        let refresh = refresh.clone();

        use_callback((), move |id: String, _| {
            if !confirm_dialog("Are you sure you want to delete this budget?") {
                return;
            }

            let api_client = api_client.clone();
            let notice = notice.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match api_client.delete_budget(&id).await {
                    Ok(()) => {
                        show_notice(&notice, Notice::success("Budget deleted successfully!"));
                        refresh.emit(());
                    }
                    Err(e) => {
                        show_notice(&notice, Notice::danger(e));
                    }
                }
            });
        })
    };

    let state = BudgetState {
        budgets: (*budgets).clone(),
        loading: *loading,
        saving: *saving,
        notice: (*notice).clone(),
    };

    let actions = BudgetActions {
        refresh,
        set_budget,
        delete_budget,
    };

    UseBudgetsResult { state, actions }
}
