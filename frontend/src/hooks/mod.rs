pub mod use_budgets;
pub mod use_expenses;
pub mod use_summary;

pub use use_budgets::{use_budgets, BudgetActions, BudgetState, UseBudgetsResult};
pub use use_expenses::{use_expenses, ExpenseActions, ExpenseState, UseExpensesResult};
pub use use_summary::{use_summary, SummaryState, UseSummaryResult};

use shared::TrackerConfig;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::notification::Notice;

/// Set a notice, then clear it after the configured timeout. A notice posted
/// in the meantime wins and keeps its own timer.
pub(crate) fn show_notice(slot: &UseStateHandle<Option<Notice>>, notice: Notice) {
    slot.set(Some(notice.clone()));

    let slot = slot.clone();
    spawn_local(async move {
        gloo::timers::future::TimeoutFuture::new(TrackerConfig::default().notification_duration_ms)
            .await;
        if (*slot).as_ref() == Some(&notice) {
            slot.set(None);
        }
    });
}

/// Native browser confirm dialog; treats a missing window as "no".
pub(crate) fn confirm_dialog(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
