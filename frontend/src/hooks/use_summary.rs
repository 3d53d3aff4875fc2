use shared::Summary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct SummaryState {
    pub summary: Option<Summary>,
    pub loading: bool,
}

pub struct UseSummaryResult {
    pub state: SummaryState,
    pub refresh: Callback<()>,
}

/// Fetches the server-computed spending summary. Read-only, so there are no
/// mutation actions here; pages re-emit `refresh` after their own mutations.
#[hook]
pub fn use_summary(api_client: &ApiClient) -> UseSummaryResult {
    let summary = use_state(|| None::<Summary>);
    let loading = use_state(|| true);

    let refresh = {
        let api_client = api_client.clone();
        let summary = summary.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let summary = summary.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_summary().await {
                    Ok(data) => summary.set(Some(data)),
                    Err(e) => {
                        gloo::console::error!("Failed to load summary:", e);
                    }
                }

                loading.set(false);
            });
        })
    };

    UseSummaryResult {
        state: SummaryState {
            summary: (*summary).clone(),
            loading: *loading,
        },
        refresh,
    }
}
