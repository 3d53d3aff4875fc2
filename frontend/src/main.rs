use yew::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use components::header::Header;
use pages::{BudgetsPage, DashboardPage, ExpensesPage, Page, ReportsPage};
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let current_page = use_state(|| Page::Dashboard);
    let api_client = use_memo((), |_| ApiClient::new());

    let on_navigate = {
        let current_page = current_page.clone();
        Callback::from(move |page: Page| current_page.set(page))
    };

    html! {
        <>
            <Header current_page={*current_page} on_navigate={on_navigate} />

            <main class="main">
                <div class="container">
                    {match *current_page {
                        Page::Dashboard => html! { <DashboardPage api_client={(*api_client).clone()} /> },
                        Page::Expenses => html! { <ExpensesPage api_client={(*api_client).clone()} /> },
                        Page::Budgets => html! { <BudgetsPage api_client={(*api_client).clone()} /> },
                        Page::Reports => html! { <ReportsPage api_client={(*api_client).clone()} /> },
                    }}
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
