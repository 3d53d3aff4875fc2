use yew::prelude::*;

use crate::pages::Page;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current_page: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"💸 Expense Tracker"}</h1>
                <nav class="header-nav">
                    {for Page::ALL.iter().map(|page| {
                        let page = *page;
                        let is_active = page == props.current_page;
                        let onclick = {
                            let on_navigate = props.on_navigate.clone();
                            Callback::from(move |_| on_navigate.emit(page))
                        };

                        html! {
                            <button
                                class={if is_active { "nav-link active" } else { "nav-link" }}
                                onclick={onclick}
                            >
                                {page.label()}
                            </button>
                        }
                    })}
                </nav>
            </div>
        </header>
    }
}
