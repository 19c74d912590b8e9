use shared::SimulatorConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{ContactForm, Header, LoanRequestForm, Page, SimulatorPage};
use services::Logger;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| SimulatorConfig::default());
    let current_page = use_state(|| Page::Simulator);

    let on_navigate = {
        let current_page = current_page.clone();
        Callback::from(move |page: Page| current_page.set(page))
    };

    let content = match *current_page {
        Page::Simulator => html! { <SimulatorPage /> },
        Page::LoanRequest => html! { <LoanRequestForm /> },
        Page::Contact => html! { <ContactForm /> },
    };

    html! {
        <ContextProvider<SimulatorConfig> context={(*config).clone()}>
            <Header current={*current_page} {on_navigate} />
            <main class="main">
                <div class="container">
                    {content}
                </div>
            </main>
        </ContextProvider<SimulatorConfig>>
    }
}

fn main() {
    Logger::info_with_component("app", "Starting loan simulator");
    yew::Renderer::<App>::new().render();
}
