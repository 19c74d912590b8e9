use yew::prelude::*;

/// Pages reachable from the header navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Simulator,
    LoanRequest,
    Contact,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Simulator, Page::LoanRequest, Page::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Simulator => "Simulator",
            Page::LoanRequest => "Request a loan",
            Page::Contact => "Contact",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"Loan Simulator"}</h1>
                <nav class="nav">
                    {for Page::ALL.iter().map(|page| {
                        let page = *page;
                        let onclick = props.on_navigate.reform(move |_: MouseEvent| page);
                        let class = if page == props.current { "nav-link active" } else { "nav-link" };
                        html! {
                            <button type="button" {class} {onclick}>{page.label()}</button>
                        }
                    })}
                </nav>
            </div>
        </header>
    }
}
