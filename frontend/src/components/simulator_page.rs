use shared::SimulatorConfig;
use yew::prelude::*;

use super::loan_form::LoanForm;
use super::results_panel::ResultsPanel;
use crate::hooks::use_loan_simulator;

#[function_component(SimulatorPage)]
pub fn simulator_page() -> Html {
    let config = use_context::<SimulatorConfig>().unwrap_or_default();
    let formatter = config.formatter();
    let simulator = use_loan_simulator(&config);
    let state = &simulator.state;
    let actions = simulator.actions.clone();

    html! {
        <section class="simulator-section">
            <h2>{"Loan simulator"}</h2>

            <LoanForm
                amount={state.fields.amount.clone()}
                rate={state.fields.rate.clone()}
                duration={state.fields.duration.clone()}
                on_amount_input={actions.on_amount_input}
                on_rate_input={actions.on_rate_input}
                on_duration_input={actions.on_duration_input}
                on_submit={actions.submit}
                on_clear={actions.clear}
            />

            <div
                id="loader"
                class="loader"
                style={if state.loading { "display: block;" } else { "display: none;" }}
            ></div>

            <ResultsPanel
                outcome={if state.results_visible() { state.outcome.clone() } else { None }}
                revealed={state.revealed}
                {formatter}
            />
        </section>
    }
}
