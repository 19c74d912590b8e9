use shared::{doughnut_config, CurrencyFormatter};
use yew::prelude::*;

use super::amortization_table::AmortizationTable;
use super::loan_chart::LoanChart;
use crate::hooks::use_deferred_reveal::reveal_attributes;
use crate::hooks::use_loan_simulator::SimulationOutcome;

#[derive(Properties, PartialEq)]
pub struct ResultsPanelProps {
    pub outcome: Option<SimulationOutcome>,
    pub revealed: bool,
    pub formatter: CurrencyFormatter,
}

/// Summary figures, capital/interest chart and the month by month schedule
#[function_component(ResultsPanel)]
pub fn results_panel(props: &ResultsPanelProps) -> Html {
    let (style, classes) = reveal_attributes("results", props.outcome.is_some(), props.revealed);

    let Some(outcome) = props.outcome.as_ref() else {
        return html! { <section id="results" class={classes} {style}></section> };
    };

    let summary = outcome.result.summary(&props.formatter);
    let rows = outcome.result.formatted_schedule(&props.formatter);
    let chart = doughnut_config(outcome.input.principal, outcome.result.total_interest);

    html! {
        <section id="results" class={classes} {style}>
            <div class="summary">
                <div class="summary-item">
                    <span class="summary-label">{"Monthly payment"}</span>
                    <span id="monthly-payment" class="summary-value">{summary.monthly_payment}</span>
                </div>
                <div class="summary-item">
                    <span class="summary-label">{"Total interest"}</span>
                    <span id="total-interest" class="summary-value">{summary.total_interest}</span>
                </div>
                <div class="summary-item">
                    <span class="summary-label">{"Total repayment"}</span>
                    <span id="total-repayment" class="summary-value">{summary.total_repayment}</span>
                </div>
            </div>

            <LoanChart config={chart} formatter={props.formatter.clone()} />

            <h3>{"Amortization schedule"}</h3>
            <AmortizationTable {rows} />
        </section>
    }
}
