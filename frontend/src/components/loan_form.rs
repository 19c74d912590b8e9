use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoanFormProps {
    pub amount: String,
    pub rate: String,
    pub duration: String,

    pub on_amount_input: Callback<InputEvent>,
    pub on_rate_input: Callback<InputEvent>,
    pub on_duration_input: Callback<InputEvent>,
    pub on_submit: Callback<()>,
    pub on_clear: Callback<()>,
}

#[function_component(LoanForm)]
pub fn loan_form(props: &LoanFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let onclear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    html! {
        <form id="loan-form" class="loan-form" {onsubmit}>
            <div class="form-group">
                <label for="amount">{"Loan amount (€)"}</label>
                <input
                    type="number"
                    id="amount"
                    placeholder="10000"
                    min="1"
                    step="any"
                    required={true}
                    value={props.amount.clone()}
                    oninput={props.on_amount_input.clone()}
                />
            </div>

            <div class="form-group">
                <label for="rate">{"Annual interest rate (%)"}</label>
                <input
                    type="number"
                    id="rate"
                    placeholder="5"
                    min="0"
                    step="any"
                    required={true}
                    value={props.rate.clone()}
                    oninput={props.on_rate_input.clone()}
                />
            </div>

            <div class="form-group">
                <label for="duration">{"Duration (years)"}</label>
                <input
                    type="number"
                    id="duration"
                    placeholder="20"
                    min="0"
                    step="any"
                    required={true}
                    value={props.duration.clone()}
                    oninput={props.on_duration_input.clone()}
                />
            </div>

            <div class="form-actions">
                <div class="button-wrapper">
                    <button type="submit" id="calculate-btn" class="btn btn-primary">{"Calculate"}</button>
                </div>
                <div class="button-wrapper">
                    <button type="button" id="clear-btn" class="btn btn-secondary" onclick={onclear}>{"Clear"}</button>
                </div>
            </div>
        </form>
    }
}
