use shared::{is_form_complete, RequiredField, SimulatorConfig};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_deferred_reveal::{reveal_attributes, use_deferred_reveal};

/// Values of the loan request form, all of them required
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanRequestFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub amount: String,
    pub purpose: String,
    pub consent: bool,
}

impl LoanRequestFields {
    pub fn required_fields(&self) -> Vec<RequiredField> {
        vec![
            RequiredField::text(self.full_name.as_str()),
            RequiredField::text(self.email.as_str()),
            RequiredField::text(self.phone.as_str()),
            RequiredField::text(self.amount.as_str()),
            RequiredField::text(self.purpose.as_str()),
            RequiredField::checkbox(self.consent),
        ]
    }

    pub fn is_complete(&self) -> bool {
        is_form_complete(&self.required_fields())
    }
}

#[function_component(LoanRequestForm)]
pub fn loan_request_form() -> Html {
    let config = use_context::<SimulatorConfig>().unwrap_or_default();
    let fields = use_state(LoanRequestFields::default);
    let submitted = use_state(|| false);
    let success = use_deferred_reveal(config.reveal_delay_ms);

    // Submit button state is derived from scratch on every render
    let complete = fields.is_complete();

    let text_input = |update: fn(&mut LoanRequestFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            update(&mut next, input.value());
            fields.set(next);
        })
    };

    let on_purpose_input = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.purpose = input.value();
            fields.set(next);
        })
    };

    let on_consent_change = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.consent = input.checked();
            fields.set(next);
        })
    };

    let onsubmit = {
        let submitted = submitted.clone();
        let show_success = success.show.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submitted.set(true);
            show_success.emit(());
        })
    };

    let (success_style, success_classes) =
        reveal_attributes("form-message success", success.shown, success.visible);

    html! {
        <section class="loan-request-section">
            <h2>{"Request a loan"}</h2>

            <form
                id="loan-request-form"
                class="loan-request-form"
                style={if *submitted { "display: none;" } else { "display: block;" }}
                {onsubmit}
            >
                <div class="form-group">
                    <label for="full-name">{"Full name"}</label>
                    <input
                        type="text"
                        id="full-name"
                        required={true}
                        value={fields.full_name.clone()}
                        oninput={text_input(|f, v| f.full_name = v)}
                    />
                </div>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        required={true}
                        value={fields.email.clone()}
                        oninput={text_input(|f, v| f.email = v)}
                    />
                </div>
                <div class="form-group">
                    <label for="phone">{"Phone"}</label>
                    <input
                        type="tel"
                        id="phone"
                        required={true}
                        value={fields.phone.clone()}
                        oninput={text_input(|f, v| f.phone = v)}
                    />
                </div>
                <div class="form-group">
                    <label for="request-amount">{"Requested amount (€)"}</label>
                    <input
                        type="number"
                        id="request-amount"
                        min="1"
                        required={true}
                        value={fields.amount.clone()}
                        oninput={text_input(|f, v| f.amount = v)}
                    />
                </div>
                <div class="form-group">
                    <label for="purpose">{"Purpose of the loan"}</label>
                    <textarea
                        id="purpose"
                        required={true}
                        value={fields.purpose.clone()}
                        oninput={on_purpose_input}
                    />
                </div>
                <div class="form-group checkbox-group">
                    <input
                        type="checkbox"
                        id="consent"
                        required={true}
                        checked={fields.consent}
                        onchange={on_consent_change}
                    />
                    <label for="consent">{"I agree to the processing of my personal data"}</label>
                </div>

                <div class="button-wrapper">
                    <button type="submit" class="btn btn-primary submit-button" disabled={!complete}>
                        {"Send request"}
                    </button>
                </div>
            </form>

            <div id="form-success-message" class={success_classes} style={success_style}>
                {"Thank you! Your request has been sent, we will get back to you shortly."}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LoanRequestFields {
        LoanRequestFields {
            full_name: "Giulia Bianchi".to_string(),
            email: "giulia@example.com".to_string(),
            phone: "+39 333 1234567".to_string(),
            amount: "15000".to_string(),
            purpose: "Car purchase".to_string(),
            consent: true,
        }
    }

    #[test]
    fn test_empty_form_is_incomplete() {
        assert!(!LoanRequestFields::default().is_complete());
    }

    #[test]
    fn test_filled_form_is_complete() {
        assert!(filled().is_complete());
    }

    #[test]
    fn test_missing_consent_blocks_submit() {
        let fields = LoanRequestFields {
            consent: false,
            ..filled()
        };
        assert!(!fields.is_complete());
    }

    #[test]
    fn test_whitespace_only_field_blocks_submit() {
        let fields = LoanRequestFields {
            phone: "   ".to_string(),
            ..filled()
        };
        assert!(!fields.is_complete());
    }

    #[test]
    fn test_every_field_is_required() {
        assert_eq!(filled().required_fields().len(), 6);
    }
}
