use shared::SimulatorConfig;
use yew::prelude::*;

use crate::hooks::use_deferred_reveal::{reveal_attributes, use_deferred_reveal};

/// Contact form: submitting swaps the form for a confirmation message
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let config = use_context::<SimulatorConfig>().unwrap_or_default();
    let submitted = use_state(|| false);
    let success = use_deferred_reveal(config.reveal_delay_ms);

    let onsubmit = {
        let submitted = submitted.clone();
        let show_success = success.show.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submitted.set(true);
            show_success.emit(());
        })
    };

    let on_new_message = {
        let submitted = submitted.clone();
        let hide_success = success.hide.clone();
        Callback::from(move |_: MouseEvent| {
            submitted.set(false);
            hide_success.emit(());
        })
    };

    let (success_style, success_classes) =
        reveal_attributes("form-message success", success.shown, success.visible);

    html! {
        <section class="contact-section">
            <h2>{"Contact us"}</h2>

            <form
                id="contact-page-form"
                class="contact-form"
                style={if *submitted { "display: none;" } else { "display: block;" }}
                {onsubmit}
            >
                <div class="form-group">
                    <label for="contact-name">{"Name"}</label>
                    <input type="text" id="contact-name" required={true} />
                </div>
                <div class="form-group">
                    <label for="contact-email">{"Email"}</label>
                    <input type="email" id="contact-email" required={true} />
                </div>
                <div class="form-group">
                    <label for="contact-message">{"Message"}</label>
                    <textarea id="contact-message" rows="5" required={true} />
                </div>
                <div class="button-wrapper">
                    <button type="submit" class="btn btn-primary">{"Send"}</button>
                </div>
            </form>

            <div id="form-success-message" class={success_classes} style={success_style}>
                <p>{"Thanks for your message! We will answer as soon as possible."}</p>
                <button type="button" class="btn btn-secondary" onclick={on_new_message}>
                    {"Send another message"}
                </button>
            </div>
        </section>
    }
}
