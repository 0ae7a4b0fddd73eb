use super::watchers::TimerSet;
use crate::{
    config::UiConfig,
    contact::{
        resolve_action, send_contact_form, ContactAction, ContactField, ContactForm, FormTransport,
        SubmitError, ACCEPT_JSON, STATUS_TIMER_KEY,
    },
    logging::{log_event, LogLevel},
};
use gloo_net::http::Request;
use serde_json::json;
use std::rc::Rc;
use url::Url;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, FormData, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

struct GlooTransport;

impl FormTransport for GlooTransport {
    async fn post_form(
        &self,
        action: &Url,
        fields: &[(&'static str, String)],
    ) -> Result<u16, SubmitError> {
        let form_data =
            FormData::new().map_err(|_| SubmitError::Network("FormData unavailable".to_string()))?;
        for (name, value) in fields {
            let _ = form_data.append_with_str(name, value);
        }

        let request = Request::post(action.as_str())
            .header("Accept", ACCEPT_JSON)
            .body(form_data)
            .map_err(|err| SubmitError::Network(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| SubmitError::Network(err.to_string()))?;

        Ok(response.status())
    }
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

fn input_value(event: &InputEvent) -> String {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return input.value();
    }

    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub config: UiConfig,
}

#[function_component(ContactFormView)]
pub fn contact_form_view(props: &ContactFormProps) -> Html {
    let form = use_reducer(ContactForm::default);
    let timers = use_mut_ref(TimerSet::default);

    let on_edit = |field: ContactField| {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            dispatcher.dispatch(ContactAction::Edit(field, input_value(&event)));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let config = props.config.clone();
        let timers = timers.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let Some(fields) = form.payload() else {
                return;
            };

            let dispatcher = form.dispatcher();
            dispatcher.dispatch(ContactAction::Began);

            let page_url = window()
                .and_then(|w| w.location().href().ok())
                .unwrap_or_default();
            let config = config.clone();
            let timers = timers.clone();

            spawn_local(async move {
                let result = match resolve_action(&page_url, &config.contact_action) {
                    Ok(action) => send_contact_form(&GlooTransport, &action, &fields).await,
                    Err(err) => Err(err),
                };

                match &result {
                    Ok(()) => log_event(
                        config.log_level,
                        LogLevel::Info,
                        "contact_submit_succeeded",
                        json!({}),
                    ),
                    Err(err) => log_event(
                        config.log_level,
                        LogLevel::Warn,
                        "contact_submit_failed",
                        json!({ "error_class": err.error_class(), "error": err.to_string() }),
                    ),
                }

                dispatcher.dispatch(ContactAction::Finished(result));

                let expire = dispatcher.clone();
                timers
                    .borrow_mut()
                    .schedule(STATUS_TIMER_KEY, config.status_clear_ms, move || {
                        expire.dispatch(ContactAction::StatusExpired)
                    });
            });
        })
    };

    let status = form.status;
    let status_style = status.color().map(|color| format!("color: {color};"));

    html! {
        <form
            id="contactForm"
            class="contact-form"
            action={props.config.contact_action.clone()}
            method="POST"
            {onsubmit}
        >
            <div class="form-group">
                <label for="name">{"Name"}</label>
                <input
                    id="name"
                    name={ContactField::Name.name()}
                    type="text"
                    required=true
                    value={form.draft.name.clone()}
                    oninput={on_edit(ContactField::Name)}
                />
            </div>
            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    name={ContactField::Email.name()}
                    type="email"
                    required=true
                    value={form.draft.email.clone()}
                    oninput={on_edit(ContactField::Email)}
                />
            </div>
            <div class="form-group">
                <label for="message">{"Message"}</label>
                <textarea
                    id="message"
                    name={ContactField::Message.name()}
                    rows="5"
                    required=true
                    value={form.draft.message.clone()}
                    oninput={on_edit(ContactField::Message)}
                />
            </div>
            <button type="submit" class="btn btn-primary" disabled={form.submitting}>
                {form.button_label()}
            </button>
            <p id="formStatus" class="form-status" style={status_style} aria-live="polite">
                {status.message()}
            </p>
        </form>
    }
}
