use std::rc::Rc;

use chrono::{Local, NaiveDate};
use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::Icon;
use crate::content::CONTACT_CHANNELS;
use crate::inquiry::{self, EventType, Inquiry, InquiryDraft};
use crate::reveal::Reveal;

const CONFIRMATION_MS: u32 = 5_000;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    EventType,
    EventDate,
    Message,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    Set(Field, String),
    /// Submit pressed; carries the visitor's local date.
    Submit(NaiveDate),
    Delivered(u32),
    Failed(u32, String),
    /// The confirmation of the given attempt has been shown long enough.
    ConfirmationExpired(u32),
}

/// Contact form contents plus submission progress. `attempt` numbers each
/// accepted submit so late results from an older attempt are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub draft: InquiryDraft,
    pub status: SubmitStatus,
    pub attempt: u32,
    pub outgoing: Option<Inquiry>,
}

impl ContactForm {
    pub fn apply(mut self, action: FormAction) -> Self {
        match action {
            FormAction::Set(field, value) => {
                let slot = match field {
                    Field::Name => &mut self.draft.name,
                    Field::Email => &mut self.draft.email,
                    Field::Phone => &mut self.draft.phone,
                    Field::EventType => &mut self.draft.event_type,
                    Field::EventDate => &mut self.draft.event_date,
                    Field::Message => &mut self.draft.message,
                };
                *slot = value;
            }
            FormAction::Submit(today) => {
                if self.status == SubmitStatus::Sending {
                    return self;
                }
                match self.draft.validate(today) {
                    Ok(inquiry) => {
                        self.attempt += 1;
                        self.outgoing = Some(inquiry);
                        self.status = SubmitStatus::Sending;
                    }
                    Err(err) => self.status = SubmitStatus::Failed(err.to_string()),
                }
            }
            FormAction::Delivered(attempt) => {
                if self.is_sending(attempt) {
                    self.draft = InquiryDraft::default();
                    self.outgoing = None;
                    self.status = SubmitStatus::Sent;
                }
            }
            FormAction::Failed(attempt, message) => {
                if self.is_sending(attempt) {
                    self.outgoing = None;
                    self.status = SubmitStatus::Failed(message);
                }
            }
            FormAction::ConfirmationExpired(attempt) => {
                if attempt == self.attempt && self.status == SubmitStatus::Sent {
                    self.status = SubmitStatus::Idle;
                }
            }
        }
        self
    }

    fn is_sending(&self, attempt: u32) -> bool {
        attempt == self.attempt && self.status == SubmitStatus::Sending
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).clone().apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Value for the date input's `min`, so the picker starts at today.
pub fn date_input_min(today: NaiveDate) -> String {
    today.format("%Y-%m-%d").to_string()
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(ContactForm::default);
    let today = Local::now().date_naive();

    // Send whatever the reducer accepted for the current attempt.
    {
        let dispatcher = form.dispatcher();
        let outgoing = form.outgoing.clone();
        use_effect_with_deps(
            move |attempt: &u32| {
                let attempt = *attempt;
                if let Some(inquiry) = outgoing {
                    spawn_local(async move {
                        match inquiry::submit(&inquiry).await {
                            Ok(()) => {
                                info!("Inquiry sent for a {} event", inquiry.event_type.value());
                                dispatcher.dispatch(FormAction::Delivered(attempt));
                                Timeout::new(CONFIRMATION_MS, move || {
                                    dispatcher.dispatch(FormAction::ConfirmationExpired(attempt));
                                })
                                .forget();
                            }
                            Err(err) => {
                                gloo_console::error!(format!("Inquiry submission failed: {}", err));
                                dispatcher.dispatch(FormAction::Failed(attempt, err.to_string()));
                            }
                        }
                    });
                }
                || ()
            },
            form.attempt,
        );
    }

    let on_field = |field: Field| {
        let dispatcher = form.dispatcher();
        move |value: String| dispatcher.dispatch(FormAction::Set(field, value))
    };

    let on_name = {
        let set = on_field(Field::Name);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let set = on_field(Field::Email);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_phone = {
        let set = on_field(Field::Phone);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_event_type = {
        let set = on_field(Field::EventType);
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_event_date = {
        let set = on_field(Field::EventDate);
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_message = {
        let set = on_field(Field::Message);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let onsubmit = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(FormAction::Submit(Local::now().date_naive()));
        })
    };

    let draft = &form.draft;
    let sending = form.status == SubmitStatus::Sending;

    html! {
        <section id="contact" class="contact-section">
            <div class="section-container">
                <Reveal class="contact-content">
                    <h2 class="section-title">{"Let's Start Planning!"}</h2>

                    <div class="contact-card">
                        <form class="contact-form" {onsubmit}>
                            <div>
                                <label for="name">{"Name"}</label>
                                <input type="text" id="name" value={draft.name.clone()} oninput={on_name} required=true />
                            </div>

                            <div>
                                <label for="email">{"Email"}</label>
                                <input type="email" id="email" value={draft.email.clone()} oninput={on_email} required=true />
                            </div>

                            <div>
                                <label for="phone">{"Phone (Optional)"}</label>
                                <input type="tel" id="phone" value={draft.phone.clone()} oninput={on_phone} />
                            </div>

                            <div>
                                <label for="event-type">{"Event Type"}</label>
                                <select id="event-type" onchange={on_event_type} required=true>
                                    <option value="" selected={draft.event_type.is_empty()}>{"Select an event type"}</option>
                                    { for EventType::ALL.iter().map(|t| html! {
                                        <option
                                            key={t.value()}
                                            value={t.value()}
                                            selected={draft.event_type == t.value()}
                                        >
                                            {t.label()}
                                        </option>
                                    }) }
                                </select>
                            </div>

                            <div>
                                <label for="event-date">{"Event Date"}</label>
                                <input type="date" id="event-date" value={draft.event_date.clone()} min={date_input_min(today)} onchange={on_event_date} required=true />
                            </div>

                            <div class="full-width">
                                <label for="message">{"Message"}</label>
                                <textarea id="message" rows="4" value={draft.message.clone()} oninput={on_message} required=true />
                            </div>

                            <div class="full-width">
                                <button type="submit" class="submit-button" disabled={sending}>
                                    { if sending { "Sending..." } else { "Submit Inquiry" } }
                                </button>
                                {
                                    match &form.status {
                                        SubmitStatus::Sent => html! {
                                            <p class="form-message success">{"Thank you! We'll be in touch shortly."}</p>
                                        },
                                        SubmitStatus::Failed(err) => html! {
                                            <p class="form-message error">{err}</p>
                                        },
                                        _ => html! {},
                                    }
                                }
                            </div>
                        </form>
                    </div>

                    <div class="contact-channels">
                        { for CONTACT_CHANNELS.iter().map(|channel| html! {
                            <div key={channel.text} class="contact-channel">
                                <Icon kind={channel.icon} size={32} class="contact-icon" />
                                <p>{channel.text}</p>
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .contact-section {
                    padding: 5rem 0;
                    background: #F8F4F0;
                }
                .contact-content {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .contact-card {
                    background: #fff;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    padding: 2rem;
                }
                .contact-form {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                }
                .contact-form .full-width {
                    grid-column: span 2;
                }
                .contact-form label {
                    display: block;
                    color: #374151;
                    margin-bottom: 0.5rem;
                }
                .contact-form input,
                .contact-form select,
                .contact-form textarea {
                    width: 100%;
                    padding: 0.5rem 1rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    box-sizing: border-box;
                }
                .contact-form input:focus,
                .contact-form select:focus,
                .contact-form textarea:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px #A3BFD9;
                }
                .submit-button {
                    width: 100%;
                    background: #FFD7B5;
                    color: #1f2937;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .submit-button:hover {
                    background: #FFE7D5;
                }
                .submit-button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .form-message {
                    margin-top: 1rem;
                    text-align: center;
                }
                .form-message.success {
                    color: #2f855a;
                }
                .form-message.error {
                    color: #c53030;
                }
                .contact-channels {
                    margin-top: 3rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    text-align: center;
                }
                .contact-channel {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    color: #1f2937;
                }
                .contact-icon {
                    color: #A3BFD9;
                    margin-bottom: 1rem;
                }
                @media (max-width: 768px) {
                    .contact-form,
                    .contact-channels {
                        grid-template-columns: 1fr;
                    }
                    .contact-form .full-width {
                        grid-column: auto;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn filled() -> ContactForm {
        [
            (Field::Name, "Ada Lovelace"),
            (Field::Email, "ada@example.com"),
            (Field::EventType, "corporate"),
            (Field::EventDate, "2026-04-10"),
            (Field::Message, "Offsite for 40 people."),
        ]
        .into_iter()
        .fold(ContactForm::default(), |form, (field, value)| {
            form.apply(FormAction::Set(field, value.to_string()))
        })
    }

    #[test]
    fn test_field_updates_accumulate() {
        let form = filled().apply(FormAction::Set(Field::Phone, "555 0100".to_string()));
        assert_eq!(form.draft.name, "Ada Lovelace");
        assert_eq!(form.draft.phone, "555 0100");
        assert_eq!(form.draft.message, "Offsite for 40 people.");
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_invalid_submit_reports_error_without_sending() {
        let form = ContactForm::default().apply(FormAction::Submit(today()));
        assert_eq!(form.status, SubmitStatus::Failed("Please fill in your name.".to_string()));
        assert_eq!(form.attempt, 0);
        assert!(form.outgoing.is_none());
    }

    #[test]
    fn test_valid_submit_queues_inquiry() {
        let form = filled().apply(FormAction::Submit(today()));
        assert_eq!(form.status, SubmitStatus::Sending);
        assert_eq!(form.attempt, 1);
        assert_eq!(form.outgoing.as_ref().map(|i| i.event_type), Some(EventType::Corporate));
    }

    #[test]
    fn test_second_submit_ignored_while_sending() {
        let sending = filled().apply(FormAction::Submit(today()));
        let again = sending.clone().apply(FormAction::Submit(today()));
        assert_eq!(again, sending);
    }

    #[test]
    fn test_delivery_clears_draft() {
        let form = filled()
            .apply(FormAction::Submit(today()))
            .apply(FormAction::Delivered(1));
        assert_eq!(form.status, SubmitStatus::Sent);
        assert_eq!(form.draft, InquiryDraft::default());
        assert!(form.outgoing.is_none());
    }

    #[test]
    fn test_failure_keeps_draft() {
        let form = filled()
            .apply(FormAction::Submit(today()))
            .apply(FormAction::Failed(1, "Request failed: offline".to_string()));
        assert_eq!(form.status, SubmitStatus::Failed("Request failed: offline".to_string()));
        assert_eq!(form.draft.name, "Ada Lovelace");
    }

    #[test]
    fn test_confirmation_expires_back_to_idle() {
        let form = filled()
            .apply(FormAction::Submit(today()))
            .apply(FormAction::Delivered(1))
            .apply(FormAction::ConfirmationExpired(1));
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_old_confirmation_timer_leaves_new_attempt_alone() {
        // first inquiry delivered, second one submitted before its confirmation hides
        let sent = filled()
            .apply(FormAction::Submit(today()))
            .apply(FormAction::Delivered(1));
        let resending = [
            (Field::Name, "Ada Lovelace"),
            (Field::Email, "ada@example.com"),
            (Field::EventType, "social"),
            (Field::EventDate, "2026-05-02"),
            (Field::Message, "Birthday dinner."),
        ]
        .into_iter()
        .fold(sent, |form, (field, value)| form.apply(FormAction::Set(field, value.to_string())))
        .apply(FormAction::Submit(today()));
        assert_eq!(resending.attempt, 2);

        let form = resending.apply(FormAction::ConfirmationExpired(1));
        assert_eq!(form.status, SubmitStatus::Sending);

        let failed = form
            .apply(FormAction::Failed(2, "Inquiry was not accepted (status 503)".to_string()))
            .apply(FormAction::ConfirmationExpired(1));
        assert_eq!(
            failed.status,
            SubmitStatus::Failed("Inquiry was not accepted (status 503)".to_string())
        );
    }

    #[test]
    fn test_stale_results_are_ignored() {
        let form = filled().apply(FormAction::Submit(today()));
        assert_eq!(form.clone().apply(FormAction::Delivered(7)), form);
        assert_eq!(form.clone().apply(FormAction::Failed(0, "late".to_string())), form);
    }

    #[test]
    fn test_reduce_keeps_same_rc_when_unchanged() {
        let form = Rc::new(ContactForm::default());
        let next = form.clone().reduce(FormAction::ConfirmationExpired(0));
        assert!(Rc::ptr_eq(&form, &next));
    }

    #[test]
    fn test_date_input_min_is_iso_date() {
        assert_eq!(date_input_min(today()), "2026-03-01");
    }
}
