use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::utils::submission::{mask_email, validate_email, SubmissionError, Submitter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Sent,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailFormState {
    pub value: String,
    pub status: FormStatus,
}

impl Default for EmailFormState {
    fn default() -> Self {
        Self {
            value: String::new(),
            status: FormStatus::Idle,
        }
    }
}

pub enum FormAction {
    Input(String),
    /// Value accepted and handed to the submitter; the field clears.
    Submit,
    Succeeded,
    Failed(SubmissionError),
}

impl Reducible for EmailFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            FormAction::Input(value) => EmailFormState {
                value,
                // typing again dismisses the last result
                status: match self.status {
                    FormStatus::Submitting => FormStatus::Submitting,
                    _ => FormStatus::Idle,
                },
            },
            FormAction::Submit => EmailFormState {
                value: String::new(),
                status: FormStatus::Submitting,
            },
            FormAction::Succeeded => EmailFormState {
                value: self.value.clone(),
                status: FormStatus::Sent,
            },
            FormAction::Failed(err) => EmailFormState {
                value: self.value.clone(),
                status: FormStatus::Failed(err.to_string()),
            },
        };
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct EmailFormProps {
    pub submitter: Submitter,
}

#[function_component(EmailForm)]
pub fn email_form(props: &EmailFormProps) -> Html {
    let state = use_reducer_eq(EmailFormState::default);

    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(FormAction::Input(input.value()));
        })
    };

    let onsubmit = {
        let state = state.clone();
        let submitter = props.submitter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.status == FormStatus::Submitting {
                return;
            }
            let email = match validate_email(&state.value) {
                Ok(email) => email,
                Err(err) => {
                    state.dispatch(FormAction::Failed(err));
                    return;
                }
            };
            state.dispatch(FormAction::Submit);
            let state = state.clone();
            let submitter = submitter.clone();
            spawn_local(async move {
                let masked = mask_email(&email);
                match submitter.submit(email).await {
                    Ok(()) => {
                        log::info!("Signup accepted for {}", masked);
                        state.dispatch(FormAction::Succeeded);
                    }
                    Err(err) => {
                        log::error!("Signup failed for {}: {:?}", masked, err);
                        state.dispatch(FormAction::Failed(err));
                    }
                }
            });
        })
    };

    let form_css = r#"
        .email-form {
            display: flex;
            gap: 0.5rem;
            max-width: 28rem;
            margin: 0 auto;
        }
        .email-form input {
            flex: 1;
            padding: 0.75rem 1rem;
            background: rgba(31, 41, 55, 0.85);
            color: white;
            border: 1px solid #4b5563;
            border-radius: 0.5rem;
            font-size: 1rem;
        }
        .email-form input:focus { outline: 2px solid #fef9c3; }
        .email-form button {
            padding: 0.75rem 1.25rem;
            background: #fef9c3;
            color: #1f2937;
            border: none;
            border-radius: 0.5rem;
            font-weight: 600;
            cursor: pointer;
        }
        .email-form button:disabled { opacity: 0.6; cursor: wait; }
        .form-message {
            margin-top: 0.75rem;
            font-size: 0.875rem;
            text-align: center;
        }
        .form-message.error { color: #fca5a5; }
        .form-message.success { color: #bbf7d0; }
        @media (max-width: 767px) {
            .email-form { flex-direction: column; }
        }
    "#;

    let submitting = state.status == FormStatus::Submitting;

    html! {
        <div class="email-capture">
            <style>{form_css}</style>
            <form class="email-form" {onsubmit}>
                <input
                    type="email"
                    required=true
                    placeholder="Enter your email"
                    aria-label="Email address"
                    value={state.value.clone()}
                    {oninput}
                />
                <button type="submit" disabled={submitting}>
                    { if submitting { "Sending..." } else { "Notify Me" } }
                </button>
            </form>
            {
                match &state.status {
                    FormStatus::Sent => html! {
                        <p class="form-message success">{"Thanks! We'll let you know when we launch."}</p>
                    },
                    FormStatus::Failed(message) => html! {
                        <p class="form-message error" role="alert">{message.clone()}</p>
                    },
                    _ => html! {},
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(state: EmailFormState, action: FormAction) -> EmailFormState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn submit_clears_the_field() {
        let state = step(EmailFormState::default(), FormAction::Input("ana@cafcohome.com".into()));
        assert_eq!(state.value, "ana@cafcohome.com");
        let state = step(state, FormAction::Submit);
        assert_eq!(state.value, "");
        assert_eq!(state.status, FormStatus::Submitting);
        assert_eq!(step(state, FormAction::Succeeded).status, FormStatus::Sent);
    }

    #[test]
    fn failure_is_shown_as_message() {
        let state = step(EmailFormState::default(), FormAction::Submit);
        let state = step(state, FormAction::Failed(SubmissionError::Rejected { status: 500 }));
        assert_eq!(
            state.status,
            FormStatus::Failed("Signup failed (status 500). Please try again later.".into())
        );
    }

    #[test]
    fn invalid_email_keeps_what_was_typed() {
        let state = step(EmailFormState::default(), FormAction::Input("nope".into()));
        let state = step(state, FormAction::Failed(SubmissionError::InvalidEmail));
        assert_eq!(state.value, "nope");
        assert!(matches!(state.status, FormStatus::Failed(_)));
    }

    #[test]
    fn typing_dismisses_previous_result_but_not_pending_submit() {
        let sent = EmailFormState {
            value: String::new(),
            status: FormStatus::Sent,
        };
        assert_eq!(step(sent, FormAction::Input("a".into())).status, FormStatus::Idle);

        let pending = EmailFormState {
            value: String::new(),
            status: FormStatus::Submitting,
        };
        assert_eq!(step(pending, FormAction::Input("a".into())).status, FormStatus::Submitting);
    }
}
