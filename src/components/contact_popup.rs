use std::rc::Rc;

use yew::prelude::*;

use crate::config::{BRAND_NAME, CONTACT_EMAIL, CONTACT_PHONE, CONTACT_PHONE_DISPLAY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayAction {
    Open,
    BackdropClick,
    CloseButton,
    /// Clicks inside the dialog never close it.
    ContentClick,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayState {
    pub visible: bool,
}

impl OverlayState {
    pub fn apply(self, action: OverlayAction) -> Self {
        match action {
            OverlayAction::Open => Self { visible: true },
            OverlayAction::BackdropClick | OverlayAction::CloseButton => Self { visible: false },
            OverlayAction::ContentClick => self,
        }
    }
}

impl Reducible for OverlayState {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ContactPopupProps {
    pub visible: bool,
    pub is_mobile: bool,
    pub on_action: Callback<OverlayAction>,
}

#[function_component(ContactPopup)]
pub fn contact_popup(props: &ContactPopupProps) -> Html {
    if !props.visible {
        return html! {};
    }
    let is_mobile = props.is_mobile;

    let on_backdrop = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(OverlayAction::BackdropClick))
    };
    let on_content = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_action.emit(OverlayAction::ContentClick);
        })
    };
    let on_close = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_action.emit(OverlayAction::CloseButton);
        })
    };

    let popup_css = r#"
        .contact-backdrop {
            position: fixed;
            inset: 0;
            z-index: 10000;
            display: flex;
            align-items: center;
            justify-content: center;
            background: rgba(0, 0, 0, 0.6);
            animation: fade-in 0.3s ease-out;
        }
        @keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
        @keyframes pop-in {
            from { transform: scale(0.8) translateY(50px); opacity: 0; }
            to   { transform: scale(1) translateY(0);      opacity: 1; }
        }
        .contact-dialog {
            width: 100%;
            max-width: 28rem;
            margin: 0 1rem;
            padding: 2rem;
            background: #1f2937;
            border: 1px solid #4b5563;
            border-radius: 1rem;
            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
            animation: pop-in 0.3s ease-out;
        }
        .contact-dialog.mobile { max-width: 24rem; padding: 1.5rem; }
        .contact-dialog h2 {
            margin: 0 0 0.5rem;
            font-size: 1.5rem;
            color: #fef9c3;
            text-align: center;
        }
        .contact-dialog.mobile h2 { font-size: 1.25rem; }
        .contact-method {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            padding: 1rem;
            margin-top: 1rem;
            background: #374151;
            border: 1px solid #4b5563;
            border-radius: 0.5rem;
            color: white;
            text-decoration: none;
            transition: transform 0.3s, background 0.3s;
        }
        .contact-method:hover { background: #4b5563; transform: scale(1.02); }
        .contact-method i { color: #fef9c3; }
        .contact-close {
            width: 100%;
            margin-top: 1.5rem;
            padding: 0.75rem;
            background: #374151;
            color: white;
            border: 1px solid #4b5563;
            border-radius: 0.5rem;
            font-weight: 500;
            cursor: pointer;
        }
        .contact-close:hover { background: #4b5563; }
    "#;

    let detail_size = if is_mobile { "0.75rem" } else { "0.875rem" };

    html! {
        <div class="contact-backdrop" onclick={on_backdrop}>
            <style>{popup_css}</style>
            <div
                class={classes!("contact-dialog", is_mobile.then_some("mobile"))}
                role="dialog"
                aria-modal="true"
                onclick={on_content}
            >
                <h2><i class="fas fa-home"></i>{" "}{BRAND_NAME}</h2>
                <p style="text-align: center; color: #d1d5db; margin: 0 0 1.5rem;">{"Get in touch with us"}</p>

                <a class="contact-method" href={format!("mailto:{}", CONTACT_EMAIL)}>
                    <i class="fas fa-envelope"></i>
                    <div>
                        <div style="font-weight: 500;">{"Email"}</div>
                        <div style={format!("font-size: {}; color: #d1d5db;", detail_size)}>{CONTACT_EMAIL}</div>
                    </div>
                </a>
                <a class="contact-method" href={format!("tel:{}", CONTACT_PHONE)}>
                    <i class="fas fa-phone"></i>
                    <div>
                        <div style="font-weight: 500;">{"Phone"}</div>
                        <div style={format!("font-size: {}; color: #d1d5db;", detail_size)}>{CONTACT_PHONE_DISPLAY}</div>
                    </div>
                </a>

                <button class="contact-close" onclick={on_close}>{"Close"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_backdrop_closes() {
        let state = OverlayState::default().apply(OverlayAction::Open);
        assert!(state.visible);
        assert!(!state.apply(OverlayAction::BackdropClick).visible);
    }

    #[test]
    fn close_button_closes() {
        let state = OverlayState::default().apply(OverlayAction::Open);
        assert!(!state.apply(OverlayAction::CloseButton).visible);
    }

    #[test]
    fn content_click_keeps_it_open() {
        let state = OverlayState::default()
            .apply(OverlayAction::Open)
            .apply(OverlayAction::ContentClick);
        assert!(state.visible);
    }

    #[test]
    fn reducer_skips_no_op_updates() {
        let closed = Rc::new(OverlayState::default());
        let next = closed.clone().reduce(OverlayAction::CloseButton);
        assert!(Rc::ptr_eq(&closed, &next));
        assert!(next.reduce(OverlayAction::Open).visible);
    }
}
