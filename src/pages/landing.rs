use yew::prelude::*;

use crate::components::contact_popup::{ContactPopup, OverlayAction, OverlayState};
use crate::components::countdown::CountdownTimer;
use crate::components::email_form::EmailForm;
use crate::components::particles::ParticleField;
use crate::components::spline_hero::SplineHero;
use crate::components::status_bar::StatusBar;
use crate::config;
use crate::utils::submission::Submitter;
use crate::utils::viewport::use_layout;

#[derive(Properties, PartialEq, Clone)]
pub struct LandingProps {
    pub submitter: Submitter,
    #[prop_or_else(config::get_progress_percent)]
    pub progress: u8,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let layout = use_layout(false);
    let overlay = use_reducer_eq(OverlayState::default);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            log::info!("Landing page mounted");
            || ()
        },
        (),
    );

    let on_contact = {
        let overlay = overlay.clone();
        Callback::from(move |_: ()| overlay.dispatch(OverlayAction::Open))
    };
    let on_overlay_action = {
        let overlay = overlay.clone();
        Callback::from(move |action: OverlayAction| overlay.dispatch(action))
    };

    let landing_css = r#"
        .landing {
            position: relative;
            height: 100vh;
            overflow: hidden;
            color: #1e293b;
            background: linear-gradient(to bottom right, #eff6ff, #dbeafe);
        }
        .launch-panel {
            position: absolute;
            left: 50%;
            top: 12%;
            transform: translateX(-50%);
            width: min(90%, 40rem);
            z-index: 2;
            text-align: center;
            pointer-events: none;
        }
        .launch-panel > * { pointer-events: auto; }
        .launch-panel h1 {
            margin: 0;
            font-size: 3rem;
            color: #1f2937;
            letter-spacing: 0.02em;
        }
        .launch-panel p {
            margin: 0.5rem 0 0;
            color: #374151;
        }
        @media (max-width: 767px) {
            .launch-panel { top: 6%; }
            .launch-panel h1 { font-size: 2rem; }
        }
    "#;

    let is_mobile = layout.is_mobile();

    html! {
        <div class="landing">
            <style>{landing_css}</style>
            <ParticleField />
            <SplineHero />

            <div class="launch-panel">
                <h1>{"Coming Soon"}</h1>
                <p>{"Our new collection is almost here. Be the first to know."}</p>
                <CountdownTimer />
                <EmailForm submitter={props.submitter.clone()} />
            </div>

            <StatusBar {is_mobile} progress={props.progress} {on_contact} />
            <ContactPopup visible={overlay.visible} {is_mobile} on_action={on_overlay_action} />
        </div>
    }
}
