use yew::prelude::*;

use crate::config::{BRAND_NAME, BRAND_TAGLINE, PROGRESS_BLOCKS};

/// Filled and empty block counts for a percentage, rounded to the nearest
/// block. Percentages above 100 render as full.
pub fn progress_blocks(percent: u8, total: usize) -> (usize, usize) {
    let percent = percent.min(100) as usize;
    let filled = (percent * total + 50) / 100;
    (filled, total - filled)
}

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBarProps {
    pub is_mobile: bool,
    pub progress: u8,
    pub on_contact: Callback<()>,
}

fn render_blocks(percent: u8, is_mobile: bool) -> Html {
    let (filled, empty) = progress_blocks(percent, PROGRESS_BLOCKS);
    let compact = is_mobile.then_some("compact");
    html! {
        <div class="progress-track">
            { for (0..filled).map(|_| html! { <div class={classes!("progress-block", compact, "filled")} /> }) }
            { for (0..empty).map(|_| html! { <div class={classes!("progress-block", compact)} /> }) }
        </div>
    }
}

#[function_component(StatusBar)]
pub fn status_bar(props: &StatusBarProps) -> Html {
    let is_mobile = props.is_mobile;
    let progress = props.progress.min(100);
    let onclick = {
        let on_contact = props.on_contact.clone();
        Callback::from(move |_: MouseEvent| on_contact.emit(()))
    };

    let status_css = r#"
        .status-bar {
            position: fixed;
            bottom: 0;
            left: 0;
            right: 0;
            z-index: 9999;
            min-height: 60px;
            background: #1f2937;
            color: white;
            border-top: 1px solid #4b5563;
            box-shadow: 0 -10px 25px rgba(0, 0, 0, 0.35);
            animation: status-enter 0.8s ease-out 1s both;
        }
        @keyframes status-enter {
            from { transform: translateY(100px); opacity: 0; }
            to   { transform: translateY(0);     opacity: 1; }
        }
        .status-row {
            display: flex;
            align-items: center;
            justify-content: space-between;
            height: 5rem;
            padding: 0 2rem;
        }
        .status-bar.mobile .status-row {
            height: 4rem;
            padding: 0 0.75rem;
        }
        .brand-name {
            font-weight: 700;
            font-size: 1.25rem;
            color: #fef9c3;
        }
        .status-bar.mobile .brand-name { font-size: 0.875rem; }
        .muted {
            font-size: 0.75rem;
            color: #d1d5db;
        }
        .dev-indicator {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            margin-left: 1.5rem;
        }
        .pulse-dot {
            width: 0.75rem;
            height: 0.75rem;
            border-radius: 9999px;
            background: #fef9c3;
            animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
        }
        @keyframes pulse { 50% { opacity: 0.5; } }
        .progress-section {
            flex: 1;
            max-width: 32rem;
            margin: 0 2rem;
            text-align: center;
        }
        .progress-track {
            display: flex;
            gap: 0.25rem;
            height: 1rem;
            padding: 0 0.25rem;
            overflow: hidden;
            background: #374151;
            border: 1px solid #4b5563;
            border-radius: 9999px;
        }
        .progress-block { width: 0.5rem; height: 100%; background: #4b5563; }
        .progress-block.filled { background: #fef9c3; }
        .progress-block.compact { width: 0.25rem; }
        .mobile-progress { padding: 0 0.75rem 0.5rem; }
        .mobile-progress .progress-track { height: 0.75rem; gap: 0.125rem; }
        .contact-button {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            padding: 0.75rem 1.5rem;
            background: #374151;
            color: #fef9c3;
            border: 1px solid #4b5563;
            border-radius: 0.5rem;
            font-weight: 500;
            cursor: pointer;
            transition: transform 0.3s, background 0.3s;
        }
        .contact-button:hover { background: #4b5563; transform: scale(1.05); }
        .contact-button:active { transform: scale(0.95); }
        .status-bar.mobile .contact-button { padding: 0.5rem 0.75rem; font-size: 0.875rem; }
    "#;

    html! {
        <div class={classes!("status-bar", is_mobile.then_some("mobile"))}>
            <style>{status_css}</style>
            <div class="status-row">
                <div style="display: flex; align-items: center;">
                    <i class="fas fa-home" style="color: #fef9c3; margin-right: 0.5rem;"></i>
                    <div>
                        <div class="brand-name">{BRAND_NAME}</div>
                        <div class="muted">{BRAND_TAGLINE}</div>
                    </div>
                    if !is_mobile {
                        <div class="dev-indicator">
                            <div class="pulse-dot"></div>
                            <div>
                                <div style="font-size: 0.875rem; font-weight: 500; color: #fef9c3;">{"Under Development"}</div>
                                <div class="muted">{"Launching Soon"}</div>
                            </div>
                        </div>
                    }
                </div>

                if !is_mobile {
                    <div class="progress-section">
                        <div class="muted" style="font-size: 0.875rem; margin-bottom: 0.5rem;">
                            {"Website Development Progress"}
                        </div>
                        { render_blocks(progress, false) }
                        <div class="muted" style="margin-top: 0.25rem;">{format!("{}% Complete", progress)}</div>
                    </div>
                }

                <button class="contact-button" {onclick}>
                    <i class="fas fa-envelope"></i>
                    <span>{ if is_mobile { "Contact" } else { "Contact Us" } }</span>
                </button>
            </div>

            if is_mobile {
                <div class="mobile-progress">
                    { render_blocks(progress, true) }
                    <div class="muted" style="text-align: center; margin-top: 0.25rem;">
                        {format!("Development: {}%", progress)}
                    </div>
                </div>
            }
        </div>
    }
}
