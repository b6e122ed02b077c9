use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config;
use crate::contact::form::{Notice, NoticeKind};

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
    /// Changes whenever a new notice is raised, restarting the timer.
    pub seq: u32,
    pub on_dismiss: Callback<u32>,
}

/// Transient notification in the corner of the screen. Dismisses itself after
/// [`config::NOTICE_MS`] and never blocks the page underneath.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let active = props.notice.is_some();
        use_effect_with_deps(
            move |seq| {
                let seq = *seq;
                let timeout = active.then(|| {
                    Timeout::new(config::NOTICE_MS, move || on_dismiss.emit(seq))
                });
                // Dropping the handle cancels a timer superseded by a newer notice.
                move || drop(timeout)
            },
            props.seq,
        );
    }

    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };

    let kind_class = match notice.kind {
        NoticeKind::Success => "toast-success",
        NoticeKind::Error => "toast-error",
    };
    let close = {
        let on_dismiss = props.on_dismiss.clone();
        let seq = props.seq;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(seq))
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status" aria-live="polite">
            <style>
                {r#"
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        max-width: 360px;
                        padding: 1rem 2.5rem 1rem 1.25rem;
                        border-radius: 12px;
                        background: #fff;
                        box-shadow: 0 16px 32px rgba(0,0,0,0.15);
                        animation: toastIn 0.3s ease-out forwards;
                        z-index: 100;
                    }
                    .toast-success { border-left: 4px solid #16a34a; }
                    .toast-error { border-left: 4px solid #dc2626; }
                    .toast-title { font-weight: 600; margin-bottom: 0.25rem; }
                    .toast-description { color: #555; font-size: 0.9rem; }
                    .toast-close {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.75rem;
                        border: none;
                        background: none;
                        cursor: pointer;
                        color: #888;
                    }
                "#}
            </style>
            <div class="toast-title">{ &notice.title }</div>
            <div class="toast-description">{ &notice.description }</div>
            <button class="toast-close" onclick={close} aria-label="Dismiss">{"✕"}</button>
        </div>
    }
}
