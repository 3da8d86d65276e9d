//! Toast overlay and the `notify` helper pages use to raise one.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides a `RwSignal<ToastState>`; any page may call `notify`, which
//! replaces the visible toast and schedules its dismissal.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Show a toast and auto-dismiss it after `TOAST_DURATION`.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut seq = 0;
    toasts.update(|t| seq = t.show(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(crate::state::toast::TOAST_DURATION).await;
        toasts.update(|t| {
            t.dismiss(seq);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}

/// Fixed-position container rendering the current toast, if any.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_close = move |_| {
        toasts.update(|t| {
            if let Some(seq) = t.current().map(|c| c.seq) {
                t.dismiss(seq);
            }
        });
    };

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .current()
                    .cloned()
                    .map(|toast| {
                        let class = format!("toast {}", toast.kind.css_modifier());
                        view! {
                            <div class=class>
                                <span class="toast__message">{toast.message}</span>
                                <button class="toast__close" type="button" aria-label="Dismiss" on:click=on_close>
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
