//! Composition wrapper that gates the member area.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives in browser storage, so the check runs in an effect after
//! hydration and on every mount of a protected route. Server renders and the
//! first client frame show a neutral placeholder.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::BrowserSessionStore;
use crate::util::auth::{GuardDecision, check_store};

/// Render `children` only when the stored session carries a token; otherwise
/// replace the navigation with the sign-in page.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let navigate = use_navigate();
    let allowed = RwSignal::new(false);

    Effect::new(move || match check_store(&BrowserSessionStore) {
        GuardDecision::Allow => allowed.set(true),
        GuardDecision::Redirect(dest) => {
            allowed.set(false);
            navigate(dest.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || allowed.get()
            fallback=|| view! { <div class="route-guard"><p>"Checking your session..."</p></div> }
        >
            {children()}
        </Show>
    }
}
