//! Member dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only inside `ProtectedRoute`, so the session read here comes from
//! browser storage after the guard passed. The role picks the sidebar entries
//! and landing panel; sign-out clears the store and returns to `/signin`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_sidebar::DashboardSidebar;
use crate::components::user_list_panel::UserListPanel;
use crate::net::api::HttpAuthApi;
use crate::state::auth::AuthController;
use crate::state::dashboard::{DashboardUi, Panel};
use crate::state::session::{BrowserSessionStore, Session, SessionStore};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = BrowserSessionStore.read();
    let ui = RwSignal::new(DashboardUi::new(session.role));
    let active = Memo::new(move |_| ui.get().active);
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        let dest = AuthController::new(HttpAuthApi::from_config(), BrowserSessionStore).sign_out();
        navigate(dest.path(), NavigateOptions::default());
    };

    let welcome = format!("Welcome back, {}!", session.user_id);
    let panel_session = session.clone();

    view! {
        <div class="dashboard-page">
            <DashboardSidebar ui=ui/>
            <main class="dashboard-page__main">
                <header class="dashboard-page__header">
                    <div>
                        <h2>"Dashboard"</h2>
                        <p class="dashboard-page__welcome">{welcome}</p>
                    </div>
                    <button class="dashboard-page__sign-out" type="button" on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </header>
                <section class="dashboard-page__content">
                    {move || panel_view(active.get(), &panel_session)}
                </section>
            </main>
        </div>
    }
}

fn panel_view(panel: Panel, session: &Session) -> AnyView {
    match panel {
        Panel::Overview => overview_cards().into_any(),
        Panel::Users => view! { <UserListPanel session=session.clone()/> }.into_any(),
        other => view! {
            <div class="dashboard-card dashboard-card--placeholder">
                <h3>{other.label()}</h3>
                <p>"Nothing here yet. This section will show your activity once it is available."</p>
            </div>
        }
        .into_any(),
    }
}

fn overview_cards() -> impl IntoView {
    view! {
        <div class="dashboard-grid">
            <div class="dashboard-card">
                <h3>"Package"</h3>
                <p class="dashboard-card__value">"P0"</p>
            </div>
            <div class="dashboard-card">
                <h3>"Your Referral Links"</h3>
                <button class="dashboard-card__button" type="button">"Copy Left Referral Link"</button>
                <button class="dashboard-card__button" type="button">"Copy Right Referral Link"</button>
            </div>
            <div class="dashboard-card">
                <h3>"Wallet"</h3>
                <p class="dashboard-card__value">"₹0.00"</p>
            </div>
        </div>
    }
}
