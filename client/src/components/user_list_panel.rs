//! Admin user-management panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Issues one authenticated `GET /api/users` when mounted. Failures render an
//! empty table and raise a toast; the panel never stays in its loading state.

use leptos::prelude::*;

use crate::components::toast_host::notify;
use crate::net::types::UserRecord;
use crate::state::dashboard::{UserListLoad, UserListState};
use crate::state::session::Session;
use crate::state::toast::{ToastKind, ToastState};

/// User table for administrators.
#[component]
pub fn UserListPanel(session: Session) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let list = RwSignal::new(UserListState::default());

    let settle = move |load: UserListLoad| {
        let mut notice = None;
        list.update(|s| notice = s.finish(load));
        if let Some(message) = notice {
            notify(toasts, ToastKind::Error, message);
        }
    };

    list.update(UserListState::begin);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::HttpAuthApi::from_config();
        let load = crate::state::dashboard::fetch_user_list(&api, &session).await;
        settle(load);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, settle);
    }

    let rows = move || list.get().users;

    view! {
        <div class="user-list-panel">
            <div class="user-list-panel__summary">
                {move || {
                    let state = list.get();
                    if state.loading { "Loading users...".to_owned() } else { format!("{} users", state.users.len()) }
                }}
            </div>

            <Show
                when=move || !rows().is_empty()
                fallback=move || {
                    view! {
                        <div class="user-list-panel__empty">
                            {move || if list.get().loading { "" } else { "No users to show." }}
                        </div>
                    }
                }
            >
                <div class="user-list-panel__table-wrap">
                    <table class="user-list-panel__table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Name"</th>
                                <th>"Username"</th>
                                <th>"Email"</th>
                                <th>"Phone"</th>
                                <th>"Role"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || rows().into_iter().map(user_row).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

fn user_row(user: UserRecord) -> impl IntoView {
    let role_class = format!("user-list-panel__role user-list-panel__role--{}", user.role.as_str().to_lowercase());
    view! {
        <tr>
            <td class="user-list-panel__mono">{user.id}</td>
            <td>{user.name}</td>
            <td>{user.username}</td>
            <td>{user.email}</td>
            <td class="user-list-panel__mono">{user.phone}</td>
            <td><span class=role_class>{user.role.as_str()}</span></td>
        </tr>
    }
}
