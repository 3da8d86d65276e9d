//! Sign-in page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::notify;
use crate::net::types::SignInForm;
use crate::pages::auth_feedback::{FieldError, SIGN_IN_COPY, feedback_for};
use crate::state::auth::AuthOutcome;
use crate::state::toast::ToastState;
use crate::util::validation::ValidationErrors;

#[component]
pub fn SignInPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::new());
    let busy = RwSignal::new(false);
    let show_password = RwSignal::new(false);

    let apply = move |outcome: AuthOutcome| {
        let feedback = feedback_for(outcome, SIGN_IN_COPY);
        errors.set(feedback.field_errors);
        let (kind, message) = feedback.toast;
        notify(toasts, kind, message);
        if let Some(dest) = feedback.navigate_to {
            navigate(dest.path(), NavigateOptions::default());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = SignInForm { email: email.get_untracked(), password: password.get_untracked() };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let apply = apply.clone();
            leptos::task::spawn_local(async move {
                let controller = crate::state::auth::AuthController::new(
                    crate::net::api::HttpAuthApi::from_config(),
                    crate::state::session::BrowserSessionStore,
                );
                let outcome = controller.sign_in(&form).await;
                busy.set(false);
                apply(outcome);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, &apply);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Sign In"</h1>
                <form class="form" on:submit=on_submit>
                    <div class="form__field">
                        <label class="form__label" for="email">"Email " <span class="form__required">"*"</span></label>
                        <input
                            id="email"
                            class="form__input"
                            type="email"
                            name="email"
                            autocomplete="email"
                            aria-invalid=move || if errors.get().contains("email") { "true" } else { "false" }
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <FieldError errors=errors field="email"/>
                    </div>
                    <div class="form__field">
                        <label class="form__label" for="password">"Password " <span class="form__required">"*"</span></label>
                        <div class="form__password">
                            <input
                                id="password"
                                class="form__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                name="password"
                                autocomplete="current-password"
                                aria-invalid=move || if errors.get().contains("password") { "true" } else { "false" }
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                class="form__reveal"
                                type="button"
                                tabindex="-1"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                        <FieldError errors=errors field="password"/>
                    </div>
                    <button class="form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Submitting..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "New here? " <A href="/signup">"Create an account"</A>
                </p>
            </div>
        </div>
    }
}
