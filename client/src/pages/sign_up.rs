//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::notify;
use crate::net::types::SignUpForm;
use crate::pages::auth_feedback::{FieldError, SIGN_UP_COPY, feedback_for};
use crate::state::auth::AuthOutcome;
use crate::state::toast::ToastState;
use crate::util::validation::ValidationErrors;

/// `(field, label, input type, autocomplete)` for each plain text field.
const TEXT_FIELDS: &[(&str, &str, &str, &str)] = &[
    ("name", "Name", "text", "name"),
    ("username", "User Name", "text", "username"),
    ("email", "Mail ID", "email", "email"),
    ("phone", "Phone Number", "tel", "tel"),
];

#[component]
pub fn SignUpPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(SignUpForm::default());
    let errors = RwSignal::new(ValidationErrors::new());
    let busy = RwSignal::new(false);
    let show_password = RwSignal::new(false);

    let apply = move |outcome: AuthOutcome| {
        let feedback = feedback_for(outcome, SIGN_UP_COPY);
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
        let submitted = form.get_untracked();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let apply = apply.clone();
            leptos::task::spawn_local(async move {
                let controller = crate::state::auth::AuthController::new(
                    crate::net::api::HttpAuthApi::from_config(),
                    crate::state::session::BrowserSessionStore,
                );
                let outcome = controller.sign_up(&submitted).await;
                busy.set(false);
                apply(outcome);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (submitted, &apply);
            busy.set(false);
        }
    };

    let text_field = move |(field, label, input_type, autocomplete): (&'static str, &'static str, &'static str, &'static str)| {
        view! {
            <div class="form__field">
                <label class="form__label" for=field>{label} " " <span class="form__required">"*"</span></label>
                <input
                    id=field
                    class="form__input"
                    type=input_type
                    name=field
                    autocomplete=autocomplete
                    placeholder=if field == "phone" { "Enter digits only" } else { "" }
                    aria-invalid=move || if errors.get().contains(field) { "true" } else { "false" }
                    prop:value=move || field_value(&form.get(), field).to_owned()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set_field(f, field, value));
                    }
                />
                <FieldError errors=errors field=field/>
            </div>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Sign Up"</h1>
                <form class="form" on:submit=on_submit>
                    {TEXT_FIELDS[..3].iter().copied().map(text_field).collect_view()}
                    <div class="form__field">
                        <label class="form__label" for="password">"Password " <span class="form__required">"*"</span></label>
                        <div class="form__password">
                            <input
                                id="password"
                                class="form__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                name="password"
                                autocomplete="new-password"
                                aria-invalid=move || if errors.get().contains("password") { "true" } else { "false" }
                                prop:value=move || form.get().password
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.password = value);
                                }
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
                    {TEXT_FIELDS[3..].iter().copied().map(text_field).collect_view()}
                    <button class="form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Submitting..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already a member? " <A href="/signin">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}

fn field_value<'a>(form: &'a SignUpForm, field: &str) -> &'a str {
    match field {
        "name" => &form.name,
        "username" => &form.username,
        "email" => &form.email,
        "phone" => &form.phone,
        _ => &form.password,
    }
}

fn set_field(form: &mut SignUpForm, field: &str, value: String) {
    match field {
        "name" => form.name = value,
        "username" => form.username = value,
        "email" => form.email = value,
        "phone" => form.phone = value,
        _ => form.password = value,
    }
}
