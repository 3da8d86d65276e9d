//! Contact form. Submissions are validated and acknowledged locally only.

use leptos::prelude::*;

use crate::pages::auth_feedback::FieldError;
use crate::util::validation::{ContactForm, ValidationErrors, validate_contact};

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::new());
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm { name: name.get_untracked(), email: email.get_untracked(), message: message.get_untracked() };
        let found = validate_contact(&form);
        let ok = found.is_empty();
        errors.set(found);
        if ok {
            log::info!("contact form accepted");
            submitted.set(true);
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        }
    };

    view! {
        <section class="contact">
            <h1 class="contact__title">"Contact Us"</h1>
            <Show when=move || submitted.get()>
                <p class="contact__thanks">"Thank you for reaching out! We'll get back to you soon."</p>
            </Show>
            <form class="form" on:submit=on_submit>
                <div class="form__field">
                    <label class="form__label" for="contact-name">"Name"</label>
                    <input
                        id="contact-name"
                        class="form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <FieldError errors=errors field="name"/>
                </div>
                <div class="form__field">
                    <label class="form__label" for="contact-email">"Email"</label>
                    <input
                        id="contact-email"
                        class="form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <FieldError errors=errors field="email"/>
                </div>
                <div class="form__field">
                    <label class="form__label" for="contact-message">"Message"</label>
                    <textarea
                        id="contact-message"
                        class="form__input form__input--multiline"
                        rows="5"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    <FieldError errors=errors field="message"/>
                </div>
                <button class="form__submit" type="submit">"Send Message"</button>
            </form>
        </section>
    }
}
