//! Top navigation bar for the public pages.

use leptos::prelude::*;
use leptos_router::components::A;

/// Public page links, in display order.
pub const PUBLIC_LINKS: &[(&str, &str)] =
    &[("/", "Home"), ("/about", "About Us"), ("/contact", "Contact Us"), ("/services", "Services")];

#[component]
pub fn Navbar() -> impl IntoView {
    let mobile_open = RwSignal::new(false);

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <A href="/" attr:class="navbar__brand">
                    <span class="navbar__logo" aria-hidden="true"></span>
                    <span class="navbar__name">"WIZ"</span>
                </A>

                <div class="navbar__links">
                    {PUBLIC_LINKS
                        .iter()
                        .map(|(href, label)| view! { <A href=*href attr:class="navbar__link">{*label}</A> })
                        .collect_view()}
                </div>

                <div class="navbar__actions">
                    <A href="/signin" attr:class="navbar__button navbar__button--ghost">"Sign In"</A>
                    <A href="/signup" attr:class="navbar__button">"Join Us"</A>
                    <button
                        class="navbar__toggle"
                        type="button"
                        aria-label="Toggle menu"
                        aria-expanded=move || if mobile_open.get() { "true" } else { "false" }
                        on:click=move |_| mobile_open.update(|open| *open = !*open)
                    >
                        {move || if mobile_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || mobile_open.get()>
                <div class="navbar__mobile">
                    {PUBLIC_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=*href class="navbar__mobile-link" on:click=move |_| mobile_open.set(false)>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href="/signin" class="navbar__mobile-link" on:click=move |_| mobile_open.set(false)>
                        "Sign In"
                    </a>
                    <a href="/signup" class="navbar__mobile-link" on:click=move |_| mobile_open.set(false)>
                        "Join Us"
                    </a>
                </div>
            </Show>
        </nav>
    }
}
