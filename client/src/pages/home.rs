//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

pub const HERO_HEADLINE: &str = "IT'S TIME TO BUILD YOUR ECONOMY GROW";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__text">
                <p class="hero__eyebrow">"WIZ INFRA PROJECTS"</p>
                <h1 class="hero__headline">{HERO_HEADLINE}</h1>
                <p class="hero__lead">
                    "Make your work easier with an integrated ecosystem that lets all departments work together seamlessly."
                </p>
                <A href="/signup" attr:class="hero__cta">"Get Started"</A>
            </div>
        </section>
        <section class="section">
            <h2 class="section__title">"About WIZ InfraProjects"</h2>
            <p class="section__body">
                "WIZ InfraProjects is a diversified enterprise operating in multiple sectors including construction, "
                "finance, technology, and more. We harness innovation and sustainable practices to drive growth and "
                "build a better future for our community."
            </p>
        </section>
    }
}
