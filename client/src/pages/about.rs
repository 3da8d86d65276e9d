//! Company background page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="banner">
            <h1 class="banner__title">"About Us"</h1>
            <p class="banner__lead">
                "WIZ InfraProjects is a diversified enterprise operating across multiple industries including sand "
                "business, granite extraction, electric vehicle technology, gold trading, stock market investments, "
                "construction, open plots selling, agro farming, and banking."
            </p>
        </section>
        <section class="section">
            <h2 class="section__title">"WHO WE ARE?"</h2>
            <p class="section__body">
                "With over 10 years of industry experience, our team stands as a trusted leader in its fields. We "
                "combine quality, innovation, and ethical business practices to exceed client expectations while "
                "making a positive impact in our community."
            </p>
        </section>
    }
}
