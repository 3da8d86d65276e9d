//! Lines of business.

use leptos::prelude::*;

pub const SERVICES: &[(&str, &str)] = &[
    ("Sand and Granite Projects", "Extraction and supply of sand and granite for construction."),
    ("Electric Vehicle (EV) Industry", "Investment in electric mobility and charging infrastructure."),
    ("Gold Trading", "Bullion trading backed by transparent pricing."),
    ("Stock Market Investments (NSE/BSE)", "Managed equity exposure on Indian exchanges."),
    ("Agro Farming", "Sustainable farming ventures and produce supply."),
    ("Construction and Open Plots Selling", "Residential construction and plotted developments."),
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <section class="banner">
            <h1 class="banner__title">"Our Services"</h1>
            <p class="banner__lead">
                "We offer a wide range of services across multiple industries, ensuring innovation, sustainability, "
                "and excellence in every project."
            </p>
        </section>
        <section class="services-grid">
            {SERVICES
                .iter()
                .map(|(title, description)| {
                    view! {
                        <article class="service-card">
                            <h3 class="service-card__title">{*title}</h3>
                            <p class="service-card__body">{*description}</p>
                        </article>
                    }
                })
                .collect_view()}
        </section>
    }
}
