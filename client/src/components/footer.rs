//! Site footer for the public pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::navbar::PUBLIC_LINKS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__about">
                    <h3>"WIZ"</h3>
                    <p>
                        "A diversified group working across trading, investment and allied services, "
                        "built on transparency and long-term partnerships."
                    </p>
                </div>
                <div class="footer__links">
                    <h4>"Quick Links"</h4>
                    <ul>
                        {PUBLIC_LINKS
                            .iter()
                            .map(|(href, label)| view! { <li><A href=*href>{*label}</A></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div class="footer__contact">
                    <h4>"Contact"</h4>
                    <p>"support@wiz.example"</p>
                </div>
            </div>
            <p class="footer__legal">"© WIZ. All rights reserved."</p>
        </footer>
    }
}
