//! Public page chrome: navbar, main content, footer.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <Navbar/>
        <main class="layout__main">{children()}</main>
        <Footer/>
    }
}
