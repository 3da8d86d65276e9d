//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::protected_route::ProtectedRoute;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    about::AboutPage, contact::ContactPage, dashboard::DashboardPage, home::HomePage, services::ServicesPage,
    sign_in::SignInPage, sign_up::SignUpPage,
};
use crate::state::toast::ToastState;

/// Paths with a `Route` below. Links inside the site must target one of these.
pub const SITE_PATHS: &[&str] = &["/", "/about", "/services", "/contact", "/signin", "/signup", "/dashboard"];

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast mailbox and sets up client-side routing. Session state
/// is not provided as context; readers go to the session store directly.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/wiz.css"/>
        <Title text="WIZ InfraProjects"/>

        <Router>
            <ToastHost/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Layout><HomePage/></Layout> }/>
                <Route path=StaticSegment("about") view=|| view! { <Layout><AboutPage/></Layout> }/>
                <Route path=StaticSegment("services") view=|| view! { <Layout><ServicesPage/></Layout> }/>
                <Route path=StaticSegment("contact") view=|| view! { <Layout><ContactPage/></Layout> }/>
                <Route path=StaticSegment("signin") view=|| view! { <Layout><SignInPage/></Layout> }/>
                <Route path=StaticSegment("signup") view=|| view! { <Layout><SignUpPage/></Layout> }/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
