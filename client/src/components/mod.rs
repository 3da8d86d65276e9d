//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, the route guard wrapper, and dashboard
//! surfaces while reading/writing shared state from Leptos context providers.

pub mod dashboard_sidebar;
pub mod footer;
pub mod layout;
pub mod navbar;
pub mod protected_route;
pub mod toast_host;
pub mod user_list_panel;
