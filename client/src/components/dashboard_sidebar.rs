//! Dashboard sidebar with role-dependent entries and collapsible groups.

use leptos::prelude::*;

use crate::state::dashboard::{DashboardUi, Menu, NavEntry, Panel, nav_entries};

#[component]
pub fn DashboardSidebar(ui: RwSignal<DashboardUi>) -> impl IntoView {
    let entries = nav_entries(ui.get_untracked().role);

    let link = move |panel: Panel| {
        view! {
            <button
                type="button"
                class="sidebar__link"
                class=("sidebar__link--active", move || ui.get().active == panel)
                on:click=move |_| {
                    ui.update(|u| {
                        u.select(panel);
                    });
                }
            >
                {panel.label()}
            </button>
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__title">"Menu"</div>
            <nav class="sidebar__nav">
                {entries
                    .into_iter()
                    .map(|entry| match entry {
                        NavEntry::Link(panel) => link(panel).into_any(),
                        NavEntry::Group(menu) => view! { <SidebarGroup ui=ui menu=menu/> }.into_any(),
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
fn SidebarGroup(ui: RwSignal<DashboardUi>, menu: Menu) -> impl IntoView {
    let open = move || ui.get().is_open(menu);

    view! {
        <div class="sidebar__group">
            <button
                type="button"
                class="sidebar__group-toggle"
                aria-expanded=move || if open() { "true" } else { "false" }
                on:click=move |_| ui.update(|u| u.toggle(menu))
            >
                <span>{menu.label()}</span>
                <span class="sidebar__chevron">{move || if open() { "▴" } else { "▾" }}</span>
            </button>
            <Show when=open>
                <div class="sidebar__group-items">
                    {menu
                        .items()
                        .iter()
                        .map(|panel| {
                            let panel = *panel;
                            view! {
                                <button
                                    type="button"
                                    class="sidebar__link sidebar__link--nested"
                                    class=("sidebar__link--active", move || ui.get().active == panel)
                                    on:click=move |_| {
                                        ui.update(|u| {
                                            u.select(panel);
                                        });
                                    }
                                >
                                    {panel.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
