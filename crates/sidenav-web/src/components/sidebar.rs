//! Sidebar navigation component

use super::SidebarClasses;
use leptos::prelude::*;
use sidenav_core::{SidebarConfig, SidebarState, NAV_LIST_CLASS};

/// One navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub href: String,
    pub label: String,
    /// Font Awesome icon class, e.g. `fa-tags`
    pub icon: String,
}

impl NavItem {
    pub fn new(href: &str, label: &str, icon: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Nav panel with the logo label and the links.
///
/// The first link starts active. Clicking a link makes it the only active one.
#[component]
pub fn Sidebar(
    config: SidebarConfig,
    items: Vec<NavItem>,
    state: ReadSignal<SidebarState>,
    #[prop(default = "Categories")] logo_text: &'static str,
) -> impl IntoView {
    let (active, set_active) = signal(0usize);
    let classes = SidebarClasses::new(&config);

    let links = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let classes = classes.clone();
            view! {
                <a
                    href=item.href
                    class=move || classes.link(index, active.get())
                    on:click=move |_| set_active.set(index)
                >
                    <i class=format!("fas {} nav_icon", item.icon)></i>
                    <span class="nav_name">{item.label}</span>
                </a>
            }
        })
        .collect_view();

    let logo_classes = classes.clone();
    view! {
        <div id=config.nav_id.clone() class=move || classes.nav(&state.get())>
            <nav class="nav">
                <div>
                    <span class=move || logo_classes.logo(&state.get())>{logo_text}</span>
                    <div class=NAV_LIST_CLASS>{links}</div>
                </div>
            </nav>
        </div>
    }
}
