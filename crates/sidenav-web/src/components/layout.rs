//! Page layout wiring the header toggle to the sidebar

use super::{Header, NavItem, Sidebar, SidebarClasses};
use leptos::prelude::*;
use sidenav_core::{SidebarConfig, SidebarState};

/// Header, sidebar and content sharing one toggle state
#[component]
pub fn SidebarLayout(
    items: Vec<NavItem>,
    #[prop(optional)] config: Option<SidebarConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let (state, set_state) = signal(SidebarState::closed());
    let classes = SidebarClasses::new(&config);

    view! {
        <div id=config.body_id.clone() class=move || classes.body(&state.get())>
            <Header config=config.clone() state set_state />
            <Sidebar config=config.clone() items state />
            <main class="content">{children()}</main>
        </div>
    }
}
