//! Header component

use super::SidebarClasses;
use leptos::prelude::*;
use sidenav_core::{SidebarConfig, SidebarState};

/// Header holding the sidebar toggle
#[component]
pub fn Header(
    config: SidebarConfig,
    state: ReadSignal<SidebarState>,
    set_state: WriteSignal<SidebarState>,
) -> impl IntoView {
    let classes = SidebarClasses::new(&config);
    let toggle_classes = classes.clone();

    view! {
        <header id=config.header_id.clone() class=move || classes.header(&state.get())>
            <div class="header_toggle">
                <i
                    id=config.toggle_id.clone()
                    class=move || toggle_classes.toggle(&state.get())
                    role="button"
                    on:click=move |_| set_state.update(|s| *s = s.inverted())
                    aria-label="Toggle sidebar"
                    aria-expanded=move || state.get().nav_shown.to_string()
                ></i>
            </div>
        </header>
    }
}
