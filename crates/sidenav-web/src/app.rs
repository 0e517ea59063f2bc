//! Leptos app used by the `csr` build

use crate::components::{NavItem, SidebarLayout};
use leptos::prelude::*;

/// Navigation entries of the auction site
pub fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("/", "Active Listings", "fa-gavel"),
        NavItem::new("/categories", "Categories", "fa-tags"),
        NavItem::new("/watchlist", "Watchlist", "fa-eye"),
        NavItem::new("/create_listing", "Create Listing", "fa-plus"),
        NavItem::new("/user_panel", "User Panel", "fa-user"),
    ]
}

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    let items = default_nav_items();

    view! {
        <SidebarLayout items>
            <h2>"Active Listings"</h2>
        </SidebarLayout>
    }
}
