//! Class attributes of the sidebar markup as pure functions of the state

use sidenav_core::{MarkerClasses, SidebarConfig, SidebarState};

const NAV_BASE: &str = "l-navbar";
const HEADER_BASE: &str = "header";
const TOGGLE_BASE: &str = "fas fa-bars";

/// `base` plus `marker` when `applied`
fn marker_class(base: &str, marker: &str, applied: bool) -> String {
    match (base.is_empty(), applied) {
        (_, false) => base.to_string(),
        (true, true) => marker.to_string(),
        (false, true) => format!("{base} {marker}"),
    }
}

/// Renders each element's `class` attribute from a [`SidebarState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarClasses {
    markers: MarkerClasses,
    logo_class: String,
    link_class: String,
}

impl SidebarClasses {
    pub fn new(config: &SidebarConfig) -> Self {
        Self {
            markers: config.classes.clone(),
            logo_class: config.logo_class.clone(),
            link_class: config.link_class.clone(),
        }
    }

    pub fn nav(&self, state: &SidebarState) -> String {
        marker_class(NAV_BASE, &self.markers.show, state.nav_shown)
    }

    pub fn toggle(&self, state: &SidebarState) -> String {
        marker_class(TOGGLE_BASE, &self.markers.toggle_icon, state.toggle_icon)
    }

    pub fn body(&self, state: &SidebarState) -> String {
        marker_class("", &self.markers.body_padding, state.body_padded)
    }

    pub fn header(&self, state: &SidebarState) -> String {
        marker_class(HEADER_BASE, &self.markers.header_padding, state.header_padded)
    }

    pub fn logo(&self, state: &SidebarState) -> String {
        marker_class(&self.logo_class, &self.markers.logo_hidden, state.logo_hidden)
    }

    /// Link `index` while link `active` is the active one
    pub fn link(&self, index: usize, active: usize) -> String {
        marker_class(&self.link_class, &self.markers.active, index == active)
    }
}
