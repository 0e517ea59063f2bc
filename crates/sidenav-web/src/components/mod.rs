//! Leptos layout components rendering the sidebar markup

mod classes;
mod header;
mod layout;
mod sidebar;

pub use classes::SidebarClasses;
pub use header::Header;
pub use layout::SidebarLayout;
pub use sidebar::{NavItem, Sidebar};
