//! sidenav-core - Core library for sidenav
//!
//! Provides the sidebar controller, the element registry it is built from,
//! configuration, and an in-memory page for tests and simulation.
//! No browser dependency: the `sidenav-web` crate supplies the DOM binding.

pub mod config;
pub mod controller;
pub mod element;
pub mod error;
pub mod memory;
pub mod registry;

pub use config::{MarkerClasses, SidebarConfig};
pub use controller::{ActiveLinkTracker, SidebarController, SidebarState, ToggleBinding};
pub use element::{ClickListener, ElementHandle, Page};
pub use error::{InitIssue, InitReport, IssueSeverity, SidebarError};
pub use memory::{MemoryElement, MemoryPage, NAV_LIST_CLASS};
pub use registry::{ElementRegistry, Role};
