//! Sidebar controller: toggle binding and active-link tracking
//!
//! Both behaviors are bound once at initialization and run synchronously on
//! the page's event thread.

use crate::config::{MarkerClasses, SidebarConfig};
use crate::element::{ElementHandle, Page};
use crate::error::{InitIssue, InitReport};
use crate::registry::{ElementRegistry, Role, ToggleRoles};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// Snapshot of the five toggle markers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarState {
    pub nav_shown: bool,
    pub toggle_icon: bool,
    pub body_padded: bool,
    pub header_padded: bool,
    pub logo_hidden: bool,
}

impl SidebarState {
    /// Collapsed sidebar as the base template renders it: only the logo
    /// label carries its marker
    pub fn closed() -> Self {
        Self {
            logo_hidden: true,
            ..Self::default()
        }
    }

    /// Markers in role order: nav, toggle, body, header, logo
    pub fn markers(&self) -> [bool; 5] {
        [
            self.nav_shown,
            self.toggle_icon,
            self.body_padded,
            self.header_padded,
            self.logo_hidden,
        ]
    }

    /// Every marker flipped
    pub fn inverted(&self) -> Self {
        Self {
            nav_shown: !self.nav_shown,
            toggle_icon: !self.toggle_icon,
            body_padded: !self.body_padded,
            header_padded: !self.header_padded,
            logo_hidden: !self.logo_hidden,
        }
    }
}

/// Toggle behavior over a fully resolved set of roles
#[derive(Clone)]
pub struct ToggleBinding<E> {
    roles: ToggleRoles<E>,
    classes: Rc<MarkerClasses>,
}

impl<E: ElementHandle> ToggleBinding<E> {
    /// Flip all five markers and return the new state
    pub fn on_toggle_click(&self) -> SidebarState {
        let c = &self.classes;
        let state = SidebarState {
            nav_shown: self.roles.nav.toggle_class(&c.show),
            toggle_icon: self.roles.toggle.toggle_class(&c.toggle_icon),
            body_padded: self.roles.body.toggle_class(&c.body_padding),
            header_padded: self.roles.header.toggle_class(&c.header_padding),
            logo_hidden: self.roles.logo.toggle_class(&c.logo_hidden),
        };
        trace!(?state, "Sidebar toggled");
        state
    }

    /// Current marker state, read from the elements
    pub fn state(&self) -> SidebarState {
        let c = &self.classes;
        SidebarState {
            nav_shown: self.roles.nav.has_class(&c.show),
            toggle_icon: self.roles.toggle.has_class(&c.toggle_icon),
            body_padded: self.roles.body.has_class(&c.body_padding),
            header_padded: self.roles.header.has_class(&c.header_padding),
            logo_hidden: self.roles.logo.has_class(&c.logo_hidden),
        }
    }

    fn bind_click(&self) {
        // The listener owns a clone for the page lifetime
        let binding = self.clone();
        self.roles
            .toggle
            .add_click_listener(Box::new(move |_: &E| {
                binding.on_toggle_click();
            }));
    }
}

/// Tracks which navigation link carries the active marker
#[derive(Clone)]
pub struct ActiveLinkTracker<E> {
    links: Rc<RefCell<Vec<E>>>,
    active_class: Rc<str>,
}

impl<E: ElementHandle> ActiveLinkTracker<E> {
    pub fn new(active_class: &str) -> Self {
        Self {
            links: Rc::new(RefCell::new(Vec::new())),
            active_class: Rc::from(active_class),
        }
    }

    /// Track and bind every link in `links`
    pub fn bind_links(&self, links: impl IntoIterator<Item = E>) {
        for link in links {
            self.register_link(link);
        }
    }

    /// Track a link and bind its click listener.
    ///
    /// Returns false (and binds nothing) if the link is already tracked.
    pub fn register_link(&self, link: E) -> bool {
        if self.contains(&link) {
            return false;
        }

        let tracker = self.clone();
        link.add_click_listener(Box::new(move |clicked: &E| tracker.on_link_click(clicked)));
        self.links.borrow_mut().push(link);
        true
    }

    /// Clear the active marker from every tracked link, then mark `clicked`
    pub fn on_link_click(&self, clicked: &E) {
        let links = self.links.borrow();
        if links.is_empty() {
            return;
        }

        for link in links.iter() {
            link.remove_class(&self.active_class);
        }
        clicked.add_class(&self.active_class);
        trace!(tracked = links.len(), "Active link updated");
    }

    /// Index of the first tracked link carrying the active marker
    pub fn active_index(&self) -> Option<usize> {
        self.links
            .borrow()
            .iter()
            .position(|link| link.has_class(&self.active_class))
    }

    pub fn contains(&self, link: &E) -> bool {
        self.links.borrow().iter().any(|l| l.same_element(link))
    }

    pub fn len(&self) -> usize {
        self.links.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<E> {
        self.links.borrow().get(index).cloned()
    }
}

/// Binds the sidebar toggle and active-link tracking on one page
pub struct SidebarController<E> {
    toggle: Option<ToggleBinding<E>>,
    links: ActiveLinkTracker<E>,
}

impl<E: ElementHandle> SidebarController<E> {
    /// Resolve the registry from `page` and bind both behaviors
    pub fn initialize<P>(page: &P, config: SidebarConfig) -> (Self, InitReport)
    where
        P: Page<Element = E>,
    {
        let registry = ElementRegistry::resolve(page, &config);
        Self::bind(registry, config)
    }

    /// Bind both behaviors on an already resolved registry.
    ///
    /// The toggle is only bound when every toggle role is present. Missing
    /// roles are reported, never returned as errors.
    pub fn bind(registry: ElementRegistry<E>, config: SidebarConfig) -> (Self, InitReport) {
        let mut report = InitReport::new();
        for role in registry.missing_roles() {
            report.add_issue(InitIssue::missing(role, &role.lookup(&config)));
        }

        let (roles, links) = registry.into_parts();
        let toggle = match roles {
            Some(roles) => match roles.shared_element() {
                Some((first, second)) => {
                    warn!(%first, %second, "Sidebar toggle not bound, roles share an element");
                    report.add_issue(shared_element_issue(first, second));
                    None
                }
                None => {
                    let binding = ToggleBinding {
                        roles,
                        classes: Rc::new(config.classes.clone()),
                    };
                    binding.bind_click();
                    Some(binding)
                }
            },
            None => {
                warn!(missing = ?report.missing_roles(), "Sidebar toggle not bound");
                None
            }
        };

        let tracker = ActiveLinkTracker::new(&config.classes.active);
        tracker.bind_links(links);
        if tracker.is_empty() {
            report.add_warning(format!(
                "No navigation links with class=\"{}\"",
                config.link_class
            ));
        }

        report.toggle_bound = toggle.is_some();
        report.links_tracked = tracker.len();
        debug!(
            toggle_bound = report.toggle_bound,
            links = report.links_tracked,
            "Sidebar controller initialized"
        );

        (
            Self {
                toggle,
                links: tracker,
            },
            report,
        )
    }

    /// Flip the toggle markers. `None` when the toggle is not bound.
    pub fn on_toggle_click(&self) -> Option<SidebarState> {
        self.toggle.as_ref().map(ToggleBinding::on_toggle_click)
    }

    pub fn on_link_click(&self, clicked: &E) {
        self.links.on_link_click(clicked);
    }

    /// Track a navigation link created after initialization
    pub fn register_link(&self, link: E) -> bool {
        let added = self.links.register_link(link);
        if added {
            debug!(links = self.links.len(), "Navigation link registered");
        }
        added
    }

    pub fn is_toggle_bound(&self) -> bool {
        self.toggle.is_some()
    }

    pub fn state(&self) -> Option<SidebarState> {
        self.toggle.as_ref().map(ToggleBinding::state)
    }

    pub fn links(&self) -> &ActiveLinkTracker<E> {
        &self.links
    }
}

/// Issue for two toggle roles resolved to one element
fn shared_element_issue(first: Role, second: Role) -> InitIssue {
    InitIssue::error(format!(
        "Sidebar toggle skipped: {first} and {second} are the same element"
    ))
    .with_suggestion(format!("Give {first} and {second} separate elements"))
}
