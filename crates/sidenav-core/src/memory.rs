//! In-memory page used by tests and the `sidenav simulate` command
//!
//! Elements are shared `Rc` nodes with interior mutability, mirroring how a
//! browser hands out live element references on a single thread.

use crate::config::SidebarConfig;
use crate::element::{ClickListener, ElementHandle, Page};
use crate::registry::Role;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Class of the container that holds the nav links in the base template
pub const NAV_LIST_CLASS: &str = "nav_list";

struct Node {
    tag: String,
    id: Option<String>,
    classes: RefCell<Vec<String>>,
    children: RefCell<Vec<MemoryElement>>,
    listeners: RefCell<Vec<Rc<dyn Fn(&MemoryElement)>>>,
}

/// Live handle onto an element of a [`MemoryPage`]
#[derive(Clone)]
pub struct MemoryElement(Rc<Node>);

impl MemoryElement {
    fn new(tag: &str, id: Option<&str>, classes: &[&str]) -> Self {
        Self(Rc::new(Node {
            tag: tag.to_string(),
            id: id.map(str::to_string),
            classes: RefCell::new(classes.iter().map(|c| c.to_string()).collect()),
            children: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
        }))
    }

    pub fn tag(&self) -> &str {
        &self.0.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.0.id.as_deref()
    }

    /// Current class list, in insertion order
    pub fn classes(&self) -> Vec<String> {
        self.0.classes.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.0.listeners.borrow().len()
    }

    /// Dispatch a click to every registered listener
    pub fn click(&self) {
        // Listeners mutate classes, possibly on this element, so release the borrow first
        let listeners: Vec<_> = self.0.listeners.borrow().clone();
        for listener in listeners {
            listener(self);
        }
    }

    fn find_descendant(&self, class: &str) -> Option<MemoryElement> {
        for child in self.0.children.borrow().iter() {
            if child.has_class(class) {
                return Some(child.clone());
            }
            if let Some(found) = child.find_descendant(class) {
                return Some(found);
            }
        }
        None
    }
}

impl ElementHandle for MemoryElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.classes.borrow_mut().push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.classes.borrow_mut().retain(|c| c != class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    fn same_element(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn add_click_listener(&self, listener: ClickListener<Self>) {
        self.0.listeners.borrow_mut().push(Rc::from(listener));
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryElement")
            .field("tag", &self.0.tag)
            .field("id", &self.0.id)
            .field("classes", &self.0.classes.borrow())
            .finish()
    }
}

/// A page of [`MemoryElement`]s in document order
#[derive(Default)]
pub struct MemoryPage {
    elements: RefCell<Vec<MemoryElement>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `div` under `parent` (or at the top level)
    pub fn add_element(
        &self,
        id: Option<&str>,
        classes: &[&str],
        parent: Option<&MemoryElement>,
    ) -> MemoryElement {
        self.add_tagged("div", id, classes, parent)
    }

    pub fn add_tagged(
        &self,
        tag: &str,
        id: Option<&str>,
        classes: &[&str],
        parent: Option<&MemoryElement>,
    ) -> MemoryElement {
        let element = MemoryElement::new(tag, id, classes);
        if let Some(parent) = parent {
            parent.0.children.borrow_mut().push(element.clone());
        }
        self.elements.borrow_mut().push(element.clone());
        element
    }

    /// Layout of the auction site's base template with `links` nav links.
    ///
    /// The logo label starts hidden and the first link starts active.
    pub fn base_template(links: usize) -> Self {
        Self::template(&SidebarConfig::default(), links, &[])
    }

    /// Base template laid out with the ids and classes of `config`,
    /// leaving out the elements of every role in `omit`.
    pub fn template(config: &SidebarConfig, links: usize, omit: &[Role]) -> Self {
        let page = Self::new();
        let keep = |role: Role| !omit.contains(&role);

        let body = keep(Role::BodyRegion)
            .then(|| page.add_tagged("body", Some(config.body_id.as_str()), &[], None));
        let header = keep(Role::HeaderRegion).then(|| {
            page.add_tagged(
                "header",
                Some(config.header_id.as_str()),
                &["header"],
                body.as_ref(),
            )
        });
        if keep(Role::ToggleControl) {
            let parent = header.as_ref().or(body.as_ref());
            let wrap = page.add_element(None, &["header_toggle"], parent);
            page.add_tagged(
                "i",
                Some(config.toggle_id.as_str()),
                &["fas", "fa-bars"],
                Some(&wrap),
            );
        }

        let nav_bar = keep(Role::NavPanel).then(|| {
            page.add_element(Some(config.nav_id.as_str()), &["l-navbar"], body.as_ref())
        });
        let nav = page.add_tagged("nav", None, &["nav"], nav_bar.as_ref().or(body.as_ref()));
        if keep(Role::NavLogoLabel) {
            page.add_tagged(
                "span",
                None,
                &[config.logo_class.as_str(), config.classes.logo_hidden.as_str()],
                Some(&nav),
            );
        }
        let list = page.add_element(None, &[NAV_LIST_CLASS], Some(&nav));
        for i in 0..links {
            let link = page.add_tagged("a", None, &[config.link_class.as_str()], Some(&list));
            if i == 0 {
                link.add_class(&config.classes.active);
            }
        }
        page
    }

    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }
}

impl Page for MemoryPage {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements
            .borrow()
            .iter()
            .find(|e| e.id() == Some(id))
            .cloned()
    }

    fn query_descendant(&self, parent: &MemoryElement, class: &str) -> Option<MemoryElement> {
        parent.find_descendant(class)
    }

    fn elements_by_class(&self, class: &str) -> Vec<MemoryElement> {
        self.elements
            .borrow()
            .iter()
            .filter(|e| e.has_class(class))
            .cloned()
            .collect()
    }
}
