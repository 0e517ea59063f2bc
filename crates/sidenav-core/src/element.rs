//! Element and page abstractions the controller operates on
//!
//! Implemented by the browser binding (`sidenav-web`) and by [`crate::memory`].

/// Click listener receiving the clicked element explicitly
pub type ClickListener<E> = Box<dyn Fn(&E)>;

/// Handle onto one page element
///
/// Handles are cheap to clone and share the underlying element, so class
/// mutations go through `&self`.
pub trait ElementHandle: Clone + 'static {
    fn has_class(&self, class: &str) -> bool;

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    /// Flip `class` and return whether it is now applied
    fn toggle_class(&self, class: &str) -> bool;

    /// Identity comparison (two handles onto the same element)
    fn same_element(&self, other: &Self) -> bool;

    /// Register a listener for clicks on this element
    fn add_click_listener(&self, listener: ClickListener<Self>);
}

/// Lookup surface of a page
pub trait Page {
    type Element: ElementHandle;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// First descendant of `parent` carrying `class`
    fn query_descendant(&self, parent: &Self::Element, class: &str) -> Option<Self::Element>;

    /// Every element carrying `class`, in document order
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;
}
