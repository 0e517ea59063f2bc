//! web-sys implementation of the core element and page traits

use sidenav_core::{ClickListener, ElementHandle, Page, SidebarConfig, SidebarError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Node};

/// Id of the optional `<script type="application/json">` holding a config
pub const CONFIG_ELEMENT_ID: &str = "sidenav-config";

pub(crate) fn dom_error(err: JsValue) -> SidebarError {
    SidebarError::Dom {
        message: err.as_string().unwrap_or_else(|| format!("{err:?}")),
    }
}

fn warn_class_op(op: &str, class: &str, err: &JsValue) {
    web_sys::console::warn_2(
        &JsValue::from_str(&format!("sidenav: classList.{op}({class:?}) failed")),
        err,
    );
}

/// Live DOM element
#[derive(Debug, Clone)]
pub struct WebElement(Element);

impl WebElement {
    pub fn new(element: Element) -> Self {
        Self(element)
    }
}

impl ElementHandle for WebElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            warn_class_op("add", class, &err);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            warn_class_op("remove", class, &err);
        }
    }

    fn toggle_class(&self, class: &str) -> bool {
        match self.0.class_list().toggle(class) {
            Ok(applied) => applied,
            Err(err) => {
                warn_class_op("toggle", class, &err);
                self.has_class(class)
            }
        }
    }

    fn same_element(&self, other: &Self) -> bool {
        let node: &Node = &other.0;
        self.0.is_same_node(Some(node))
    }

    fn add_click_listener(&self, listener: ClickListener<Self>) {
        let target = self.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| listener(&target));
        if let Err(err) = self
            .0
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            web_sys::console::warn_2(&JsValue::from_str("sidenav: addEventListener failed"), &err);
            return;
        }
        // Listeners live as long as the page
        closure.forget();
    }
}

/// The current document
pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Page of the global `window`
    pub fn current() -> Result<Self, SidebarError> {
        let window = web_sys::window().ok_or_else(|| SidebarError::Dom {
            message: "no global window".to_string(),
        })?;
        let document = window.document().ok_or_else(|| SidebarError::Dom {
            message: "window has no document".to_string(),
        })?;
        Ok(Self::new(document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// True until the element tree is fully parsed
    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }

    /// Config embedded in the page, or the defaults
    pub fn config(&self) -> SidebarConfig {
        let Some(json) = self
            .document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return SidebarConfig::default();
        };

        match SidebarConfig::from_json(&json) {
            Ok(config) => config,
            Err(err) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "sidenav: ignoring #{CONFIG_ELEMENT_ID}: {err}"
                )));
                SidebarConfig::default()
            }
        }
    }
}

impl Page for WebPage {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    // Classes are matched as tokens, not CSS selectors (`1col`, `nav.link` are valid)
    fn query_descendant(&self, parent: &WebElement, class: &str) -> Option<WebElement> {
        parent
            .0
            .get_elements_by_class_name(class)
            .item(0)
            .map(WebElement)
    }

    fn elements_by_class(&self, class: &str) -> Vec<WebElement> {
        let collection = self.document.get_elements_by_class_name(class);
        // The collection is live; the returned Vec is a snapshot
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .map(WebElement)
            .collect()
    }
}
