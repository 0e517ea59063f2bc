//! sidenav-web - Browser binding for sidenav
//!
//! By default the WASM start function attaches the sidebar controller to a
//! server-rendered page once its element tree is parsed. With the `csr`
//! feature it mounts the Leptos [`App`] instead.

pub mod app;
pub mod components;
pub mod dom;

pub use app::App;
pub use dom::{WebElement, WebPage, CONFIG_ELEMENT_ID};

use sidenav_core::{InitReport, SidebarConfig, SidebarController, SidebarError};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

thread_local! {
    static CONTROLLER: RefCell<Option<SidebarController<WebElement>>> = const { RefCell::new(None) };
}

/// Bind the controller on `page` now and keep it for later registrations
pub fn attach(page: &WebPage, config: SidebarConfig) -> InitReport {
    let (controller, report) = SidebarController::initialize(page, config);
    for issue in &report.issues {
        web_sys::console::debug_1(&JsValue::from_str(&format!("sidenav: {}", issue.message)));
    }
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
    report
}

/// Attach on `DOMContentLoaded`, or immediately if the page is already parsed
pub fn attach_when_ready() -> Result<(), SidebarError> {
    let page = WebPage::current()?;
    if !page.is_loading() {
        let config = page.config();
        attach(&page, config);
        return Ok(());
    }

    let document = page.document().clone();
    let on_ready: Closure<dyn FnMut(Event)> = Closure::once(move |_event: Event| {
        let page = WebPage::new(document);
        let config = page.config();
        attach(&page, config);
    });
    page.document()
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(dom::dom_error)?;
    on_ready.forget();
    Ok(())
}

/// Track a navigation link inserted after the page was attached.
///
/// Returns false when nothing is attached yet or the link is already tracked.
#[wasm_bindgen]
pub fn register_nav_link(element: Element) -> bool {
    CONTROLLER.with(|slot| {
        slot.borrow()
            .as_ref()
            .is_some_and(|controller| controller.register_link(WebElement::new(element)))
    })
}

/// Click the sidebar toggle programmatically. Returns whether the nav is shown.
#[wasm_bindgen]
pub fn toggle_sidebar() -> bool {
    CONTROLLER.with(|slot| {
        slot.borrow()
            .as_ref()
            .and_then(|controller| controller.on_toggle_click())
            .is_some_and(|state| state.nav_shown)
    })
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "csr")]
    leptos::mount::mount_to_body(App);

    #[cfg(not(feature = "csr"))]
    if let Err(err) = attach_when_ready() {
        web_sys::console::warn_1(&JsValue::from_str(&format!("sidenav: {err}")));
    }
}
