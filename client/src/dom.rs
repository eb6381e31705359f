use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlButtonElement};

use instancer_shared::{ActionKind, ChallengeId};

pub const ALERT_BANNER_ID: &str = "alert-banner";
pub const ALERT_CLOSE_CLASS: &str = "alert-banner-close";
pub const LOGOUT_BUTTON_ID: &str = "logout_button";
pub const CONNECT_BUTTON_CLASS: &str = "connect_button";
const CHALLENGE_ID_ATTR: &str = "data-challenge-id";

const SPINNER_HTML: &str = r#"<span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span>
Loading..."#;

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Snapshot of a live `HTMLCollection`.
pub fn elements_by_class(document: &Document, class: &str) -> Vec<Element> {
    let collection = document.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

pub fn challenge_id_of(el: &Element) -> Option<ChallengeId> {
    ChallengeId::resolve(el.get_attribute(CHALLENGE_ID_ATTR).as_deref(), &el.id())
}

/// Register a click listener that lives as long as the page.
pub fn on_click(target: &EventTarget, handler: impl Fn(Event) + 'static) {
    let closure = Closure::<dyn Fn(Event)>::new(handler);
    if target
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::warn_1(&"failed to register click listener".into());
    }
    closure.forget();
}

fn set_disabled(el: &Element, disabled: bool) {
    if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if disabled {
        let _ = el.set_attribute("disabled", "");
    } else {
        let _ = el.remove_attribute("disabled");
    }
}

/// Reflected for `<button>`, set by hand for anything else.
pub fn is_disabled(el: &Element) -> bool {
    el.has_attribute("disabled")
}

pub fn set_loading(button: &Element) {
    set_disabled(button, true);
    button.set_inner_html(SPINNER_HTML);
}

pub fn restore_button(button: &Element, kind: ActionKind) {
    set_disabled(button, false);
    button.set_text_content(Some(kind.label()));
}

pub fn show_alert() {
    let Some(banner) = document().and_then(|d| d.get_element_by_id(ALERT_BANNER_ID)) else {
        return;
    };
    let classes = banner.class_list();
    let _ = classes.remove_1("d-none");
    let _ = classes.add_1("show");
}

pub fn hide_alert() {
    let Some(banner) = document().and_then(|d| d.get_element_by_id(ALERT_BANNER_ID)) else {
        return;
    };
    let classes = banner.class_list();
    let _ = classes.add_1("d-none");
    let _ = classes.remove_1("show");
}

pub fn navigate(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(href) {
        web_sys::console::warn_1(&format!("navigation to {href} failed: {e:?}").into());
    }
}

pub fn reload() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().reload() {
        web_sys::console::warn_1(&format!("reload failed: {e:?}").into());
    }
}
