use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::Callback;

use shared::is_mobile_user_agent;

/// Delay before the body fades to full opacity.
pub const FADE_IN_DELAY_MS: u32 = 100;

/// Intercept clicks on every in-page anchor (`a[href^="#"]`) and
/// smooth-scroll to the target's top edge if it exists.
///
/// The returned listeners keep the handlers wired; dropping them
/// unwires everything, so the caller decides the lifetime instead of
/// leaking page-wide listeners.
pub fn init_smooth_scroll(document: &Document) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    let Ok(anchors) = document.query_selector_all("a[href^='#']") else {
        return listeners;
    };

    for i in 0..anchors.length() {
        let Some(anchor) = anchors.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };

        let document = document.clone();
        listeners.push(EventListener::new(&anchor, "click", move |event| {
            event.prevent_default();
            if let Ok(Some(target)) = document.query_selector(&href) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }));
    }

    listeners
}

/// Route clicks on any `.btn` whose id is `logout` or that carries the
/// `logout-btn` class. Same handle contract as [`init_smooth_scroll`].
pub fn init_logout_buttons(document: &Document, on_logout: Callback<()>) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    let Ok(buttons) = document.query_selector_all(".btn") else {
        return listeners;
    };

    for i in 0..buttons.length() {
        let Some(button) = buttons.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if button.id() != "logout" && !button.class_list().contains("logout-btn") {
            continue;
        }

        let on_logout = on_logout.clone();
        listeners.push(EventListener::new(&button, "click", move |event| {
            event.prevent_default();
            on_logout.emit(());
        }));
    }

    listeners
}

/// Fade the page in: start transparent, enable the 0.5s ease
/// transition, then flip opacity after a short delay.
pub fn run_fade_in(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };

    let style = body.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transition", "opacity 0.5s ease");

    spawn_local(async move {
        TimeoutFuture::new(FADE_IN_DELAY_MS).await;
        let _ = style.set_property("opacity", "1");
    });
}

/// Tag the body with `mobile-device` when the user agent looks mobile,
/// as a styling hook. No-op on desktop agents.
pub fn apply_device_class(document: &Document, user_agent: &str) {
    if !is_mobile_user_agent(user_agent) {
        return;
    }
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1("mobile-device");
    }
}
