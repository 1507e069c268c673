use crate::style::Declarations;
use folio_core::{Rect, Size, Viewport};
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        listen_forever(&el, "click", handler);
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

/// Page-lifetime listener; the closure is leaked on purpose.
pub fn listen_forever<E>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn elements(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Current viewport snapshot. Falls back to 1024x768 when the window
/// reports nothing usable.
pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::new(1024.0, 768.0);
    };
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, fallback: f32| {
        v.ok()
            .and_then(|v| v.as_f64())
            .filter(|v| *v > 0.0)
            .map_or(fallback, |v| v as f32)
    };
    Viewport::new(read(w.inner_width(), 1024.0), read(w.inner_height(), 768.0))
}

#[inline]
pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Viewport-relative rect of a mounted element; `None` when detached.
pub fn rect_of(el: &web::Element) -> Option<Rect> {
    if !el.is_connected() {
        return None;
    }
    let r = el.get_bounding_client_rect();
    Some(Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    ))
}

pub fn measure(el: &web::HtmlElement) -> Option<Size> {
    let (w, h) = (el.offset_width(), el.offset_height());
    if !el.is_connected() || (w == 0 && h == 0) {
        return None;
    }
    Some(Size::new(w as f32, h as f32))
}

pub fn apply_style(el: &web::HtmlElement, decls: &Declarations) {
    let style = el.style();
    for (prop, value) in decls {
        if let Err(e) = style.set_property(prop, value) {
            log::warn!("[dom] set {}: {:?}", prop, e);
        }
    }
}

pub fn smooth_scroll_to(y: f32) {
    if let Some(w) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(y as f64);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Event listeners acquired together and released together.
///
/// Dropping the scope (or calling [`ListenerScope::release`]) removes every
/// listener it added, so nothing fires on a panel that is no longer shown.
#[derive(Default)]
pub struct ListenerScope {
    entries: Vec<Entry>,
}

struct Entry {
    target: web::EventTarget,
    event: &'static str,
    capture: bool,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener for events of concrete type `E`. With `capture` set the
    /// listener sees events from nested scrollable regions before they bubble.
    pub fn listen<E>(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        capture: bool,
        mut handler: impl FnMut(E) + 'static,
    ) where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        if let Err(e) = target.add_event_listener_with_callback_and_bool(
            event,
            closure.as_ref().unchecked_ref(),
            capture,
        ) {
            log::error!("[dom] add {} listener: {:?}", event, e);
            return;
        }
        self.entries.push(Entry {
            target: target.clone(),
            event,
            capture,
            closure,
        });
    }

    pub fn release(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let entries = std::mem::take(&mut self.entries);
        for e in &entries {
            _ = e.target.remove_event_listener_with_callback_and_bool(
                e.event,
                e.closure.as_ref().unchecked_ref(),
                e.capture,
            );
        }
        // Release is usually triggered from inside one of these closures;
        // free them on the next tick, after the current callback returns.
        Timeout::new(0, move || drop(entries)).forget();
    }
}

impl Drop for ListenerScope {
    fn drop(&mut self) {
        self.release();
    }
}
