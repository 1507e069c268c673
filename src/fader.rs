//! Scroll-driven section fade and hero exit, plus the optional
//! snap-to-section.
//!
//! Scroll events only arm a [`FrameGate`]; the weights are computed once per
//! animation frame. The snap waits for scrolling to settle via [`Debounce`]
//! and a `gloo_timers` timeout that is replaced on every scroll.

use crate::constants::*;
use crate::dom;
use crate::style;
use folio_core::{
    hero_progress, snap_target, weights, Debounce, FaderConfig, FrameGate, HeroStyle, Rect,
    SECTION_IDS,
};
use gloo_timers::callback::Timeout;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct SectionFader {
    document: web::Document,
    config: FaderConfig,
    gate: FrameGate,
    snap: Debounce,
    snap_timer: Option<Timeout>,
    frame_cb: Option<Closure<dyn FnMut()>>,
}

fn read_config(document: &web::Document) -> FaderConfig {
    let defaults = FaderConfig::default();
    let Some(main) = document.query_selector(MAIN_SELECTOR).ok().flatten() else {
        return defaults;
    };
    let radius = main.get_attribute(ATTR_FADE_RADIUS);
    let snap = main.get_attribute(ATTR_SNAP);
    match defaults
        .clone()
        .with_overrides(radius.as_deref(), snap.as_deref())
    {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[fader] ignoring <main> overrides: {}", e);
            defaults
        }
    }
}

impl SectionFader {
    /// Section elements in page order; unmounted ids stay as `None`.
    fn sections(&self) -> Vec<Option<web::HtmlElement>> {
        SECTION_IDS
            .iter()
            .map(|id| {
                self.document
                    .get_element_by_id(id)
                    .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            })
            .collect()
    }

    fn rects(sections: &[Option<web::HtmlElement>]) -> Vec<Option<Rect>> {
        sections
            .iter()
            .map(|s| s.as_ref().and_then(|el| dom::rect_of(el)))
            .collect()
    }

    pub fn apply(&self) {
        let sections = self.sections();
        let ws = weights(&Self::rects(&sections), dom::viewport(), &self.config);
        for (el, w) in sections.iter().zip(ws) {
            if let Some(el) = el {
                dom::apply_style(el, &style::fade_declarations(w, FADE_TRANSLATE_PX));
            }
        }
        self.apply_hero();
    }

    /// Progress comes from the hero section; the effect lands on its inner
    /// block so it composes with the section fade.
    fn apply_hero(&self) {
        let Some(section) = self.document.get_element_by_id(HERO_SECTION_ID) else {
            return;
        };
        let Some(content) = section
            .query_selector(HERO_CONTENT_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        else {
            return;
        };
        let Some(rect) = dom::rect_of(&section) else {
            return;
        };
        let h = HeroStyle::at(hero_progress(rect));
        dom::apply_style(&content, &style::hero_declarations(&h));
    }

    fn on_scroll(&mut self, weak: &Weak<RefCell<SectionFader>>) {
        if self.gate.request() {
            if let (Some(w), Some(cb)) = (web::window(), self.frame_cb.as_ref()) {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            } else {
                self.gate.take();
            }
        }
        if self.config.snap {
            self.arm_snap(weak.clone());
        }
    }

    fn arm_snap(&mut self, weak: Weak<RefCell<SectionFader>>) {
        self.snap.touch(Instant::now());
        let delay = self.snap.delay().as_millis() as u32;
        // replacing the handle drops (and clears) the previous timeout
        self.snap_timer = Some(Timeout::new(delay, move || {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let Ok(mut f) = shared.try_borrow_mut() else {
                return;
            };
            if f.snap.fire() {
                f.snap_now();
            }
        }));
    }

    fn snap_now(&self) {
        let sections = self.sections();
        let target = snap_target(&Self::rects(&sections), dom::viewport(), dom::scroll_y());
        if let Some(t) = target {
            log::debug!("[fader] snap to #{} at {:.0}", SECTION_IDS[t.index], t.scroll_y);
            dom::smooth_scroll_to(t.scroll_y);
        }
    }
}

pub fn wire_fader(document: &web::Document) -> Rc<RefCell<SectionFader>> {
    let config = read_config(document);
    log::info!(
        "[fader] radius={:.2}vh snap={}",
        config.radius_fraction,
        config.snap
    );
    let fader = Rc::new(RefCell::new(SectionFader {
        document: document.clone(),
        snap: Debounce::new(config.snap_delay),
        config,
        gate: FrameGate::default(),
        snap_timer: None,
        frame_cb: None,
    }));

    let weak = Rc::downgrade(&fader);
    let frame_cb = Closure::wrap(Box::new(move || {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let mut f = shared.borrow_mut();
        if f.gate.take() {
            f.apply();
        }
    }) as Box<dyn FnMut()>);
    fader.borrow_mut().frame_cb = Some(frame_cb);

    if let Some(window) = web::window() {
        let fader_resize = fader.clone();
        dom::listen_forever(&window, "resize", move |_: web::Event| {
            fader_resize.borrow().apply();
        });
        let fader_scroll = fader.clone();
        let weak = Rc::downgrade(&fader);
        dom::listen_forever(&window, "scroll", move |_: web::Event| {
            fader_scroll.borrow_mut().on_scroll(&weak);
        });
    }
    fader.borrow().apply();
    fader
}
