use crate::constants::*;
use crate::dom;
use folio_core::{scroll_target, MobileMenu};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Header navigation: smooth-scroll links and the collapsible mobile menu.
pub struct NavState {
    menu: MobileMenu,
    toggle: Option<web::Element>,
    panel: Option<web::Element>,
}

impl NavState {
    fn render(&self) {
        let open = self.menu.is_open();
        if let Some(panel) = &self.panel {
            _ = panel.class_list().toggle_with_force(HIDDEN_CLASS, !open);
        }
        if let Some(toggle) = &self.toggle {
            _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
        }
    }

    pub fn toggle_menu(&mut self) {
        let open = self.menu.toggle();
        log::debug!("[nav] menu open={}", open);
        self.render();
    }

    pub fn close_menu(&mut self) {
        if self.menu.is_open() {
            self.menu.close();
            self.render();
        }
    }
}

fn scroll_to_section(document: &web::Document, id: &str) {
    let Some(section) = document.get_element_by_id(id) else {
        log::warn!("[nav] no section #{}", id);
        return;
    };
    if let Some(rect) = dom::rect_of(&section) {
        dom::smooth_scroll_to(scroll_target(rect.top, dom::scroll_y()));
    }
}

pub fn wire_nav(document: &web::Document) -> Rc<RefCell<NavState>> {
    let nav = Rc::new(RefCell::new(NavState {
        menu: MobileMenu::default(),
        toggle: document.get_element_by_id(MENU_TOGGLE_ID),
        panel: document.get_element_by_id(MOBILE_MENU_ID),
    }));
    nav.borrow().render();

    let nav_toggle = nav.clone();
    dom::add_click_listener(document, MENU_TOGGLE_ID, move |_| {
        nav_toggle.borrow_mut().toggle_menu();
    });

    let links = document
        .document_element()
        .map(|root| dom::elements(&root, NAV_LINK_SELECTOR))
        .unwrap_or_default();
    for link in &links {
        let Some(target) = link.get_attribute(ATTR_NAV).filter(|t| !t.is_empty()) else {
            continue;
        };
        let (doc, nav_link) = (document.clone(), nav.clone());
        dom::listen_forever(link, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            nav_link.borrow_mut().close_menu();
            scroll_to_section(&doc, &target);
        });
    }
    log::info!("[nav] {} links wired", links.len());
    nav
}
