// Host-side tests for the inline style builders.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use folio_core::{place, ArrowSide, PopoverConfig, Size, Target, Viewport};
use glam::Vec2;
use style::*;

fn get<'a>(d: &'a Declarations, prop: &str) -> Option<&'a str> {
    d.iter().find(|(p, _)| *p == prop).map(|(_, v)| v.as_str())
}

#[test]
fn anchored_panel_renders_fixed_position_and_transform() {
    let cfg = PopoverConfig::default();
    let p = place(
        &Target::Anchor(Vec2::new(500.0, 700.0)),
        Viewport::new(800.0, 1000.0),
        Size::new(400.0, 300.0),
        &cfg,
    );
    let d = panel_declarations(&p);
    assert_eq!(get(&d, "position"), Some("fixed"));
    assert_eq!(get(&d, "left"), Some("500.0px"));
    assert_eq!(get(&d, "top"), Some("686.0px"));
    assert_eq!(get(&d, "transform"), Some("translate(-50%, -100%)"));
    assert_eq!(get(&d, "visibility"), Some("visible"));
    assert_eq!(get(&d, "width"), Some("auto"));
    assert_eq!(get(&d, "max-height"), Some("none"));
}

#[test]
fn modal_panel_gets_fixed_width_and_scrolls() {
    let cfg = PopoverConfig::default();
    let p = place(
        &Target::Anchor(Vec2::new(100.0, 100.0)),
        Viewport::new(375.0, 800.0),
        Size::new(300.0, 900.0),
        &cfg,
    );
    let d = panel_declarations(&p);
    assert_eq!(get(&d, "left"), Some("187.5px"));
    assert_eq!(get(&d, "width"), Some("343.0px"));
    assert_eq!(get(&d, "max-height"), Some("700.0px"));
    assert_eq!(get(&d, "overflow-y"), Some("auto"));
    assert_eq!(get(&d, "transform"), Some("translate(-50%, -50%)"));
}

#[test]
fn measuring_keeps_panel_invisible_but_width_capped() {
    let d = measuring_declarations(560.0);
    assert_eq!(get(&d, "visibility"), Some("hidden"));
    assert_eq!(get(&d, "max-width"), Some("560.0px"));
    assert_eq!(get(&d, "transform"), Some("none"));
}

#[test]
fn arrow_sits_on_the_side_facing_the_anchor() {
    assert_eq!(get(&arrow_declarations(None, 6.0), "display"), Some("none"));
    let top = arrow_declarations(Some(ArrowSide::Top), 6.0);
    assert_eq!(get(&top, "top"), Some("-6.0px"));
    assert_eq!(get(&top, "bottom"), Some("auto"));
    let bottom = arrow_declarations(Some(ArrowSide::Bottom), 6.0);
    assert_eq!(get(&bottom, "bottom"), Some("-6.0px"));
}

#[test]
fn fade_is_opaque_at_center_and_nudged_when_faded() {
    let on = fade_declarations(1.0, 24.0);
    assert_eq!(get(&on, "opacity"), Some("1.000"));
    assert_eq!(get(&on, "transform"), Some("translateY(0.0px)"));

    let off = fade_declarations(0.0, 24.0);
    assert_eq!(get(&off, "opacity"), Some("0.000"));
    assert_eq!(get(&off, "transform"), Some("translateY(24.0px)"));

    // out-of-range weights are clamped
    assert_eq!(get(&fade_declarations(1.7, 24.0), "opacity"), Some("1.000"));
    assert_eq!(get(&fade_declarations(-0.2, 24.0), "opacity"), Some("0.000"));
}

#[test]
fn hero_renders_sweep_scale_and_blur() {
    let start = hero_declarations(&folio_core::HeroStyle::at(0.0));
    assert_eq!(get(&start, "opacity"), Some("1.000"));
    assert_eq!(get(&start, "transform"), Some("translateX(0.0px) scale(1.000)"));
    assert_eq!(get(&start, "filter"), Some("blur(0.00px)"));

    let end = hero_declarations(&folio_core::HeroStyle::at(1.0));
    assert_eq!(get(&end, "opacity"), Some("0.000"));
    assert_eq!(get(&end, "transform"), Some("translateX(-180.0px) scale(0.980)"));
    assert_eq!(get(&end, "filter"), Some("blur(6.00px)"));
}
