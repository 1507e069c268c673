// Placement and fade values rendered as inline CSS declarations.
// Pure string building so the host tests can include this file directly.

use folio_core::{ArrowSide, HeroStyle, Layout, Placement};

pub type Declarations = Vec<(&'static str, String)>;

#[inline]
fn px(v: f32) -> String {
    format!("{:.1}px", v)
}

pub fn panel_declarations(p: &Placement) -> Declarations {
    let mut d = vec![
        ("position", "fixed".to_string()),
        ("left", px(p.left)),
        ("top", px(p.top)),
        ("transform", p.transform.css().to_string()),
        ("max-width", px(p.max_width)),
        ("visibility", "visible".to_string()),
    ];
    match p.max_height {
        Some(h) => {
            d.push(("max-height", px(h)));
            d.push(("overflow-y", "auto".to_string()));
        }
        None => {
            d.push(("max-height", "none".to_string()));
            d.push(("overflow-y", "visible".to_string()));
        }
    }
    if p.layout == Layout::Modal {
        d.push(("width", px(p.max_width)));
    } else {
        d.push(("width", "auto".to_string()));
    }
    d
}

/// Styles for mounting the panel off-screen so it can be measured.
pub fn measuring_declarations(max_width: f32) -> Declarations {
    vec![
        ("position", "fixed".to_string()),
        ("left", "0px".to_string()),
        ("top", "0px".to_string()),
        ("transform", "none".to_string()),
        ("max-width", px(max_width)),
        ("visibility", "hidden".to_string()),
    ]
}

pub fn arrow_declarations(side: Option<ArrowSide>, inset: f32) -> Declarations {
    match side {
        None => vec![("display", "none".to_string())],
        Some(ArrowSide::Top) => vec![
            ("display", "block".to_string()),
            ("top", px(-inset)),
            ("bottom", "auto".to_string()),
        ],
        Some(ArrowSide::Bottom) => vec![
            ("display", "block".to_string()),
            ("top", "auto".to_string()),
            ("bottom", px(-inset)),
        ],
    }
}

/// Section reveal: fully visible at weight 1, faded and nudged down at 0.
pub fn fade_declarations(weight: f32, translate_px: f32) -> Declarations {
    let w = weight.clamp(0.0, 1.0);
    vec![
        ("opacity", format!("{:.3}", w)),
        ("transform", format!("translateY({:.1}px)", (1.0 - w) * translate_px)),
    ]
}

pub fn hero_declarations(h: &HeroStyle) -> Declarations {
    vec![
        ("opacity", format!("{:.3}", h.opacity)),
        (
            "transform",
            format!("translateX({:.1}px) scale({:.3})", h.translate_x, h.scale),
        ),
        ("filter", format!("blur({:.2}px)", h.blur_px)),
    ]
}
