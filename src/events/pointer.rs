use glam::Vec2;
use web_sys as web;

#[inline]
pub fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// First touch point, if the event carries any.
#[inline]
pub fn touch_point(ev: &web::TouchEvent) -> Option<Vec2> {
    let t = ev.touches().get(0)?;
    Some(Vec2::new(t.client_x() as f32, t.client_y() as f32))
}
