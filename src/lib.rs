#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod cards;
mod constants;
mod contact;
mod dom;
mod events;
mod fader;
mod nav;
mod overlay;
mod shared;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let nav = nav::wire_nav(&document);
    events::keyboard::wire_menu_escape(nav);

    // Fader state lives for the page; its listeners hold the Rc.
    _ = fader::wire_fader(&document);

    let grids = cards::wire_card_grids(&document)?;
    log::info!("[hover] {} card grids wired", grids);

    contact::wire_contact(&document)?;
    Ok(())
}
