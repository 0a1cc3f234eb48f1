use std::rc::Rc;

use wasm_bindgen::prelude::*;

pub mod app;
pub mod chat;
pub mod components;
pub mod config;
pub mod disclosure;
pub mod logging;
pub mod seed;
pub mod types;

use app::{App, AppProps};
use config::Config;
use seed::Seed;

#[wasm_bindgen(start)]
pub fn run_app() -> Result<(), JsValue> {
    let config = Config::from_env();
    logging::init(config.log_level);

    let seed = Seed::load().map_err(|e| {
        tracing::error!("Failed to parse bundled seed data: {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    let window = web_sys::window().ok_or("window not available")?;
    let document = window.document().ok_or("document not available")?;
    let root = document
        .get_element_by_id("root")
        .ok_or("missing #root element")?;

    tracing::info!(
        cards = seed.cards.len(),
        messages = seed.messages.len(),
        reply_delay_ms = config.reply_delay_ms,
        "mounting app"
    );
    let props = AppProps {
        seed: Rc::new(seed),
        config,
    };
    yew::Renderer::<App>::with_root_and_props(root, props).render();
    Ok(())
}
