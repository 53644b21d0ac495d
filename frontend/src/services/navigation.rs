use anyhow::{anyhow, Result};
use wasm_bindgen::JsValue;

/// Open `url` in a new browsing context. Fire-and-forget: nothing is awaited.
pub fn open_in_new_context(url: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no browser window available"))?;

    let opened = window
        .open_with_url_and_target(url, "_blank")
        .map_err(|e: JsValue| anyhow!("window.open failed: {:?}", e))?;

    if opened.is_none() {
        return Err(anyhow!("new window was blocked by the browser"));
    }

    Ok(())
}
