//! Category Order Frontend Entry Point

use category_order_ui::{activate, logging, BackendConfig};
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Debug);

    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        log::error!("[MAIN] no <body> to mount into");
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        let result = match BackendConfig::from_env() {
            Ok(config) => activate(body.clone(), config).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(page) => page.forget(),
            Err(err) => {
                log::error!("[MAIN] categories page failed to load: {}", err);
                body.set_text_content(Some(&format!("Failed to load categories: {}", err)));
            }
        }
    });
}
