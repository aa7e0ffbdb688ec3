//! Showcase Frontend Entry Point

use leptos::prelude::*;
use showcase_ui::app::App;
use showcase_ui::config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(e) = console_logger::init(config.level_filter()) {
        web_sys::console::warn_1(&format!("[APP] logger already installed: {}", e).into());
    }
    log::info!("[APP] starting with page size {}", config.page_size);

    mount_to_body(move || view! { <App config=config /> });
}
