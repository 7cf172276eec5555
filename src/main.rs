mod api;
mod app;
mod config;
mod markup;
mod model;
mod nav;
mod store;
mod view;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warnings) = Config::load();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("logger already initialised: {e}").into());
    }
    for warning in warnings {
        log::warn!("{warning}");
    }

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> })
}
