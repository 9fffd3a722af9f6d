//! MicroSpotter Web App (Leptos + WASM)

pub mod app;
pub mod browser_storage;
pub mod components;

pub use components::login_form::LoginForm;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("MicroSpotter starting");
    leptos::mount::mount_to_body(app::App);
}
