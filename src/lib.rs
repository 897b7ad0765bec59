#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod aspect;
pub mod catalog;
pub mod contact;
pub mod section;
pub mod work_state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
