pub mod error;
pub mod frontend;
pub mod routes;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod web;

/// Browser entry point. The base path is fixed when the bundle is built.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use frontend::app::App;
    use leptos::view;
    use std::sync::Arc;

    tracing_wasm::set_as_global_default();

    let base_path = option_env!("BASE_URL").unwrap_or_default();
    match frontend::routes::build(base_path) {
        Ok(router) => {
            let router = Arc::new(router);
            leptos::mount::mount_to_body(move || {
                view! { <App router=router/> }
            });
        }
        Err(e) => tracing::error!("Failed to build router: {}", e),
    }
}
