//! Stevedore wasm entry point.
//!
//! # Design
//! - Keep the root component minimal; the deploy page owns all state.
//! - Mount onto `#root` when present, with a body fallback for bare hosts.

use crate::features::deploy::view::DeployPage;
use yew::prelude::*;

#[function_component(StevedoreApp)]
fn stevedore_app() -> Html {
    html! {
        <main class="app-shell">
            <DeployPage />
        </main>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<StevedoreApp>::with_root(root).render();
    } else {
        yew::Renderer::<StevedoreApp>::new().render();
    }
}
