//! Deploy form feature wiring.

#[cfg(target_arch = "wasm32")]
pub mod view;
