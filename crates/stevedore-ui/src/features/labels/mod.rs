//! Label list editing for the deploy form.
//!
//! # Design
//! - Keep list shape, key validation, and rendering in one feature slice.
//! - State and logic stay wasm-free so the rules test natively.
//! - Validity travels as returned result objects, never a shared registry.

pub mod actions;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
