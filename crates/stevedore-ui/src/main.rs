#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Stevedore UI wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() {
    stevedore_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "stevedore-ui targets wasm32; build with `trunk build` or `cargo build --target wasm32-unknown-unknown`."
    );
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::main;

    #[test]
    fn native_stub_runs() {
        // The native binary only prints a redirect message.
        main();
    }
}
