//! CSR entry point. Trunk builds this binary for `wasm32-unknown-unknown`
//! with the `csr` feature; on other targets it is a no-op shell so the crate
//! still builds and tests natively.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(classpulse::app::App);
    }
}
