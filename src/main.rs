fn main() {
    #[cfg(target_arch = "wasm32")]
    gatekeeper_frontend::mount();
}
