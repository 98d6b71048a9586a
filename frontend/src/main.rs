//! Entry point for the WASM application

pub fn main() {
    recap_frontend::mount();
}
