//! Browser environment helpers

/// Origin of the page (`scheme://host:port`), when running in a browser
#[cfg(target_arch = "wasm32")]
pub fn browser_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn browser_origin() -> Option<String> {
    None
}
