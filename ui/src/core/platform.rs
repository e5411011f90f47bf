//! Platform glue: spawning UI-thread futures and reading host viewport facts.

use std::future::Future;

#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}

/// Current viewport width in CSS pixels, if the host exposes one.
#[cfg(target_arch = "wasm32")]
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_width() -> Option<f64> {
    None
}

/// Keeps a window `resize` listener registered until dropped.
pub struct ResizeListener {
    #[cfg(target_arch = "wasm32")]
    callback: wasm_bindgen::closure::Closure<dyn FnMut()>,
}

/// Call `on_resize` whenever the host window resizes. Hosts without a
/// resizable viewport get `None`.
#[cfg(target_arch = "wasm32")]
pub fn on_resize(on_resize: impl FnMut() + 'static) -> Option<ResizeListener> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window()?;
    let callback = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(on_resize);
    window
        .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
        .ok()?;
    Some(ResizeListener { callback })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn on_resize(on_resize: impl FnMut() + 'static) -> Option<ResizeListener> {
    let _ = on_resize;
    None
}

#[cfg(target_arch = "wasm32")]
impl Drop for ResizeListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}
