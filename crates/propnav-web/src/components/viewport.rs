//! Viewport width signal

use leptos::ev;
use leptos::prelude::*;

/// Window inner width, updated on resize.
///
/// Starts at `initial` and reads the real width once mounted in the browser.
pub fn use_viewport_width(initial: u32) -> ReadSignal<u32> {
    let (width, set_width) = signal(initial);

    Effect::new(move |_| {
        if let Some(current) = current_width() {
            set_width.set(current);
        }

        let handle = window_event_listener(ev::resize, move |_| {
            if let Some(current) = current_width() {
                set_width.set(current);
            }
        });
        on_cleanup(move || handle.remove());
    });

    width
}

/// `None` outside a browser or when the width is not a number
fn current_width() -> Option<u32> {
    let window: web_sys::Window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    Some(width.max(0.0) as u32)
}
