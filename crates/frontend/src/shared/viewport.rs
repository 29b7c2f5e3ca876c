use web_sys::window;

/// Widths below this use the small-viewport layout, where the sidebar
/// behaves as a dismissable overlay.
pub const NARROW_VIEWPORT_MAX_PX: f64 = 1024.0;

/// True when the current window width is below the overlay threshold.
/// Outside a browser context this reports false (wide layout).
pub fn is_narrow_viewport() -> bool {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|width| width < NARROW_VIEWPORT_MAX_PX)
        .unwrap_or(false)
}
