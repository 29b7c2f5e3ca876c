use contracts::enums::view_key::DEFAULT_VIEW_KEY;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::shared::viewport::is_narrow_viewport;

/// Application-wide navigation store, provided once via context.
///
/// `selection` holds the raw Selection key exactly as written. Writes are
/// permissive and unvalidated; membership in the known key set is checked
/// only when the view registry resolves the key. This keeps adding a new
/// view a registry-only change.
///
/// `sidebar_open` is the overlay panel flag, independent of the selection.
#[derive(Clone, Copy)]
pub struct NavContext {
    pub selection: RwSignal<String>,
    pub sidebar_open: RwSignal<bool>,
}

impl NavContext {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(DEFAULT_VIEW_KEY.to_string()),
            sidebar_open: RwSignal::new(false),
        }
    }

    /// Permissive write: any string is accepted. Unknown keys resolve to the
    /// placeholder view at render time, never to an error.
    pub fn set_selection(&self, key: &str) {
        leptos::logging::log!("select view: '{}'", key);
        self.selection.set(key.to_string());
    }

    /// Selection made from a navigation surface. On narrow viewports the
    /// overlay panel is dismissed afterwards, regardless of its prior state.
    pub fn select_from_nav(&self, key: &str) {
        self.set_selection(key);
        if is_narrow_viewport() {
            self.sidebar_open.set(false);
        }
    }

    pub fn open_sidebar(&self) {
        self.sidebar_open.set(true);
    }

    pub fn close_sidebar(&self) {
        self.sidebar_open.set(false);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    /// Deep-link integration: seed the selection from `?view=...` once, then
    /// mirror every selection change back into the URL. Nothing else about
    /// the navigation state survives a reload.
    pub fn init_deep_link(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(key) = params.get("view") {
            self.set_selection(key);
        }

        let this = *self;
        Effect::new(move |_| {
            let key = this.selection.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("view".to_string(), key)]))
                    .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            // Use untracked reads of the location to avoid reactive loops
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update the URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for NavContext {
    fn default() -> Self {
        Self::new()
    }
}
