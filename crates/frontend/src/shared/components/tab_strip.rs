//! View-local tab switch, the pattern every dashboard repeats.
//!
//! The active key lives in an `RwSignal<String>` owned by one mounted view
//! instance; it dies with the instance and never leaks across views. Writes
//! are permissive - any string is stored - and `resolve_tab` falls back to
//! the first tab at render time.

use leptos::prelude::*;

use crate::shared::icons::icon;

/// One tab of a strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Resolve a raw tab key against the strip's known keys. Total: unknown keys
/// fall back to the first tab.
pub fn resolve_tab(tabs: &'static [TabSpec], raw: &str) -> &'static str {
    tabs.iter()
        .find(|tab| tab.key == raw)
        .unwrap_or(&tabs[0])
        .key
}

#[component]
pub fn TabStrip(tabs: &'static [TabSpec], active: RwSignal<String>) -> impl IntoView {
    view! {
        <nav class="tab-strip">
            {tabs.iter().map(|tab| {
                let key = tab.key;
                view! {
                    <button
                        class="tab-strip__tab"
                        class:tab-strip__tab--active=move || resolve_tab(tabs, &active.get()) == key
                        on:click=move |_| active.set(key.to_string())
                    >
                        {icon(tab.icon)}
                        <span>{tab.label}</span>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABS: &[TabSpec] = &[
        TabSpec { key: "overview", label: "Overview", icon: "bar-chart" },
        TabSpec { key: "analytics", label: "Analytics Use Cases", icon: "brain" },
    ];

    #[test]
    fn test_known_keys_resolve_to_themselves() {
        assert_eq!(resolve_tab(TABS, "overview"), "overview");
        assert_eq!(resolve_tab(TABS, "analytics"), "analytics");
    }

    #[test]
    fn test_unknown_keys_fall_back_to_first_tab() {
        assert_eq!(resolve_tab(TABS, "prescriptive"), "overview");
        assert_eq!(resolve_tab(TABS, ""), "overview");
        assert_eq!(resolve_tab(TABS, "Overview"), "overview");
    }
}
