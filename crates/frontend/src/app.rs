use crate::app_shell::AppShell;
use crate::layout::nav_context::NavContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the NavContext store to the whole app via context.
    provide_context(NavContext::new());

    view! {
        <AppShell />
    }
}
