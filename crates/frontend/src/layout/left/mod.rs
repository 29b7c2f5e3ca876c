pub mod sidebar;

use crate::layout::nav_context::NavContext;
use leptos::prelude::*;

/// Sidebar container.
///
/// Static column on wide viewports; on narrow viewports the same panel
/// slides in as an overlay controlled by `nav.sidebar_open`. Clicking the
/// dimmed backdrop dismisses it (outside dismissal).
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let nav = leptos::context::use_context::<NavContext>().expect("NavContext not found");

    view! {
        <Show when=move || nav.sidebar_open.get()>
            <div class="app-backdrop" on:click=move |_| nav.close_sidebar()></div>
        </Show>

        <aside
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--open=move || nav.sidebar_open.get()
        >
            {children()}
        </aside>
    }
}
