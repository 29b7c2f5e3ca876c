pub mod header;
pub mod left;
pub mod nav_context;

use leptos::prelude::*;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content              |
/// |   (Left)  |         (Center)              |
/// +------------------------------------------+
/// ```
///
/// On narrow viewports the sidebar becomes a dismissable overlay panel; the
/// `Left` container owns that behavior.
#[component]
pub fn Shell<H, L, C>(header: H, left: L, center: C) -> impl IntoView
where
    H: Fn() -> AnyView + 'static + Send,
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            {header()}

            <div class="app-body">
                // Left sidebar - uses nav.sidebar_open for overlay visibility
                <left::Left>
                    {left()}
                </left::Left>

                // Main content area - hosts the resolved view
                <main data-zone="center" class="app-main" style="flex: 1; overflow: auto;">
                    {center()}
                </main>
            </div>
        </div>
    }
}
