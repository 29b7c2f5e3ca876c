//! Application shell - root layout composition.
//!
//! Contains:
//! - `AppShell` - main layout (Shell + Header + Sidebar + active view)

use crate::layout::header::Header;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::nav_context::NavContext;
use crate::layout::Shell;
use crate::views::registry::render_view;
use leptos::prelude::*;

/// Main application layout with Header, Sidebar and the active view.
///
/// Initializes deep-link integration so the current view syncs with the
/// URL (?view=...).
#[component]
pub fn AppShell() -> impl IntoView {
    let nav = leptos::context::use_context::<NavContext>().expect("NavContext context not found");

    // Initialize deep-link integration. This runs once when the component is created.
    nav.init_deep_link();

    view! {
        <Shell
            header=|| view! { <Header /> }.into_any()
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <div class="view-host">
                        {move || render_view(&nav.selection.get(), nav)}
                    </div>
                }
                .into_any()
            }
        />
    }
}
