//! Page scaffold shared by all authenticated views.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Navbar/>
            <div class="shell__body">
                <Sidebar/>
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}
