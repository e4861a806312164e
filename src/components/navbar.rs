//! Top navigation bar with the signed-in role and a logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::context::Auth;

/// Title bar shown on every authenticated page. Logout clears the session
/// first, then navigates back to the login entry.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<Auth>();
    let navigate = use_navigate();

    let role_label = {
        let auth = auth.clone();
        move || auth.role().map(|r| r.as_str().to_owned()).unwrap_or_default()
    };

    let on_logout = move |_| {
        auth.logout();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <span class="navbar__brand">"ClassPulse"</span>
            <span class="navbar__spacer"></span>
            <span class="navbar__role">{role_label}</span>
            <button class="navbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
