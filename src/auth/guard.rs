//! Route gating on top of the auth context.
//!
//! The gating rule itself is a pure function over the auth state, an
//! optional role allow-list, and the requested path; the [`RequireAuth`]
//! component just renders its verdict.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::children::ChildrenFn;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::auth::context::{Auth, AuthStatus};
use crate::auth::role::Role;

/// Verdict for a navigation attempt at a protected view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Startup check still running: render a neutral wait state, neither
    /// the protected view nor a redirect.
    Wait,
    /// Not logged in: go to the login entry, remembering where we were
    /// headed (best-effort, as a `from` query parameter).
    Login { redirect: String },
    /// Logged in, but the view belongs to other roles: go to our own
    /// landing page.
    Home { path: &'static str },
    /// Render the protected view.
    Grant,
}

/// Pure gating rule.
///
/// An empty `allowed` list means any authenticated role may pass.
pub fn decide(status: AuthStatus, allowed: &[Role], requested: &str) -> RouteDecision {
    match status {
        AuthStatus::Loading => RouteDecision::Wait,
        AuthStatus::Anonymous => RouteDecision::Login {
            redirect: login_redirect(requested),
        },
        AuthStatus::Authenticated(role) => {
            if allowed.is_empty() || allowed.contains(&role) {
                RouteDecision::Grant
            } else {
                RouteDecision::Home {
                    path: role.dashboard_path(),
                }
            }
        }
    }
}

fn login_redirect(requested: &str) -> String {
    if requested.is_empty() || requested == "/" {
        "/".to_owned()
    } else {
        format!("/?from={requested}")
    }
}

/// Wraps a protected view; re-evaluates whenever the auth state changes.
#[component]
pub fn RequireAuth(
    /// Roles allowed in; empty means any authenticated user.
    #[prop(optional)]
    roles: Vec<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<Auth>();
    let location = use_location();

    move || match decide(auth.status(), &roles, &location.pathname.get()) {
        RouteDecision::Wait => view! {
            <div class="route-guard__wait">
                <div class="route-guard__spinner"></div>
            </div>
        }
        .into_any(),
        RouteDecision::Login { redirect } => view! { <Redirect path=redirect/> }.into_any(),
        RouteDecision::Home { path } => view! { <Redirect path=path/> }.into_any(),
        RouteDecision::Grant => children().into_any(),
    }
}
