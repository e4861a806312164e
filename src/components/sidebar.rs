//! Role-aware sidebar navigation.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::auth::context::Auth;
use crate::auth::role::Role;

/// Navigation entries a role is offered.
pub fn links_for(role: Role) -> Vec<(&'static str, &'static str)> {
    match role {
        Role::Admin => vec![
            ("/Admin-dashboard", "Analytics"),
            ("/add-student", "Add Student"),
            ("/teacher-management", "Teachers"),
            ("/course-management", "Courses"),
        ],
        Role::Teacher => vec![
            ("/Teacher-dashboard", "My Courses"),
            ("/course-management", "Courses"),
        ],
        Role::Student => vec![
            ("/Student-dashboard", "Dashboard"),
            ("/course-management", "Courses"),
        ],
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<Auth>();

    view! {
        <nav class="sidebar">
            <ul class="sidebar__list">
                {move || {
                    auth.role()
                        .map(links_for)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <li class="sidebar__item">
                                    <A href=href>{label}</A>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </nav>
    }
}
