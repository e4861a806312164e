//! Teacher dashboard: profile and the courses they teach.

use leptos::prelude::*;

use crate::auth::context::Auth;
use crate::components::shell::AppShell;
use crate::net::api;
use crate::net::client::ApiClient;
use crate::net::types::UserDetails;

#[component]
pub fn TeacherDashboardPage() -> impl IntoView {
    let auth = expect_context::<Auth>();
    let profile = LocalResource::new(move || {
        let auth = auth.clone();
        async move { api::current_user(&ApiClient::new(&auth)).await }
    });

    view! {
        <AppShell>
            <h1>"My Courses"</h1>
            <Suspense fallback=|| view! { <p class="page__loading">"Loading your dashboard..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(user) => view! { <TeacherProfile user=user/> }.into_any(),
                            Err(err) => {
                                let retry = profile.clone();
                                view! {
                                    <div class="error-card">
                                        <p>"Unable to load your dashboard."</p>
                                        <p class="error-card__detail">{err.to_string()}</p>
                                        <button class="btn" on:click=move |_| retry.refetch()>
                                            "Try Again"
                                        </button>
                                    </div>
                                }
                                .into_any()
                            }
                        })
                }}
            </Suspense>
        </AppShell>
    }
}

#[component]
fn TeacherProfile(user: UserDetails) -> impl IntoView {
    let name = user.full_name();
    let department = user.department.clone().unwrap_or_else(|| "N/A".to_owned());
    let teacher_id = user.teacher_id.clone().unwrap_or_else(|| "N/A".to_owned());
    let email = user.email.clone().unwrap_or_default();

    view! {
        <section class="profile-card">
            <h2>{name}</h2>
            <dl class="profile-card__facts">
                <dt>"Email"</dt>
                <dd>{email}</dd>
                <dt>"Department"</dt>
                <dd>{department}</dd>
                <dt>"Teacher ID"</dt>
                <dd>{teacher_id}</dd>
            </dl>
        </section>

        <section class="course-list">
            <h2>"Teaching"</h2>
            {if user.teaching_courses.is_empty() {
                view! { <p class="course-list__empty">"No courses assigned yet."</p> }.into_any()
            } else {
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Code"</th>
                                <th>"Course"</th>
                                <th>"Description"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {user
                                .teaching_courses
                                .into_iter()
                                .map(|course| {
                                    view! {
                                        <tr>
                                            <td>{course.course_code}</td>
                                            <td>{course.course_name}</td>
                                            <td>{course.description.unwrap_or_default()}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </section>
    }
}
