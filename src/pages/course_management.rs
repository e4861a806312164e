//! Course management: list, create, edit, and delete courses.

use leptos::prelude::*;

use crate::auth::context::Auth;
use crate::components::shell::AppShell;
use crate::net::api;
use crate::net::client::ApiClient;
use crate::net::types::{Course, CoursePayload};

#[component]
pub fn CourseManagementPage() -> impl IntoView {
    let auth = expect_context::<Auth>();

    // Bumped after every successful mutation to reload the list.
    let version = RwSignal::new(0u32);
    let courses = LocalResource::new({
        let auth = auth.clone();
        move || {
            version.track();
            let auth = auth.clone();
            async move { api::courses(&ApiClient::new(&auth)).await }
        }
    });

    // None = create mode, Some(id) = editing that course.
    let editing = RwSignal::new(None::<i64>);
    let code = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let reset_form = move || {
        editing.set(None);
        code.set(String::new());
        name.set(String::new());
        description.set(String::new());
    };

    let on_submit = {
        let auth = auth.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            error.set(None);

            let payload = CoursePayload {
                course_code: code.get_untracked().trim().to_owned(),
                course_name: name.get_untracked().trim().to_owned(),
                description: description.get_untracked().trim().to_owned(),
            };
            if payload.course_code.is_empty() || payload.course_name.is_empty() {
                error.set(Some("Course code and name are required".to_owned()));
                return;
            }

            submitting.set(true);
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                let api = ApiClient::new(&auth);
                let outcome = match editing.get_untracked() {
                    Some(id) => api::update_course(&api, id, &payload).await,
                    None => api::create_course(&api, &payload).await,
                };
                match outcome {
                    Ok(_) => {
                        reset_form();
                        version.update(|v| *v += 1);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                submitting.set(false);
            });
        }
    };

    let start_edit = move |course: &Course| {
        editing.set(Some(course.id));
        code.set(course.course_code.clone());
        name.set(course.course_name.clone());
        description.set(course.description.clone().unwrap_or_default());
    };

    let delete = {
        let auth = auth.clone();
        move |id: i64| {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                match api::delete_course(&ApiClient::new(&auth), id).await {
                    Ok(_) => {
                        if editing.get_untracked() == Some(id) {
                            reset_form();
                        }
                        version.update(|v| *v += 1);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
    };

    view! {
        <AppShell>
            <h1>"Course Management"</h1>

            <section class="course-form">
                <h2>
                    {move || if editing.get().is_some() { "Edit Course" } else { "Add Course" }}
                </h2>
                <form on:submit=on_submit>
                    <label class="course-form__label">
                        "Course Code"
                        <input
                            type="text"
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="course-form__label">
                        "Course Name"
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="course-form__label">
                        "Description"
                        <textarea
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    {move || error.get().map(|msg| view! { <p class="course-form__error">{msg}</p> })}

                    <div class="course-form__actions">
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || submitting.get()
                        >
                            {move || {
                                if submitting.get() {
                                    "Saving..."
                                } else if editing.get().is_some() {
                                    "Save Changes"
                                } else {
                                    "Add Course"
                                }
                            }}
                        </button>
                        {move || {
                            editing
                                .get()
                                .map(|_| {
                                    view! {
                                        <button
                                            class="btn"
                                            type="button"
                                            on:click=move |_| reset_form()
                                        >
                                            "Cancel"
                                        </button>
                                    }
                                })
                        }}
                    </div>
                </form>
            </section>

            <section class="course-table">
                <h2>"Courses"</h2>
                <Suspense fallback=|| view! { <p class="page__loading">"Loading courses..."</p> }>
                    {move || {
                        courses
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! { <p class="course-table__empty">"No courses yet."</p> }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <table class="data-table">
                                            <thead>
                                                <tr>
                                                    <th>"Code"</th>
                                                    <th>"Name"</th>
                                                    <th>"Description"</th>
                                                    <th></th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {list
                                                    .into_iter()
                                                    .map(|course| {
                                                        let id = course.id;
                                                        let edit_course = course.clone();
                                                        let delete = delete.clone();
                                                        view! {
                                                            <tr>
                                                                <td>{course.course_code.clone()}</td>
                                                                <td>{course.course_name.clone()}</td>
                                                                <td>
                                                                    {course.description.clone().unwrap_or_default()}
                                                                </td>
                                                                <td class="data-table__actions">
                                                                    <button
                                                                        class="btn btn--small"
                                                                        on:click=move |_| start_edit(&edit_course)
                                                                    >
                                                                        "Edit"
                                                                    </button>
                                                                    <button
                                                                        class="btn btn--small btn--danger"
                                                                        on:click=move |_| delete(id)
                                                                    >
                                                                        "Delete"
                                                                    </button>
                                                                </td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    let retry = courses.clone();
                                    view! {
                                        <div class="error-card">
                                            <p>"Unable to load courses."</p>
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
            </section>
        </AppShell>
    }
}
