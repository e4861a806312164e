//! Admin page for teacher accounts: list, register, edit, delete.

use leptos::prelude::*;

use crate::auth::context::Auth;
use crate::auth::role::Role;
use crate::components::shell::AppShell;
use crate::net::api;
use crate::net::client::ApiClient;
use crate::net::types::{RegisterRequest, UpdateUserRequest, UserDetails};

#[component]
pub fn TeacherManagementPage() -> impl IntoView {
    let auth = expect_context::<Auth>();

    let version = RwSignal::new(0u32);
    let teachers = LocalResource::new({
        let auth = auth.clone();
        move || {
            version.track();
            let auth = auth.clone();
            async move { api::teachers(&ApiClient::new(&auth)).await }
        }
    });

    // None = registering a new teacher, Some(id) = editing that account.
    let editing = RwSignal::new(None::<i64>);
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    // Required on register; on edit, blank keeps the current password.
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let reset_form = move || {
        editing.set(None);
        first_name.set(String::new());
        last_name.set(String::new());
        email.set(String::new());
        department.set(String::new());
        password.set(String::new());
    };

    let on_submit = {
        let auth = auth.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            error.set(None);

            let first = first_name.get_untracked().trim().to_owned();
            let last = last_name.get_untracked().trim().to_owned();
            let mail = email.get_untracked().trim().to_owned();
            let dept = department.get_untracked().trim().to_owned();
            let pass = password.get_untracked();
            if first.is_empty() || last.is_empty() || mail.is_empty() {
                error.set(Some("Name and email are required".to_owned()));
                return;
            }
            if editing.get_untracked().is_none() && pass.is_empty() {
                error.set(Some("Password is required for new accounts".to_owned()));
                return;
            }

            submitting.set(true);
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                let api = ApiClient::new(&auth);
                let outcome = match editing.get_untracked() {
                    Some(id) => {
                        let update = UpdateUserRequest {
                            first_name: first,
                            last_name: last,
                            email: mail,
                            department: Some(dept),
                            password_hash: (!pass.is_empty()).then_some(pass),
                        };
                        api::update_user(&api, id, &update).await
                    }
                    None => {
                        let request = RegisterRequest {
                            first_name: first,
                            last_name: last,
                            email: mail,
                            password_hash: pass,
                            role: Role::Teacher.login_code().to_owned(),
                            department: Some(dept),
                            student_id: None,
                            programme: None,
                            intake_year: None,
                        };
                        api::register_user(&api, &request).await
                    }
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

    let start_edit = move |teacher: &UserDetails| {
        editing.set(teacher.id);
        first_name.set(teacher.first_name.clone().unwrap_or_default());
        last_name.set(teacher.last_name.clone().unwrap_or_default());
        email.set(teacher.email.clone().unwrap_or_default());
        department.set(teacher.department.clone().unwrap_or_default());
        password.set(String::new());
    };

    let delete = {
        let auth = auth.clone();
        move |id: i64| {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                match api::delete_user(&ApiClient::new(&auth), id).await {
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

    let text_field = move |label: &'static str, kind: &'static str, signal: RwSignal<String>| {
        view! {
            <label class="user-form__label">
                {label}
                <input
                    type=kind
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <AppShell>
            <h1>"Teacher Management"</h1>

            <section class="user-form">
                <h2>
                    {move || {
                        if editing.get().is_some() { "Edit Teacher" } else { "Register Teacher" }
                    }}
                </h2>
                <form on:submit=on_submit>
                    {text_field("First Name", "text", first_name)}
                    {text_field("Last Name", "text", last_name)}
                    {text_field("Email", "email", email)}
                    {text_field("Department", "text", department)}
                    <label class="user-form__label">
                        {move || {
                            if editing.get().is_some() {
                                "Password (leave blank to keep current)"
                            } else {
                                "Password"
                            }
                        }}
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    {move || error.get().map(|msg| view! { <p class="user-form__error">{msg}</p> })}

                    <div class="user-form__actions">
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
                                    "Register Teacher"
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

            <section class="user-table">
                <h2>"Teachers"</h2>
                <Suspense fallback=|| view! { <p class="page__loading">"Loading teachers..."</p> }>
                    {move || {
                        teachers
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! { <p class="user-table__empty">"No teachers yet."</p> }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <table class="data-table">
                                            <thead>
                                                <tr>
                                                    <th>"Name"</th>
                                                    <th>"Email"</th>
                                                    <th>"Department"</th>
                                                    <th></th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {list
                                                    .into_iter()
                                                    .map(|teacher| {
                                                        let id = teacher.id;
                                                        let edit_teacher = teacher.clone();
                                                        let delete = delete.clone();
                                                        view! {
                                                            <tr>
                                                                <td>{teacher.full_name()}</td>
                                                                <td>{teacher.email.clone().unwrap_or_default()}</td>
                                                                <td>
                                                                    {teacher.department.clone().unwrap_or_default()}
                                                                </td>
                                                                <td class="data-table__actions">
                                                                    <button
                                                                        class="btn btn--small"
                                                                        on:click=move |_| start_edit(&edit_teacher)
                                                                    >
                                                                        "Edit"
                                                                    </button>
                                                                    {id
                                                                        .map(|id| {
                                                                            let delete = delete.clone();
                                                                            view! {
                                                                                <button
                                                                                    class="btn btn--small btn--danger"
                                                                                    on:click=move |_| delete(id)
                                                                                >
                                                                                    "Delete"
                                                                                </button>
                                                                            }
                                                                        })}
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
                                    let retry = teachers.clone();
                                    view! {
                                        <div class="error-card">
                                            <p>"Unable to load teachers."</p>
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
