//! Admin page for registering student accounts.

use leptos::prelude::*;

use crate::auth::context::Auth;
use crate::auth::role::Role;
use crate::components::shell::AppShell;
use crate::net::api;
use crate::net::client::ApiClient;
use crate::net::types::RegisterRequest;

#[component]
pub fn AddStudentPage() -> impl IntoView {
    let auth = expect_context::<Auth>();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let student_id = RwSignal::new(String::new());
    let programme = RwSignal::new(String::new());
    let intake_year = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        success.set(None);

        let request = RegisterRequest {
            first_name: first_name.get_untracked().trim().to_owned(),
            last_name: last_name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password_hash: password.get_untracked(),
            role: Role::Student.login_code().to_owned(),
            department: None,
            student_id: Some(student_id.get_untracked().trim().to_owned()),
            programme: Some(programme.get_untracked().trim().to_owned()),
            intake_year: Some(intake_year.get_untracked().trim().to_owned()),
        };
        if request.first_name.is_empty()
            || request.last_name.is_empty()
            || request.email.is_empty()
            || request.password_hash.is_empty()
        {
            error.set(Some("Name, email, and password are required".to_owned()));
            return;
        }

        submitting.set(true);
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            match api::register_user(&ApiClient::new(&auth), &request).await {
                Ok(ack) => {
                    success.set(Some(
                        ack.message
                            .unwrap_or_else(|| "Student registered successfully".to_owned()),
                    ));
                    first_name.set(String::new());
                    last_name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    student_id.set(String::new());
                    programme.set(String::new());
                    intake_year.set(String::new());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
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
            <h1>"Add Student"</h1>
            <section class="user-form">
                <form on:submit=on_submit>
                    {text_field("First Name", "text", first_name)}
                    {text_field("Last Name", "text", last_name)}
                    {text_field("Email", "email", email)}
                    {text_field("Password", "password", password)}
                    {text_field("Student ID", "text", student_id)}
                    {text_field("Programme", "text", programme)}
                    {text_field("Intake Year", "text", intake_year)}

                    {move || error.get().map(|msg| view! { <p class="user-form__error">{msg}</p> })}
                    {move || {
                        success.get().map(|msg| view! { <p class="user-form__success">{msg}</p> })
                    }}

                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Registering..." } else { "Register Student" }}
                    </button>
                </form>
            </section>
        </AppShell>
    }
}
