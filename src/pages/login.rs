//! Login page: email/password form with a student/admin toggle.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::context::Auth;
use crate::auth::role::Role;
use crate::net::api;
use crate::net::error::login_error_message;

fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_owned());
    }
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    });
    if valid {
        Ok(())
    } else {
        Err("Please enter a valid email address".to_owned())
    }
}

fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        Err("Password is required".to_owned())
    } else {
        Ok(())
    }
}

/// Login form. On success the session is stored through the auth context
/// and the user lands on their role's dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<Auth>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let as_admin = RwSignal::new(false);
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let api_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // Already signed in: straight to the landing page.
    Effect::new({
        let auth = auth.clone();
        let navigate = navigate.clone();
        move || {
            if let Some(role) = auth.role() {
                navigate(role.dashboard_path(), NavigateOptions::default());
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_check = validate_email(&email.get_untracked());
        let password_check = validate_password(&password.get_untracked());
        email_error.set(email_check.clone().err());
        password_error.set(password_check.clone().err());
        if email_check.is_err() || password_check.is_err() {
            return;
        }

        submitting.set(true);
        api_error.set(None);

        let role_code = if as_admin.get_untracked() {
            Role::Admin.login_code()
        } else {
            Role::Student.login_code()
        };
        let auth = auth.clone();
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            let outcome =
                api::login(&email.get_untracked(), &password.get_untracked(), role_code).await;
            match outcome {
                Ok(data) => match Role::from_name(&data.role) {
                    Some(role) => {
                        auth.login(data.access_token, data.refresh_token, role);
                        navigate(role.dashboard_path(), NavigateOptions::default());
                    }
                    None => {
                        api_error.set(Some(format!("Unknown role: {}", data.role)));
                    }
                },
                Err(err) => api_error.set(Some(login_error_message(&err))),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1>"ClassPulse"</h1>
                <p class="login-page__tagline">"Student feedback, heard."</p>

                <div class="login-page__toggle">
                    <button
                        class=move || {
                            if as_admin.get() { "toggle" } else { "toggle toggle--active" }
                        }
                        on:click=move |_| as_admin.set(false)
                    >
                        "Student"
                    </button>
                    <button
                        class=move || {
                            if as_admin.get() { "toggle toggle--active" } else { "toggle" }
                        }
                        on:click=move |_| as_admin.set(true)
                    >
                        "Admin"
                    </button>
                </div>

                <form on:submit=on_submit>
                    <label class="login-page__label">
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    {move || {
                        email_error
                            .get()
                            .map(|msg| view! { <p class="login-page__field-error">{msg}</p> })
                    }}

                    <label class="login-page__label">
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    {move || {
                        password_error
                            .get()
                            .map(|msg| view! { <p class="login-page__field-error">{msg}</p> })
                    }}

                    {move || {
                        api_error
                            .get()
                            .map(|msg| view! { <p class="login-page__error">{msg}</p> })
                    }}

                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
