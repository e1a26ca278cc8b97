use dioxus::prelude::*;
use shared_types::{AppError, RegisterRequest, Role};
use std::collections::HashMap;
use validator::Validate;

use crate::api;
use crate::auth::use_auth;
use crate::routes::{redirect_target, Route};

/// Shared registration form for the candidate, employer, and recruiter
/// portals. A successful registration signs the new account in directly.
#[component]
pub fn RegisterPage(role: Role, title: String, login_to: Route) -> Element {
    let mut auth = use_auth();
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let req = RegisterRequest {
            email: email(),
            password: password(),
            full_name: full_name(),
        };
        if let Err(errs) = req.validate() {
            field_errors.set(AppError::from(errs).field_errors);
            loading.set(false);
            return;
        }

        match api::register(role, &req).await {
            Ok(session) => {
                let dest = session.role.dashboard_path();
                auth.set_auth(session);
                navigator().replace(redirect_target(dest));
            }
            Err(err) => {
                if err.field_errors.is_empty() {
                    error_msg.set(Some(err.message));
                } else {
                    field_errors.set(err.field_errors);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "{title}" }
                p { class: "auth-subtitle", "Create an account to get started" }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { onsubmit: handle_register,
                    label { r#for: "full_name", "Full name" }
                    input {
                        id: "full_name",
                        value: "{full_name}",
                        oninput: move |evt| full_name.set(evt.value()),
                    }
                    if let Some(err) = field_errors().get("full_name") {
                        span { class: "field-error", "{err}" }
                    }

                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    if let Some(err) = field_errors().get("email") {
                        span { class: "field-error", "{err}" }
                    }

                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    if let Some(err) = field_errors().get("password") {
                        span { class: "field-error", "{err}" }
                    }

                    button {
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Create account" }
                    }
                }

                p { class: "auth-switch",
                    "Already registered? "
                    Link { to: login_to, "Sign in" }
                }
            }
        }
    }
}

#[component]
pub fn CandidateRegister() -> Element {
    rsx! {
        RegisterPage {
            role: Role::Candidate,
            title: "Create a candidate account",
            login_to: Route::CandidateLogin {},
        }
    }
}

#[component]
pub fn VendorRegister() -> Element {
    rsx! {
        RegisterPage {
            role: Role::Client,
            title: "Create an employer account",
            login_to: Route::VendorLogin {},
        }
    }
}

#[component]
pub fn RecruiterRegister() -> Element {
    rsx! {
        RegisterPage {
            role: Role::Recruiter,
            title: "Create a recruiter account",
            login_to: Route::RecruiterLogin {},
        }
    }
}
