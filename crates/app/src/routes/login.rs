use dioxus::prelude::*;
use shared_types::{AppError, LoginRequest, Role};
use std::collections::HashMap;
use validator::Validate;

use crate::api;
use crate::auth::use_auth;
use crate::routes::{redirect_target, Route};

/// Shared login form for all four portals. The portal's role picks the
/// endpoint and the post-login destination; the guest gate has already
/// guaranteed that only anonymous visitors get this far.
#[component]
pub fn LoginPage(role: Role, title: String, register_to: Option<Route>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let req = LoginRequest {
            email: email(),
            password: password(),
        };
        if let Err(errs) = req.validate() {
            field_errors.set(AppError::from(errs).field_errors);
            loading.set(false);
            return;
        }

        match api::login(role, &req).await {
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
                p { class: "auth-subtitle", "Sign in to continue" }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { onsubmit: handle_login,
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
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                if let Some(to) = register_to {
                    p { class: "auth-switch",
                        "New here? "
                        Link { to, "Create an account" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CandidateLogin() -> Element {
    rsx! {
        LoginPage {
            role: Role::Candidate,
            title: "Candidate sign in",
            register_to: Some(Route::CandidateRegister {}),
        }
    }
}

#[component]
pub fn VendorLogin() -> Element {
    rsx! {
        LoginPage {
            role: Role::Client,
            title: "Employer sign in",
            register_to: Some(Route::VendorRegister {}),
        }
    }
}

#[component]
pub fn RecruiterLogin() -> Element {
    rsx! {
        LoginPage {
            role: Role::Recruiter,
            title: "Recruiter sign in",
            register_to: Some(Route::RecruiterRegister {}),
        }
    }
}

/// Admin accounts are provisioned out of band, so there is no matching
/// registration page.
#[component]
pub fn AdminLogin() -> Element {
    rsx! {
        LoginPage {
            role: Role::Admin,
            title: "Admin sign in",
            register_to: None,
        }
    }
}
