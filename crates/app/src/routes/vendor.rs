use dioxus::prelude::*;
use shared_types::{AppError, Job, JobStatus, PostJobRequest};
use std::collections::HashMap;
use validator::Validate;

use crate::api;
use crate::auth::use_auth;
use crate::routes::candidate::FetchError;

/// Employer home: posted openings and their lifecycle states.
#[component]
pub fn VendorDashboard() -> Element {
    let auth = use_auth();
    let mut jobs = use_resource(move || {
        let token = auth.token().unwrap_or_default();
        async move { api::fetch_client_jobs(&token).await }
    });

    rsx! {
        div { class: "page",
            h2 { "Your openings" }

            match jobs() {
                None => rsx! {
                    p { class: "page-loading", "Loading..." }
                },
                Some(Err(err)) => rsx! {
                    FetchError { err, retry: move |_| jobs.restart() }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "stat-row",
                        StatCard {
                            label: "Open",
                            value: list.iter().filter(|j| j.status == JobStatus::Open).count() as i64,
                        }
                        StatCard {
                            label: "Filled",
                            value: list.iter().filter(|j| j.status == JobStatus::Filled).count() as i64,
                        }
                        StatCard { label: "Total", value: list.len() as i64 }
                    }
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Title" }
                                th { "Location" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for job in list {
                                JobRow { job }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
pub(crate) fn StatCard(label: String, value: i64) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

/// Manage openings: the post-a-job form above the current list.
#[component]
pub fn VendorJobs() -> Element {
    let auth = use_auth();
    let mut jobs = use_resource(move || {
        let token = auth.token().unwrap_or_default();
        async move { api::fetch_client_jobs(&token).await }
    });

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut salary_min = use_signal(String::new);
    let mut salary_max = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut posting = use_signal(|| false);

    let handle_post = move |evt: FormEvent| async move {
        evt.prevent_default();
        posting.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let req = PostJobRequest {
            title: title(),
            description: description(),
            location: location(),
            salary_min: salary_min().parse().ok(),
            salary_max: salary_max().parse().ok(),
        };
        if let Err(errs) = req.validate() {
            field_errors.set(AppError::from(errs).field_errors);
            posting.set(false);
            return;
        }

        let token = auth.token().unwrap_or_default();
        match api::post_job(&token, &req).await {
            Ok(_) => {
                title.set(String::new());
                description.set(String::new());
                location.set(String::new());
                salary_min.set(String::new());
                salary_max.set(String::new());
                jobs.restart();
            }
            Err(err) => error_msg.set(Some(err.message)),
        }
        posting.set(false);
    };

    rsx! {
        div { class: "page",
            h2 { "Post an opening" }

            if let Some(err) = error_msg() {
                div { class: "page-error", "{err}" }
            }

            form { class: "job-form", onsubmit: handle_post,
                label { r#for: "title", "Title" }
                input {
                    id: "title",
                    value: "{title}",
                    oninput: move |evt| title.set(evt.value()),
                }
                if let Some(err) = field_errors().get("title") {
                    span { class: "field-error", "{err}" }
                }

                label { r#for: "location", "Location" }
                input {
                    id: "location",
                    value: "{location}",
                    oninput: move |evt| location.set(evt.value()),
                }
                if let Some(err) = field_errors().get("location") {
                    span { class: "field-error", "{err}" }
                }

                label { r#for: "description", "Description" }
                textarea {
                    id: "description",
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
                if let Some(err) = field_errors().get("description") {
                    span { class: "field-error", "{err}" }
                }

                div { class: "salary-row",
                    label { r#for: "salary_min", "Salary from" }
                    input {
                        id: "salary_min",
                        r#type: "number",
                        value: "{salary_min}",
                        oninput: move |evt| salary_min.set(evt.value()),
                    }
                    label { r#for: "salary_max", "to" }
                    input {
                        id: "salary_max",
                        r#type: "number",
                        value: "{salary_max}",
                        oninput: move |evt| salary_max.set(evt.value()),
                    }
                }

                button {
                    r#type: "submit",
                    disabled: posting(),
                    if posting() { "Posting..." } else { "Post opening" }
                }
            }

            h2 { "Current openings" }
            match jobs() {
                None => rsx! {
                    p { class: "page-loading", "Loading..." }
                },
                Some(Err(err)) => rsx! {
                    FetchError { err, retry: move |_| jobs.restart() }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "page-empty", "Nothing posted yet." }
                },
                Some(Ok(list)) => rsx! {
                    ul { class: "job-list",
                        for job in list {
                            VendorJobCard { job }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn JobRow(job: Job) -> Element {
    let status = job.status.as_str();

    rsx! {
        tr {
            td { "{job.title}" }
            td { "{job.location}" }
            td { "{status}" }
        }
    }
}

#[component]
fn VendorJobCard(job: Job) -> Element {
    let posted = job.posted_at.format("%Y-%m-%d").to_string();
    let status = job.status.as_str();

    rsx! {
        li { class: "job-card",
            h3 { "{job.title}" }
            p { class: "job-location", "{job.location}" }
            p { class: "job-meta", "{status} - posted {posted}" }
        }
    }
}
