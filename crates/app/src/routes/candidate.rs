use dioxus::prelude::*;
use shared_types::{AppError, Application, ApplicationStatus, Job};
use uuid::Uuid;

use crate::api;
use crate::auth::use_auth;
use crate::routes::{redirect_target, Route};

fn status_label(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Submitted => "Submitted",
        ApplicationStatus::Screening => "Screening",
        ApplicationStatus::Interview => "Interview",
        ApplicationStatus::Offered => "Offered",
        ApplicationStatus::Rejected => "Rejected",
        ApplicationStatus::Withdrawn => "Withdrawn",
    }
}

/// Candidate home: the application pipeline at a glance.
#[component]
pub fn CandidateDashboard() -> Element {
    let auth = use_auth();
    let mut applications = use_resource(move || {
        let token = auth.token().unwrap_or_default();
        async move { api::fetch_my_applications(&token).await }
    });

    rsx! {
        div { class: "page",
            h2 { "Your applications" }

            match applications() {
                None => rsx! {
                    p { class: "page-loading", "Loading..." }
                },
                Some(Err(err)) => rsx! {
                    FetchError { err, retry: move |_| applications.restart() }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "page-empty",
                        "No applications yet. "
                        Link { to: Route::CandidateJobs {}, "Browse open positions" }
                    }
                },
                Some(Ok(list)) => rsx! {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Applied" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for app in list {
                                ApplicationRow { app }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ApplicationRow(app: Application) -> Element {
    let applied = app.applied_at.format("%Y-%m-%d").to_string();
    let status = status_label(app.status);

    rsx! {
        tr {
            td { "{applied}" }
            td { class: "status", "{status}" }
        }
    }
}

/// Open positions with one-click apply.
#[component]
pub fn CandidateJobs() -> Element {
    let auth = use_auth();
    let mut jobs = use_resource(move || async move { api::fetch_open_jobs(None).await });
    let mut notice = use_signal(|| Option::<String>::None);

    let on_apply = move |job_id: Uuid| {
        let token = auth.token().unwrap_or_default();
        spawn(async move {
            match api::apply_to_job(&token, job_id).await {
                Ok(_) => notice.set(Some("Application submitted.".to_string())),
                Err(err) => notice.set(Some(err.message)),
            }
        });
    };

    rsx! {
        div { class: "page",
            h2 { "Open positions" }

            if let Some(msg) = notice() {
                div { class: "page-notice", "{msg}" }
            }

            match jobs() {
                None => rsx! {
                    p { class: "page-loading", "Loading..." }
                },
                Some(Err(err)) => rsx! {
                    FetchError { err, retry: move |_| jobs.restart() }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "page-empty", "No open positions right now." }
                },
                Some(Ok(list)) => rsx! {
                    ul { class: "job-list",
                        for job in list {
                            CandidateJobCard { job, on_apply: move |id| on_apply(id) }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CandidateJobCard(job: Job, on_apply: EventHandler<Uuid>) -> Element {
    let job_id = job.id;

    rsx! {
        li { class: "job-card",
            h3 { "{job.title}" }
            p { class: "job-location", "{job.location}" }
            p { class: "job-description", "{job.description}" }
            button { onclick: move |_| on_apply.call(job_id), "Apply" }
        }
    }
}

/// Error card shared by the portal pages. A rejected token means the
/// session is gone; clear it and fall back to the public home.
#[component]
pub(crate) fn FetchError(err: AppError, retry: EventHandler<()>) -> Element {
    let mut auth = use_auth();

    if err.is_auth_failure() {
        auth.clear_auth();
        navigator().replace(redirect_target("/"));
        return rsx! {
            div { class: "gate-redirect",
                p { "Session expired. Redirecting..." }
            }
        };
    }

    rsx! {
        div { class: "page-error",
            p { "{err.message}" }
            button { onclick: move |_| retry.call(()), "Retry" }
        }
    }
}
