use dioxus::prelude::*;
use shared_types::{AccessPolicy, Decision, Job};

use crate::api;
use crate::auth::use_auth;
use crate::routes::{redirect_target, Route};

/// Public landing page: open job browse plus the portal entrances.
/// Authenticated sessions never stay here; they are replaced to their
/// role's dashboard by the same policy the gates use.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let policy: AccessPolicy = use_context();

    if let Decision::Redirect(target) = policy.decide(auth.snapshot().as_ref(), "/") {
        navigator().replace(redirect_target(&target));
    }

    let mut search = use_signal(String::new);
    let mut jobs = use_resource(move || {
        let q = search();
        async move {
            let query = if q.is_empty() { None } else { Some(q.as_str()) };
            api::fetch_open_jobs(query).await
        }
    });

    rsx! {
        div { class: "home-page",
            header { class: "home-hero",
                h1 { "Hirelink" }
                p { "Openings from vetted employers. Pick your door:" }
                nav { class: "home-portals",
                    Link { to: Route::CandidateLogin {}, class: "portal-link", "Candidates" }
                    Link { to: Route::VendorLogin {}, class: "portal-link", "Employers" }
                    Link { to: Route::RecruiterLogin {}, class: "portal-link", "Recruiters" }
                }
            }

            section { class: "home-jobs",
                h2 { "Open positions" }
                input {
                    class: "home-search",
                    r#type: "search",
                    placeholder: "Search title or location",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }

                match jobs() {
                    None => rsx! {
                        p { class: "home-loading", "Loading openings..." }
                    },
                    Some(Err(err)) => rsx! {
                        div { class: "home-error",
                            p { "Could not load openings: {err.message}" }
                            button { onclick: move |_| jobs.restart(), "Retry" }
                        }
                    },
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        p { class: "home-empty", "No open positions right now." }
                    },
                    Some(Ok(list)) => rsx! {
                        ul { class: "job-list",
                            for job in list {
                                JobCard { job }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn JobCard(job: Job) -> Element {
    let salary = match (job.salary_min, job.salary_max) {
        (Some(min), Some(max)) => format!("${min} – ${max}"),
        (Some(min), None) => format!("From ${min}"),
        (None, Some(max)) => format!("Up to ${max}"),
        (None, None) => "Salary undisclosed".to_string(),
    };

    rsx! {
        li { class: "job-card",
            h3 { "{job.title}" }
            p { class: "job-location", "{job.location}" }
            p { class: "job-salary", "{salary}" }
            p { class: "job-description", "{job.description}" }
        }
    }
}
