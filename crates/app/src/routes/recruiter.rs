use dioxus::prelude::*;
use shared_types::CandidateProfile;

use crate::api;
use crate::auth::use_auth;
use crate::routes::candidate::FetchError;
use crate::routes::vendor::StatCard;
use crate::routes::Route;

/// Recruiter home: pool size and a jump into sourcing.
#[component]
pub fn RecruiterDashboard() -> Element {
    let auth = use_auth();
    let mut pool = use_resource(move || {
        let token = auth.token().unwrap_or_default();
        async move { api::fetch_candidate_pool(&token).await }
    });

    rsx! {
        div { class: "page",
            h2 { "Sourcing" }

            match pool() {
                None => rsx! {
                    p { class: "page-loading", "Loading..." }
                },
                Some(Err(err)) => rsx! {
                    FetchError { err, retry: move |_| pool.restart() }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "stat-row",
                        StatCard { label: "Candidates in pool", value: list.len() as i64 }
                        StatCard {
                            label: "With resume",
                            value: list.iter().filter(|c| c.resume_url.is_some()).count() as i64,
                        }
                    }
                    nav { class: "admin-links",
                        Link { to: Route::RecruiterCandidates {}, "Browse the pool" }
                    }
                },
            }
        }
    }
}

/// The candidate pool, filterable by skill.
#[component]
pub fn RecruiterCandidates() -> Element {
    let auth = use_auth();
    let mut skill = use_signal(String::new);
    let mut pool = use_resource(move || {
        let token = auth.token().unwrap_or_default();
        async move { api::fetch_candidate_pool(&token).await }
    });

    rsx! {
        div { class: "page",
            h2 { "Candidate pool" }

            input {
                class: "home-search",
                r#type: "search",
                placeholder: "Filter by skill",
                value: "{skill}",
                oninput: move |evt| skill.set(evt.value()),
            }

            match pool() {
                None => rsx! {
                    p { class: "page-loading", "Loading..." }
                },
                Some(Err(err)) => rsx! {
                    FetchError { err, retry: move |_| pool.restart() }
                },
                Some(Ok(list)) => {
                    let filter = skill().to_lowercase();
                    let matching: Vec<_> = list
                        .into_iter()
                        .filter(|c| {
                            filter.is_empty()
                                || c.skills.iter().any(|s| s.to_lowercase().contains(&filter))
                        })
                        .collect();

                    rsx! {
                        if matching.is_empty() {
                            p { class: "page-empty", "No candidates match." }
                        } else {
                            table { class: "data-table",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Headline" }
                                        th { "Skills" }
                                    }
                                }
                                tbody {
                                    for candidate in matching {
                                        PoolRow { candidate }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PoolRow(candidate: CandidateProfile) -> Element {
    let headline = candidate.headline.clone().unwrap_or_default();
    let skills = candidate.skills.join(", ");

    rsx! {
        tr {
            td { "{candidate.full_name}" }
            td { "{headline}" }
            td { "{skills}" }
        }
    }
}
