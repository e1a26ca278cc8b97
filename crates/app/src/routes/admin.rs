use dioxus::prelude::*;
use shared_types::{CandidateProfile, ClientCompany, RecruiterProfile};

use crate::api;
use crate::auth::use_auth;
use crate::routes::candidate::FetchError;
use crate::routes::vendor::StatCard;
use crate::routes::Route;

/// Back-office overview: platform-wide counts.
#[component]
pub fn AdminDashboard() -> Element {
    let auth = use_auth();
    let mut stats = use_resource(move || {
        let token = auth.token().unwrap_or_default();
        async move { api::fetch_admin_stats(&token).await }
    });

    rsx! {
        div { class: "page",
            h2 { "Platform overview" }

            match stats() {
                None => rsx! {
                    p { class: "page-loading", "Loading..." }
                },
                Some(Err(err)) => rsx! {
                    FetchError { err, retry: move |_| stats.restart() }
                },
                Some(Ok(s)) => rsx! {
                    div { class: "stat-row",
                        StatCard { label: "Candidates", value: s.candidate_count }
                        StatCard { label: "Clients", value: s.client_count }
                        StatCard { label: "Recruiters", value: s.recruiter_count }
                        StatCard { label: "Open jobs", value: s.open_job_count }
                    }
                    nav { class: "admin-links",
                        Link { to: Route::AdminCandidates {}, "Candidates" }
                        Link { to: Route::AdminClients {}, "Clients" }
                        Link { to: Route::AdminRecruiters {}, "Recruiters" }
                    }
                },
            }
        }
    }
}

/// All registered candidates.
#[component]
pub fn AdminCandidates() -> Element {
    let auth = use_auth();
    let mut candidates = use_resource(move || {
        let token = auth.token().unwrap_or_default();
        async move { api::fetch_candidates(&token).await }
    });

    rsx! {
        div { class: "page",
            h2 { "Candidates" }

            match candidates() {
                None => rsx! {
                    p { class: "page-loading", "Loading..." }
                },
                Some(Err(err)) => rsx! {
                    FetchError { err, retry: move |_| candidates.restart() }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "page-empty", "No candidates registered." }
                },
                Some(Ok(list)) => rsx! {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Skills" }
                            }
                        }
                        tbody {
                            for candidate in list {
                                CandidateRow { candidate }
                            }
                        }
                    }
                },
            }
        }
    }
}

/// All employer/vendor accounts.
#[component]
pub fn AdminClients() -> Element {
    let auth = use_auth();
    let mut clients = use_resource(move || {
        let token = auth.token().unwrap_or_default();
        async move { api::fetch_clients(&token).await }
    });

    rsx! {
        div { class: "page",
            h2 { "Clients" }

            match clients() {
                None => rsx! {
                    p { class: "page-loading", "Loading..." }
                },
                Some(Err(err)) => rsx! {
                    FetchError { err, retry: move |_| clients.restart() }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "page-empty", "No client companies yet." }
                },
                Some(Ok(list)) => rsx! {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Company" }
                                th { "Contact" }
                                th { "Open jobs" }
                            }
                        }
                        tbody {
                            for client in list {
                                ClientRow { client }
                            }
                        }
                    }
                },
            }
        }
    }
}

/// All recruiter accounts.
#[component]
pub fn AdminRecruiters() -> Element {
    let auth = use_auth();
    let mut recruiters = use_resource(move || {
        let token = auth.token().unwrap_or_default();
        async move { api::fetch_recruiters(&token).await }
    });

    rsx! {
        div { class: "page",
            h2 { "Recruiters" }

            match recruiters() {
                None => rsx! {
                    p { class: "page-loading", "Loading..." }
                },
                Some(Err(err)) => rsx! {
                    FetchError { err, retry: move |_| recruiters.restart() }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "page-empty", "No recruiters yet." }
                },
                Some(Ok(list)) => rsx! {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Active placements" }
                            }
                        }
                        tbody {
                            for recruiter in list {
                                RecruiterRow { recruiter }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CandidateRow(candidate: CandidateProfile) -> Element {
    let skills = candidate.skills.join(", ");

    rsx! {
        tr {
            td { "{candidate.full_name}" }
            td { "{candidate.email}" }
            td { "{skills}" }
        }
    }
}

#[component]
fn ClientRow(client: ClientCompany) -> Element {
    let contact = format!("{} <{}>", client.contact_name, client.email);

    rsx! {
        tr {
            td { "{client.company_name}" }
            td { "{contact}" }
            td { "{client.open_jobs}" }
        }
    }
}

#[component]
fn RecruiterRow(recruiter: RecruiterProfile) -> Element {
    rsx! {
        tr {
            td { "{recruiter.full_name}" }
            td { "{recruiter.email}" }
            td { "{recruiter.active_placements}" }
        }
    }
}
