pub mod admin;
pub mod candidate;
pub mod home;
pub mod login;
pub mod recruiter;
pub mod register;
pub mod vendor;

use dioxus::prelude::*;
use shared_types::{AccessPolicy, Decision};

use crate::api;
use crate::auth::use_auth;

use admin::{AdminCandidates, AdminClients, AdminDashboard, AdminRecruiters};
use candidate::{CandidateDashboard, CandidateJobs};
use home::Home;
use login::{AdminLogin, CandidateLogin, RecruiterLogin, VendorLogin};
use recruiter::{RecruiterCandidates, RecruiterDashboard};
use register::{CandidateRegister, RecruiterRegister, VendorRegister};
use vendor::{VendorDashboard, VendorJobs};

/// Application routes.
///
/// Guest pages (login/registration) live under `GuestGate`; every protected
/// subtree lives under the single `RoleGate` layout, which consults the
/// access policy tables for the concrete path being rendered. The catch-all
/// applies the default redirect.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[layout(GuestGate)]
    #[route("/candidate/login")]
    CandidateLogin {},
    #[route("/candidate/register")]
    CandidateRegister {},
    #[route("/vendor/login")]
    VendorLogin {},
    #[route("/vendor/register")]
    VendorRegister {},
    #[route("/recruiter/login")]
    RecruiterLogin {},
    #[route("/recruiter/register")]
    RecruiterRegister {},
    #[route("/admin/login")]
    AdminLogin {},
    #[end_layout]
    #[layout(RoleGate)]
    #[route("/candidate/dashboard")]
    CandidateDashboard {},
    #[route("/candidate/jobs")]
    CandidateJobs {},
    #[route("/vendor/dashboard")]
    VendorDashboard {},
    #[route("/vendor/jobs")]
    VendorJobs {},
    #[route("/admin/dashboard")]
    AdminDashboard {},
    #[route("/admin/candidates")]
    AdminCandidates {},
    #[route("/admin/clients")]
    AdminClients {},
    #[route("/admin/recruiters")]
    AdminRecruiters {},
    #[route("/recruiter/dashboard")]
    RecruiterDashboard {},
    #[route("/recruiter/candidates")]
    RecruiterCandidates {},
    #[end_layout]
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

/// Map a policy redirect path onto the typed route where one exists.
/// The policy only ever emits the root and the four role dashboards.
pub(crate) fn redirect_target(path: &str) -> NavigationTarget<Route> {
    match path {
        "/" => NavigationTarget::Internal(Route::Home {}),
        "/candidate/dashboard" => NavigationTarget::Internal(Route::CandidateDashboard {}),
        "/vendor/dashboard" => NavigationTarget::Internal(Route::VendorDashboard {}),
        "/admin/dashboard" => NavigationTarget::Internal(Route::AdminDashboard {}),
        "/recruiter/dashboard" => NavigationTarget::Internal(Route::RecruiterDashboard {}),
        other => NavigationTarget::External(other.to_string()),
    }
}

/// Guest gate layout. Anonymous visitors see the login/registration page;
/// authenticated users are replaced away to their dashboard so a signed-in
/// session can never land on a sign-in form.
#[component]
fn GuestGate() -> Element {
    let auth = use_auth();
    let policy: AccessPolicy = use_context();
    let route: Route = use_route();
    let path = route.to_string();

    match policy.decide(auth.snapshot().as_ref(), &path) {
        Decision::Render => rsx! { Outlet::<Route> {} },
        Decision::Redirect(target) => {
            tracing::debug!(%path, %target, "guest page denied to authenticated session");
            navigator().replace(redirect_target(&target));
            rsx! {
                div { class: "gate-redirect",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

/// Role gate layout for every protected subtree. The decision is a pure
/// read of the session snapshot current at this render; denial replaces
/// the location so the back button cannot return here.
#[component]
fn RoleGate() -> Element {
    let auth = use_auth();
    let policy: AccessPolicy = use_context();
    let route: Route = use_route();
    let path = route.to_string();

    match policy.decide(auth.snapshot().as_ref(), &path) {
        Decision::Render => rsx! {
            PortalShell {
                Outlet::<Route> {}
            }
        },
        Decision::Redirect(target) => {
            tracing::debug!(%path, %target, "route denied");
            navigator().replace(redirect_target(&target));
            rsx! {
                div { class: "gate-redirect",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

/// Shared chrome for the signed-in portals: brand, identity, sign-out.
#[component]
fn PortalShell(children: Element) -> Element {
    let auth = use_auth();
    let email = auth.email().unwrap_or_default();
    let role_label = auth.role().map(|r| r.as_str()).unwrap_or("guest");

    let on_logout = {
        let mut auth = auth;
        move |_| {
            if let Some(token) = auth.token() {
                // Best-effort server-side revocation; local state is the
                // authority for this client either way.
                spawn(async move {
                    if let Err(err) = api::logout(&token).await {
                        tracing::warn!(%err, "logout call failed");
                    }
                });
            }
            auth.clear_auth();
            navigator().replace(Route::Home {});
        }
    };

    rsx! {
        div { class: "portal",
            header { class: "portal-topbar",
                Link { to: Route::Home {}, class: "portal-brand", "Hirelink" }
                div { class: "portal-identity",
                    span { class: "portal-role", "{role_label}" }
                    span { class: "portal-email", "{email}" }
                    button { class: "portal-logout", onclick: on_logout, "Sign out" }
                }
            }
            main { class: "portal-content", {children} }
        }
    }
}

/// Catch-all: the default redirect. Authenticated sessions go to their
/// role's dashboard, everyone else to the public home.
#[component]
fn Fallback(segments: Vec<String>) -> Element {
    let auth = use_auth();
    let policy: AccessPolicy = use_context();
    let path = format!("/{}", segments.join("/"));

    match policy.decide(auth.snapshot().as_ref(), &path) {
        Decision::Redirect(target) => {
            navigator().replace(redirect_target(&target));
            rsx! {
                div { class: "gate-redirect",
                    p { "Redirecting..." }
                }
            }
        }
        Decision::Render => rsx! {
            div { class: "gate-redirect",
                p { "Page not found." }
                Link { to: Route::Home {}, "Back to home" }
            }
        },
    }
}
