use pretty_assertions::{assert_eq, assert_ne};
use shared_types::{Decision, Role};

use crate::common::{decide_anon, decide_as, GUEST_PATHS};

#[test]
fn anonymous_visitors_see_every_guest_page() {
    for path in GUEST_PATHS {
        assert_eq!(decide_anon(path), Decision::Render, "{path}");
    }
}

#[test]
fn no_authenticated_session_ever_renders_a_guest_page() {
    for path in GUEST_PATHS {
        for role in Role::ALL {
            let decision = decide_as(role, path);
            assert_ne!(decision, Decision::Render, "{role:?} rendered {path}");
        }
    }
}

#[test]
fn authenticated_sessions_are_sent_to_their_own_dashboard() {
    for path in GUEST_PATHS {
        for role in Role::ALL {
            assert_eq!(
                decide_as(role, path),
                Decision::redirect(role.dashboard_path()),
                "{role:?} at {path}"
            );
        }
    }
}

#[test]
fn logged_in_client_requesting_a_login_page_is_redirected_away() {
    // A client session asking for a sign-in form never sees it.
    let decision = decide_as(Role::Client, "/vendor/login");
    assert_eq!(decision, Decision::redirect("/vendor/dashboard"));
}

#[test]
fn guest_redirect_goes_to_the_sessions_role_not_the_pages_portal() {
    // An admin hitting the candidate login form goes to the admin
    // dashboard, not anywhere in the candidate subtree.
    assert_eq!(
        decide_as(Role::Admin, "/candidate/login"),
        Decision::redirect("/admin/dashboard")
    );
}
