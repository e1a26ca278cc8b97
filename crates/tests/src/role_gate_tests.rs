use pretty_assertions::assert_eq;
use shared_types::{Decision, Role};

use crate::common::{decide_anon, decide_as, PROTECTED_PATHS};

#[test]
fn anonymous_is_redirected_to_root_from_every_protected_path() {
    for path in PROTECTED_PATHS {
        assert_eq!(
            decide_anon(path),
            Decision::redirect("/"),
            "anonymous should not reach {path}"
        );
    }
}

#[test]
fn wrong_role_is_redirected_to_root_never_to_another_dashboard() {
    for path in PROTECTED_PATHS {
        for role in Role::ALL {
            let decision = decide_as(role, path);
            if decision == Decision::Render {
                continue;
            }
            // A denial must land on the public root, not on any dashboard.
            assert_eq!(
                decision,
                Decision::redirect("/"),
                "{role:?} at {path} should be denied to the root"
            );
        }
    }
}

#[test]
fn each_role_renders_its_own_subtree_and_nothing_else() {
    let expectations: &[(Role, &str)] = &[
        (Role::Candidate, "/candidate"),
        (Role::Client, "/vendor"),
        (Role::Admin, "/admin"),
        (Role::Recruiter, "/recruiter"),
    ];

    for path in PROTECTED_PATHS {
        for &(role, subtree) in expectations {
            let expected = if path.starts_with(subtree) {
                Decision::Render
            } else {
                Decision::redirect("/")
            };
            assert_eq!(decide_as(role, path), expected, "{role:?} at {path}");
        }
    }
}

#[test]
fn anonymous_requesting_admin_dashboard_lands_on_root() {
    // state = all-null, request /admin/dashboard.
    assert_eq!(decide_anon("/admin/dashboard"), Decision::redirect("/"));
}

#[test]
fn candidate_requesting_vendor_dashboard_lands_on_root() {
    // Never on the candidate dashboard, never a render.
    assert_eq!(
        decide_as(Role::Candidate, "/vendor/dashboard"),
        Decision::redirect("/")
    );
}

#[test]
fn deep_paths_inside_a_subtree_are_gated_like_the_subtree() {
    assert_eq!(
        decide_anon("/admin/candidates/42/notes"),
        Decision::redirect("/")
    );
    assert_eq!(
        decide_as(Role::Admin, "/admin/candidates/42/notes"),
        Decision::Render
    );
}

#[test]
fn lookalike_prefixes_are_not_gated_as_the_subtree() {
    // "/vendors" is not "/vendor"; it falls through to the default
    // redirect instead of the vendor rule.
    assert_eq!(decide_anon("/vendors"), Decision::redirect("/"));
    assert_eq!(
        decide_as(Role::Client, "/vendors"),
        Decision::redirect(Role::Client.dashboard_path())
    );
}
