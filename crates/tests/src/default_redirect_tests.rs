use pretty_assertions::assert_eq;
use shared_types::{Decision, Role};

use crate::common::{decide_anon, decide_as};

#[test]
fn anonymous_root_renders_the_public_home() {
    assert_eq!(decide_anon("/"), Decision::Render);
}

#[test]
fn anonymous_unmatched_path_goes_to_the_public_home() {
    assert_eq!(decide_anon("/no/such/page"), Decision::redirect("/"));
    assert_eq!(decide_anon("/about"), Decision::redirect("/"));
}

#[test]
fn admin_at_root_is_sent_to_the_admin_dashboard() {
    assert_eq!(
        decide_as(Role::Admin, "/"),
        Decision::redirect("/admin/dashboard")
    );
}

#[test]
fn every_role_lands_on_its_own_dashboard_from_unmatched_paths() {
    for role in Role::ALL {
        for path in ["/", "/no/such/page", "/profile"] {
            assert_eq!(
                decide_as(role, path),
                Decision::redirect(role.dashboard_path()),
                "{role:?} at {path}"
            );
        }
    }
}

#[test]
fn default_redirect_is_idempotent() {
    // Two decisions from the same stable state give the same destination,
    // and deciding again from the destination renders.
    for role in Role::ALL {
        let first = decide_as(role, "/");
        let second = decide_as(role, "/");
        assert_eq!(first, second);

        if let Decision::Redirect(dest) = first {
            assert_eq!(decide_as(role, &dest), Decision::Render);
        }
    }
}

#[test]
fn dashboard_destinations_never_point_at_another_roles_subtree() {
    for role in Role::ALL {
        let dest = role.dashboard_path();
        for other in Role::ALL {
            if other == role {
                continue;
            }
            assert!(
                !dest.starts_with(&format!("/{}", other.as_str())),
                "{role:?} dashboard {dest} overlaps {other:?}"
            );
        }
    }
}
