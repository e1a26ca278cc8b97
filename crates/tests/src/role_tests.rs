use pretty_assertions::assert_eq;
use shared_types::{AccessPolicy, Role};

#[test]
fn parse_is_strict_about_unknown_roles() {
    assert_eq!(Role::parse("candidate"), Some(Role::Candidate));
    assert_eq!(Role::parse("Admin"), Some(Role::Admin));
    assert_eq!(Role::parse("moderator"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn vendor_is_an_alias_for_the_client_role() {
    assert_eq!(Role::parse("vendor"), Some(Role::Client));
}

#[test]
fn dashboard_table_is_total_and_distinct() {
    let mut seen = Vec::new();
    for role in Role::ALL {
        let dest = role.dashboard_path();
        assert!(!seen.contains(&dest), "duplicate dashboard {dest}");
        seen.push(dest);
    }
    assert_eq!(seen.len(), Role::ALL.len());
}

#[test]
fn every_dashboard_is_guarded_by_exactly_its_own_role() {
    // The redirect table and the guard table must agree: the page a role
    // is sent to must be a page that role is allowed to render.
    let policy = AccessPolicy::default();
    for role in Role::ALL {
        let rule = policy
            .rules
            .iter()
            .find(|r| role.dashboard_path().starts_with(r.prefix))
            .unwrap_or_else(|| panic!("{role:?} dashboard is unguarded"));
        assert_eq!(rule.allowed, &[role], "{role:?}");
    }
}

#[test]
fn serde_rejects_unknown_role_strings() {
    assert!(serde_json::from_str::<Role>("\"root\"").is_err());
    let ok: Role = serde_json::from_str("\"recruiter\"").unwrap();
    assert_eq!(ok, Role::Recruiter);
}
