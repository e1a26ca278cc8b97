use crate::models::Role;
use crate::session::AuthSession;

/// Outcome of an access decision for one requested path.
///
/// A `Redirect` must be applied with replace semantics so the browser back
/// button cannot return to the denied page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Render the requested view.
    Render,
    /// Replace the current location with this path.
    Redirect(String),
}

impl Decision {
    pub fn redirect(path: impl Into<String>) -> Self {
        Decision::Redirect(path.into())
    }
}

/// A protected path prefix and the roles allowed under it.
#[derive(Debug, Clone, Copy)]
pub struct GuardRule {
    pub prefix: &'static str,
    pub allowed: &'static [Role],
}

/// Pages for unauthenticated visitors only. Checked before the guard rules
/// because each one sits under a role-gated prefix.
const GUEST_PREFIXES: &[&str] = &[
    "/candidate/login",
    "/candidate/register",
    "/vendor/login",
    "/vendor/register",
    "/recruiter/login",
    "/recruiter/register",
    "/admin/login",
];

/// Role-gated subtrees. The `/vendor` subtree belongs to the `client` role;
/// "vendor" is the employer-facing name of the same accounts.
const GUARD_RULES: &[GuardRule] = &[
    GuardRule { prefix: "/candidate", allowed: &[Role::Candidate] },
    GuardRule { prefix: "/vendor", allowed: &[Role::Client] },
    GuardRule { prefix: "/admin", allowed: &[Role::Admin] },
    GuardRule { prefix: "/recruiter", allowed: &[Role::Recruiter] },
];

/// Route authorization tables.
///
/// `decide` is a pure function of the session snapshot, the requested path,
/// and these tables. It performs no I/O and cannot fail; corrupt persisted
/// state is normalized to `None` by the session store before it ever gets
/// here.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    pub guest_prefixes: &'static [&'static str],
    pub rules: &'static [GuardRule],
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            guest_prefixes: GUEST_PREFIXES,
            rules: GUARD_RULES,
        }
    }
}

impl AccessPolicy {
    /// Decide what rendering `path` should do under the given session.
    ///
    /// Evaluation order: guest pages, then role-gated subtrees, then the
    /// default redirect for everything else. Denials redirect to `/` and
    /// carry no reason: an unauthorized visitor lands on the public home
    /// exactly as if they had never navigated, and learns nothing about
    /// which paths exist.
    pub fn decide(&self, session: Option<&AuthSession>, path: &str) -> Decision {
        if self.is_guest_page(path) {
            return match session {
                // A logged-in user never sees a login/registration form.
                Some(s) => Decision::redirect(s.role.dashboard_path()),
                None => Decision::Render,
            };
        }

        if let Some(rule) = self.matching_rule(path) {
            return match session {
                Some(s) if rule.allowed.contains(&s.role) => Decision::Render,
                // Anonymous, or authenticated with the wrong role. Both go
                // to the public root, never into another role's subtree.
                _ => Decision::redirect("/"),
            };
        }

        // Default redirect: unmatched paths and the root itself.
        match session {
            Some(s) => Decision::redirect(s.role.dashboard_path()),
            None if path == "/" => Decision::Render,
            None => Decision::redirect("/"),
        }
    }

    pub fn is_guest_page(&self, path: &str) -> bool {
        self.guest_prefixes.iter().any(|p| prefix_matches(p, path))
    }

    fn matching_rule(&self, path: &str) -> Option<&GuardRule> {
        self.rules.iter().find(|r| prefix_matches(r.prefix, path))
    }
}

/// Segment-aware prefix match: `/vendor` matches `/vendor` and
/// `/vendor/jobs` but not `/vendors`.
fn prefix_matches(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session(role: Role) -> AuthSession {
        AuthSession::new("a@x.com", role, "t")
    }

    #[test]
    fn prefix_match_is_segment_aware() {
        assert!(prefix_matches("/vendor", "/vendor"));
        assert!(prefix_matches("/vendor", "/vendor/jobs"));
        assert!(!prefix_matches("/vendor", "/vendors"));
        assert!(!prefix_matches("/vendor", "/admin/vendor"));
    }

    #[test]
    fn every_guest_prefix_sits_under_a_guard_rule() {
        // Ordering matters: if a guest page were not shadowed by a guard
        // rule it would still behave, but the table is built so each login
        // and register page lives inside the subtree it signs into.
        let policy = AccessPolicy::default();
        for guest in policy.guest_prefixes {
            assert!(
                policy.matching_rule(guest).is_some(),
                "{guest} is not under any guarded subtree"
            );
        }
    }

    #[test]
    fn every_role_has_exactly_one_subtree() {
        let policy = AccessPolicy::default();
        for role in Role::ALL {
            let count = policy
                .rules
                .iter()
                .filter(|r| r.allowed.contains(&role))
                .count();
            assert_eq!(count, 1, "{role:?} should guard exactly one subtree");
        }
    }

    #[test]
    fn dashboard_of_each_role_renders_for_that_role() {
        let policy = AccessPolicy::default();
        for role in Role::ALL {
            let s = session(role);
            assert_eq!(
                policy.decide(Some(&s), role.dashboard_path()),
                Decision::Render,
                "{role:?} denied its own dashboard"
            );
        }
    }

    #[test]
    fn anonymous_root_renders() {
        let policy = AccessPolicy::default();
        assert_eq!(policy.decide(None, "/"), Decision::Render);
    }
}
