use shared_types::{AccessPolicy, AuthSession, Decision, Role};

pub fn policy() -> AccessPolicy {
    AccessPolicy::default()
}

pub fn session(role: Role) -> AuthSession {
    AuthSession::new("a@x.com", role, "t")
}

/// Decide for an anonymous visitor.
pub fn decide_anon(path: &str) -> Decision {
    policy().decide(None, path)
}

/// Decide for an authenticated session with the given role.
pub fn decide_as(role: Role, path: &str) -> Decision {
    let s = session(role);
    policy().decide(Some(&s), path)
}

/// Every protected path used by the suites, one per guarded subtree plus a
/// deeper page in each.
pub const PROTECTED_PATHS: &[&str] = &[
    "/candidate/dashboard",
    "/candidate/jobs",
    "/vendor/dashboard",
    "/vendor/jobs",
    "/admin/dashboard",
    "/admin/candidates",
    "/recruiter/dashboard",
    "/recruiter/candidates",
];

/// Every guest-only page.
pub const GUEST_PATHS: &[&str] = &[
    "/candidate/login",
    "/candidate/register",
    "/vendor/login",
    "/vendor/register",
    "/recruiter/login",
    "/recruiter/register",
    "/admin/login",
];
