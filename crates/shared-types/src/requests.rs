use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::models::Role;
use crate::session::AuthSession;

/// Request DTO for signing in on one of the portal login pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
}

/// Request DTO for the candidate/vendor/recruiter registration pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub full_name: String,
}

/// Request DTO for posting a job from the vendor portal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct PostJobRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Job title is required"))
    )]
    pub title: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Description is required"))
    )]
    pub description: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Location is required"))
    )]
    pub location: String,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
}

/// Response body returned by the API's login and register endpoints.
/// Collapsed into an [`AuthSession`] before it reaches the auth state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub email: String,
    pub role: Role,
    pub token: String,
}

impl From<AuthResponse> for AuthSession {
    fn from(resp: AuthResponse) -> Self {
        AuthSession::new(resp.email, resp.role, resp.token)
    }
}

#[cfg(all(test, feature = "validation"))]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn login_request_rejects_bad_email() {
        let req = LoginRequest {
            email: "not-an-email".into(),
            password: "long enough".into(),
        };
        let errs = req.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("email"));
    }

    #[test]
    fn login_request_rejects_short_password() {
        let req = LoginRequest {
            email: "a@x.com".into(),
            password: "short".into(),
        };
        let errs = req.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("password"));
    }

    #[test]
    fn post_job_request_accepts_minimal_posting() {
        let req = PostJobRequest {
            title: "Backend Engineer".into(),
            description: "Build things".into(),
            location: "Remote".into(),
            salary_min: None,
            salary_max: None,
        };
        assert!(req.validate().is_ok());
    }
}
