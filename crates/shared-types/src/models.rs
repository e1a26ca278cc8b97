use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Job-board user role. The role on a session determines which route
/// subtree that session may render.
///
/// - `Candidate` — job seekers: browse openings, apply, track applications.
/// - `Client` — employer/vendor accounts: post openings, review applicants.
/// - `Admin` — back-office: manage clients, candidates, and recruiters.
/// - `Recruiter` — sourcing staff: candidate pool and placement pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Client,
    Admin,
    Recruiter,
}

impl Role {
    /// Every role, in declaration order. Used to assert table totality.
    pub const ALL: [Role; 4] = [Role::Candidate, Role::Client, Role::Admin, Role::Recruiter];

    /// Lowercase string for storage and the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Client => "client",
            Role::Admin => "admin",
            Role::Recruiter => "recruiter",
        }
    }

    /// Strict parse. Unknown values are `None`, never a default role — a
    /// corrupt stored role must fall back to Anonymous, not into a subtree.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "candidate" => Some(Role::Candidate),
            "client" | "vendor" => Some(Role::Client),
            "admin" => Some(Role::Admin),
            "recruiter" => Some(Role::Recruiter),
            _ => None,
        }
    }

    /// Default landing page for an authenticated session with this role.
    /// Total over the enum: every role has exactly one dashboard.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Candidate => "/candidate/dashboard",
            Role::Client => "/vendor/dashboard",
            Role::Admin => "/admin/dashboard",
            Role::Recruiter => "/recruiter/dashboard",
        }
    }
}

/// Lifecycle of a posted job opening.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Open,
    Paused,
    Filled,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::Paused => "paused",
            JobStatus::Filled => "filled",
            JobStatus::Closed => "closed",
        }
    }
}

/// A job opening posted by a client company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub id: Uuid,
    pub client_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub status: JobStatus,
    pub posted_at: DateTime<Utc>,
}

/// Status of a candidate's application to a job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Submitted,
    Screening,
    Interview,
    Offered,
    Rejected,
    Withdrawn,
}

/// A candidate's application to a specific job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub candidate_id: Uuid,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// A job seeker's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateProfile {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub headline: Option<String>,
    pub skills: Vec<String>,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An employer/vendor company account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientCompany {
    pub id: Uuid,
    pub email: String,
    pub company_name: String,
    pub contact_name: String,
    pub website: Option<String>,
    pub open_jobs: i64,
    pub created_at: DateTime<Utc>,
}

/// A recruiter account with its sourcing stats.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecruiterProfile {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub active_placements: i64,
    pub created_at: DateTime<Utc>,
}

/// Aggregate counts shown on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AdminStats {
    pub candidate_count: i64,
    pub client_count: i64,
    pub recruiter_count: i64,
    pub open_job_count: i64,
}
