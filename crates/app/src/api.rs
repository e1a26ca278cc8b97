//! Thin client for the remote job-board REST API. All persistent state
//! lives behind this API; the front-end only renders what it returns.

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    AdminStats, AppError, Application, AuthResponse, AuthSession, CandidateProfile, ClientCompany,
    Job, LoginRequest, PostJobRequest, RecruiterProfile, RegisterRequest, Role,
};
use uuid::Uuid;

/// Base URL of the remote API, fixed at build time.
fn api_base() -> &'static str {
    option_env!("HIRELINK_API_URL").unwrap_or("/api/v1")
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn transport_error(path: &str, err: reqwest::Error) -> AppError {
    tracing::warn!(%err, path, "api request failed");
    AppError::unavailable("Could not reach the server. Check your connection.")
}

/// Turn a non-success response into an `AppError`, preferring the
/// structured body the API sends over a status-derived fallback.
async fn error_from(resp: reqwest::Response) -> AppError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    AppError::from_error_string(&body)
        .unwrap_or_else(|| AppError::from_status(status, "The request was rejected."))
}

async fn handle<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, AppError> {
    if resp.status().is_success() {
        resp.json::<T>()
            .await
            .map_err(|err| AppError::internal(format!("invalid response body: {err}")))
    } else {
        Err(error_from(resp).await)
    }
}

async fn get<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, AppError> {
    let mut req = client().get(url(path));
    if let Some(token) = token {
        req = req.bearer_auth(token);
    }
    let resp = req.send().await.map_err(|err| transport_error(path, err))?;
    handle(resp).await
}

async fn post<B, T>(path: &str, token: Option<&str>, body: &B) -> Result<T, AppError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let mut req = client().post(url(path)).json(body);
    if let Some(token) = token {
        req = req.bearer_auth(token);
    }
    let resp = req.send().await.map_err(|err| transport_error(path, err))?;
    handle(resp).await
}

// ── Auth ──

/// Sign in on one of the portal login pages. The portal's role is part of
/// the endpoint; the API rejects credentials that belong to another portal.
pub async fn login(role: Role, req: &LoginRequest) -> Result<AuthSession, AppError> {
    let resp: AuthResponse = post(&format!("/auth/{}/login", role.as_str()), None, req).await?;
    Ok(resp.into())
}

pub async fn register(role: Role, req: &RegisterRequest) -> Result<AuthSession, AppError> {
    let resp: AuthResponse = post(&format!("/auth/{}/register", role.as_str()), None, req).await?;
    Ok(resp.into())
}

/// Best-effort server-side logout; local state is cleared regardless.
pub async fn logout(token: &str) -> Result<(), AppError> {
    let resp = client()
        .post(url("/auth/logout"))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|err| transport_error("/auth/logout", err))?;
    if resp.status().is_success() {
        Ok(())
    } else {
        Err(error_from(resp).await)
    }
}

// ── Public ──

pub async fn fetch_open_jobs(search: Option<&str>) -> Result<Vec<Job>, AppError> {
    match search {
        Some(q) if !q.is_empty() => {
            get(&format!("/jobs?search={}", urlencoding::encode(q)), None).await
        }
        _ => get("/jobs", None).await,
    }
}

// ── Candidate ──

pub async fn fetch_my_applications(token: &str) -> Result<Vec<Application>, AppError> {
    get("/candidate/applications", Some(token)).await
}

pub async fn apply_to_job(token: &str, job_id: Uuid) -> Result<Application, AppError> {
    post(&format!("/jobs/{job_id}/apply"), Some(token), &()).await
}

// ── Vendor/client ──

pub async fn fetch_client_jobs(token: &str) -> Result<Vec<Job>, AppError> {
    get("/vendor/jobs", Some(token)).await
}

pub async fn post_job(token: &str, req: &PostJobRequest) -> Result<Job, AppError> {
    post("/vendor/jobs", Some(token), req).await
}

// ── Recruiter ──

pub async fn fetch_candidate_pool(token: &str) -> Result<Vec<CandidateProfile>, AppError> {
    get("/recruiter/candidates", Some(token)).await
}

// ── Admin ──

pub async fn fetch_admin_stats(token: &str) -> Result<AdminStats, AppError> {
    get("/admin/stats", Some(token)).await
}

pub async fn fetch_candidates(token: &str) -> Result<Vec<CandidateProfile>, AppError> {
    get("/admin/candidates", Some(token)).await
}

pub async fn fetch_clients(token: &str) -> Result<Vec<ClientCompany>, AppError> {
    get("/admin/clients", Some(token)).await
}

pub async fn fetch_recruiters(token: &str) -> Result<Vec<RecruiterProfile>, AppError> {
    get("/admin/recruiters", Some(token)).await
}
