use std::sync::Arc;

use pretty_assertions::assert_eq;
use shared_types::{
    AccessPolicy, AuthSession, Decision, MemoryBackend, Role, SessionStore, StorageBackend,
};

use crate::common::session;

fn store_with(raw: &str) -> (SessionStore, MemoryBackend) {
    let backend = MemoryBackend::default();
    backend.write(raw);
    (SessionStore::new(Arc::new(backend.clone())), backend)
}

#[test]
fn empty_storage_loads_as_anonymous() {
    assert_eq!(SessionStore::memory().load(), None);
}

#[test]
fn saved_session_survives_a_reload() {
    let backend = MemoryBackend::default();
    let store = SessionStore::new(Arc::new(backend.clone()));
    store.save(&session(Role::Recruiter));

    // A second store over the same backend is a fresh process.
    let reloaded = SessionStore::new(Arc::new(backend));
    assert_eq!(reloaded.load(), Some(session(Role::Recruiter)));
}

#[test]
fn corrupt_json_loads_as_anonymous_and_is_removed() {
    let (store, backend) = store_with("{\"email\": truncated");
    assert_eq!(store.load(), None);
    assert_eq!(backend.read(), None);
}

#[test]
fn unknown_role_in_storage_loads_as_anonymous() {
    let (store, _) = store_with(r#"{"email":"a@x.com","role":"owner","token":"t"}"#);
    assert_eq!(store.load(), None);
}

#[test]
fn missing_token_in_storage_loads_as_anonymous() {
    // A record missing any field is not a session at all; there is no
    // such thing as a half-logged-in snapshot.
    let (store, _) = store_with(r#"{"email":"a@x.com","role":"candidate"}"#);
    assert_eq!(store.load(), None);
}

#[test]
fn clear_is_idempotent() {
    let store = SessionStore::memory();
    store.save(&session(Role::Admin));
    store.clear();
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn decision_reflects_whole_snapshots_only() {
    // Mid-login: the store still holds nothing, so a decision taken now is
    // fully anonymous.
    let policy = AccessPolicy::default();
    let store = SessionStore::memory();
    let before = store.load();
    assert_eq!(
        policy.decide(before.as_ref(), "/candidate/dashboard"),
        Decision::redirect("/")
    );

    // Login lands the complete record in one write; the next decision sees
    // all of it.
    store.save(&AuthSession::new("a@x.com", Role::Candidate, "fresh-token"));
    let after = store.load();
    assert_eq!(
        policy.decide(after.as_ref(), "/candidate/dashboard"),
        Decision::Render
    );
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn file_backend_round_trips_and_tolerates_corruption() {
    use shared_types::FileBackend;

    let path = std::env::temp_dir().join(format!(
        "hirelink-test-{}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let store = SessionStore::new(Arc::new(FileBackend::at(path.clone())));
    assert_eq!(store.load(), None);

    store.save(&session(Role::Client));
    assert_eq!(store.load(), Some(session(Role::Client)));

    std::fs::write(&path, "garbage").unwrap();
    assert_eq!(store.load(), None);
    assert!(!path.exists(), "corrupt file should have been removed");
}
