use dioxus::prelude::*;
use shared_types::{AccessPolicy, SessionStore};

mod api;
mod auth;
mod routes;

use auth::AuthState;
use routes::Route;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The policy tables and the session store are plain context values so
    // the gates stay pure consumers of injected state.
    use_context_provider(AccessPolicy::default);
    let store = use_context_provider(SessionStore::from_platform);

    // Restore the persisted snapshot once at startup. A corrupt or missing
    // record comes back as Anonymous.
    use_context_provider(|| AuthState::restore(store.clone()));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/hirelink.css") }
        Router::<Route> {}
    }
}
