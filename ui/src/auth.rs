//! Session context for the UI.
//!
//! [`AuthProvider`] owns the one process-wide [`SessionState`] signal and
//! the shared [`ApiClient`]. It resolves the persisted credential on mount
//! and subscribes to the HTTP adapter's unauthorized broadcast, so a 401 on
//! any call drops the session no matter which view issued it.

use api::{ApiClient, SessionEvent, SessionState};
use dioxus::prelude::*;
use futures::StreamExt;

/// Current session state. Updates when the user logs in or out, or when the
/// backend invalidates the credential.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Shared HTTP client for the whole app.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_context_provider(ApiClient::from_settings);
    let mut session = use_context_provider(|| Signal::new(SessionState::Initializing));

    // Resolve the persisted credential once on mount.
    let _init = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                session.set(api::session::initialize(&client).await);
            }
        }
    });

    // Unauthorized observer: applying the event while already anonymous is
    // a no-op, so concurrent 401s collapse into one transition.
    use_hook(|| {
        let mut unauthorized = client.subscribe_unauthorized();
        spawn(async move {
            while unauthorized.next().await.is_some() {
                tracing::info!("session invalidated by server signal");
                let next = session.peek().clone().apply(SessionEvent::Unauthorized);
                session.set(next);
            }
        });
    });

    rsx! {
        {children}
    }
}
