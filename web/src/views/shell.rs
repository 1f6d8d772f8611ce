use dioxus::prelude::*;

use ui::{use_api, use_session, Header};

use crate::Route;

/// Layout wrapper for every content route: header chrome on top, the
/// routed view below. Login/register render outside of it.
#[component]
pub fn AppShell() -> Element {
    let client = use_api();
    let mut session = use_session();
    let nav = use_navigator();

    rsx! {
        Header {
            user: session().user().cloned(),
            on_navigate: move |path: String| {
                nav.push(path);
            },
            on_logout: move |_| {
                let client = client.clone();
                spawn(async move {
                    session.set(api::session::logout(&client).await);
                    nav.push(Route::Home {});
                });
            },
        }

        main {
            class: "app-main",
            Outlet::<Route> {}
        }
    }
}
