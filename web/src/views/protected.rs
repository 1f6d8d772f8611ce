use dioxus::prelude::*;

use api::Access;
use ui::use_session;

use crate::Route;

/// Gate for routes that need a session (and optionally a role).
///
/// While the session is still resolving the guard renders a placeholder
/// instead of deciding; an authenticated user without the required role is
/// sent to the public home rather than to login.
#[component]
pub fn Protected(
    #[props(!optional)] required_role: Option<String>,
    children: Element,
) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let state = session();

    if state.is_loading() {
        return rsx! {
            div { class: "guard-checking", "Comprobando sesión..." }
        };
    }

    match api::check_access(state.user(), required_role.as_deref()) {
        Access::Allow => rsx! {
            {children}
        },
        Access::RedirectLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        Access::RedirectHome => {
            nav.replace(Route::Home {});
            rsx! {}
        }
    }
}
