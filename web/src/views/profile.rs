use dioxus::prelude::*;

use ui::{push_toast, use_api, use_session, use_toasts, ToastLevel};

use super::Protected;

#[component]
pub fn Profile() -> Element {
    rsx! {
        Protected {
            required_role: None,
            ProfileInner {}
        }
    }
}

#[component]
fn ProfileInner() -> Element {
    let client = use_api();
    let mut session = use_session();
    let mut toasts = use_toasts();
    let mut refreshing = use_signal(|| false);

    let handle_refresh = move |_| {
        let client = client.clone();
        spawn(async move {
            refreshing.set(true);
            let next = api::session::refresh_profile(&client).await;
            let ok = next.is_authenticated();
            session.set(next);
            refreshing.set(false);
            if ok {
                push_toast(&mut toasts, ToastLevel::Success, "Datos actualizados");
            }
            // A failed refresh drops the session; the guard redirects.
        });
    };

    rsx! {
        div {
            class: "form-page",
            div {
                class: "form-card",
                div {
                    class: "form-card-header",
                    h2 { class: "form-title", "Mi perfil" }
                    p { class: "form-subtitle", "Datos de tu cuenta en el portal" }
                }

                if let Some(ref user) = session().user().cloned() {
                    div {
                        class: "form-body profile-grid",
                        div {
                            class: "profile-row",
                            span { class: "profile-label", "Nombre" }
                            span { "{user.name}" }
                        }
                        div {
                            class: "profile-row",
                            span { class: "profile-label", "Email" }
                            span { "{user.email}" }
                        }
                        div {
                            class: "profile-row",
                            span { class: "profile-label", "Rol" }
                            span { {user.role_label()} }
                        }
                        if let Some(ref estado) = user.estado {
                            div {
                                class: "profile-row",
                                span { class: "profile-label", "Estado" }
                                span { "{estado}" }
                            }
                        }

                        div {
                            class: "profile-actions",
                            button {
                                class: "btn btn-secondary",
                                disabled: refreshing(),
                                onclick: handle_refresh,
                                if refreshing() { "Actualizando..." } else { "Actualizar datos" }
                            }
                        }
                    }
                }
            }
        }
    }
}
