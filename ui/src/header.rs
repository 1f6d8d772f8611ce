//! Top navigation chrome.
//!
//! The header does not know the platform crate's route table; navigation is
//! reported through `on_navigate` with the target path and the shell maps
//! it onto the router.

use api::User;
use dioxus::prelude::*;

#[component]
pub fn Header(
    #[props(!optional)] user: Option<User>,
    on_navigate: EventHandler<String>,
    on_logout: EventHandler<()>,
) -> Element {
    let is_admin = user.as_ref().is_some_and(|u| u.is_admin());

    rsx! {
        header {
            class: "site-header",
            div {
                class: "site-brand",
                onclick: move |_| on_navigate.call("/".to_string()),
                span { class: "site-brand-name", "Portal Ciudadano" }
            }

            nav {
                class: "site-nav",
                button {
                    class: "nav-item",
                    onclick: move |_| on_navigate.call("/".to_string()),
                    "Inicio"
                }
                button {
                    class: "nav-item",
                    onclick: move |_| on_navigate.call("/comunicados".to_string()),
                    "Comunicados"
                }
                button {
                    class: "nav-item",
                    onclick: move |_| on_navigate.call("/formularios".to_string()),
                    "Formularios"
                }
                button {
                    class: "nav-item",
                    onclick: move |_| on_navigate.call("/formularios/create".to_string()),
                    "Nuevo formulario"
                }
                if is_admin {
                    button {
                        class: "nav-item nav-item-admin",
                        onclick: move |_| on_navigate.call("/admin/dashboard".to_string()),
                        "Panel"
                    }
                }
            }

            div {
                class: "site-user",
                if let Some(ref u) = user {
                    button {
                        class: "user-name",
                        onclick: move |_| on_navigate.call("/profile".to_string()),
                        "{u.name}"
                    }
                    span { class: "user-role", {u.role_label()} }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_logout.call(()),
                        "Salir"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_navigate.call("/login".to_string()),
                        "Iniciar sesión"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_navigate.call("/register".to_string()),
                        "Registrarse"
                    }
                }
            }
        }
    }
}
