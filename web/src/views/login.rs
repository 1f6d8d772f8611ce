use dioxus::prelude::*;

use ui::{use_api, use_session};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let client = use_api();
    let mut session = use_session();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: this page has nothing to offer.
    if session().is_authenticated() {
        nav.replace(Route::Home {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Ingresa tu correo y contraseña".to_string()));
                return;
            }

            loading.set(true);
            match api::session::login(&client, &e, &p).await {
                Ok(state) => {
                    let is_admin = state.user().map(|u| u.is_admin()).unwrap_or(false);
                    let authenticated = state.is_authenticated();
                    session.set(state);
                    loading.set(false);
                    if authenticated {
                        if is_admin {
                            nav.push(Route::Dashboard {});
                        } else {
                            nav.push(Route::Home {});
                        }
                    } else {
                        error.set(Some("No se pudo cargar tu perfil".to_string()));
                    }
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.user_message()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div {
                    class: "auth-header",
                    h2 { class: "auth-title", "Iniciar sesión" }
                    p { class: "auth-subtitle", "Ingresa con tus credenciales" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    if let Some(err) = error() {
                        div { class: "form-alert", "{err}" }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "password", "Contraseña" }
                        div {
                            class: "password-wrapper",
                            input {
                                id: "password",
                                r#type: if show_password() { "text" } else { "password" },
                                value: password(),
                                oninput: move |evt| password.set(evt.value()),
                            }
                            button {
                                r#type: "button",
                                class: "toggle-password",
                                onclick: move |_| show_password.set(!show_password()),
                                if show_password() { "Ocultar" } else { "Mostrar" }
                            }
                        }
                    }

                    div {
                        class: "auth-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Cargando..." } else { "Entrar" }
                        }
                        Link { to: Route::Register {}, class: "btn btn-outline", "Registrarse" }
                    }
                }
            }
        }
    }
}
