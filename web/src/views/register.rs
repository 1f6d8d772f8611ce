use std::collections::HashMap;

use dioxus::prelude::*;

use api::RegisterPayload;
use ui::{push_toast, use_api, use_toasts, ToastLevel};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let client = use_api();
    let nav = use_navigator();
    let mut toasts = use_toasts();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, Vec<String>>::new);
    let mut loading = use_signal(|| false);

    let field_error = move |field: &str| {
        field_errors()
            .get(field)
            .and_then(|msgs| msgs.first().cloned())
    };

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            field_errors.set(HashMap::new());

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            if n.is_empty() {
                error.set(Some("Nombre requerido".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Email requerido".to_string()));
                return;
            }
            if p.len() < 6 {
                error.set(Some("La contraseña debe tener al menos 6 caracteres".to_string()));
                return;
            }
            if p != confirm() {
                error.set(Some("Las contraseñas no coinciden".to_string()));
                return;
            }

            let payload = RegisterPayload {
                name: n,
                email: e,
                password: p.clone(),
                password_confirmation: p,
                rol: None,
            };

            loading.set(true);
            match api::services::auth::register(&client, &payload).await {
                Ok(_) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Cuenta creada. Ahora puedes iniciar sesión.",
                    );
                    nav.push(Route::Login {});
                }
                Err(err) => {
                    loading.set(false);
                    if let Some(errors) = err.field_errors() {
                        field_errors.set(errors.clone());
                    }
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
                    h2 { class: "auth-title", "Crear cuenta" }
                    p { class: "auth-subtitle", "Regístrate para hacer seguimiento a tus solicitudes" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_register,

                    if let Some(err) = error() {
                        div { class: "form-alert", "{err}" }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "name", "Nombre" }
                        input {
                            id: "name",
                            r#type: "text",
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                        if let Some(msg) = field_error("name") {
                            small { class: "field-error", "{msg}" }
                        }
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
                        if let Some(msg) = field_error("email") {
                            small { class: "field-error", "{msg}" }
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "password", "Contraseña (mínimo 6 caracteres)" }
                        input {
                            id: "password",
                            r#type: "password",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                        if let Some(msg) = field_error("password") {
                            small { class: "field-error", "{msg}" }
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "confirm", "Confirmar contraseña" }
                        input {
                            id: "confirm",
                            r#type: "password",
                            value: confirm(),
                            oninput: move |evt| confirm.set(evt.value()),
                        }
                    }

                    div {
                        class: "auth-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Creando cuenta..." } else { "Registrarse" }
                        }
                        Link { to: Route::Login {}, class: "btn btn-outline", "Ya tengo cuenta" }
                    }
                }
            }
        }
    }
}
