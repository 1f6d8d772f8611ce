use std::collections::HashMap;

use dioxus::prelude::*;

use api::{ComunicadoDraft, EstadoComunicado, ImageUpload};
use ui::{push_toast, use_api, use_toasts, ToastLevel};

use super::Protected;
use crate::Route;

#[component]
pub fn ComunicadoCreate() -> Element {
    rsx! {
        Protected {
            required_role: Some("admin".to_string()),
            ComunicadoForm { id: None }
        }
    }
}

#[component]
pub fn ComunicadoEdit(id: i64) -> Element {
    rsx! {
        Protected {
            required_role: Some("admin".to_string()),
            ComunicadoForm { id: Some(id) }
        }
    }
}

fn estado_from(value: &str) -> EstadoComunicado {
    match value {
        "inactivo" => EstadoComunicado::Inactivo,
        _ => EstadoComunicado::Activo,
    }
}

fn mime_for(file_name: &str) -> Option<&'static str> {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".png") {
        Some("image/png")
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        Some("image/jpeg")
    } else {
        None
    }
}

fn valid_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && value
            .chars()
            .enumerate()
            .all(|(i, c)| matches!(i, 4 | 7) || c.is_ascii_digit())
}

fn valid_time(value: &str) -> bool {
    let Some((h, m)) = value.split_once(':') else {
        return false;
    };
    let hours_ok = h.len() == 2 && h.parse::<u8>().map(|v| v < 24).unwrap_or(false);
    let minutes_ok = m.len() == 2 && m.parse::<u8>().map(|v| v < 60).unwrap_or(false);
    hours_ok && minutes_ok
}

#[component]
fn ComunicadoForm(#[props(!optional)] id: Option<i64>) -> Element {
    let client = use_api();
    let nav = use_navigator();
    let mut toasts = use_toasts();

    let mut titulo = use_signal(String::new);
    let mut descripcion = use_signal(String::new);
    let mut fecha = use_signal(String::new);
    let mut hora = use_signal(|| "08:00".to_string());
    let mut publicador = use_signal(String::new);
    let mut entidad = use_signal(String::new);
    let mut estado = use_signal(|| EstadoComunicado::Activo);
    let mut imagen = use_signal(|| Option::<ImageUpload>::None);
    let mut existing_image = use_signal(|| Option::<String>::None);

    let mut field_errors = use_signal(HashMap::<String, Vec<String>>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut loading = use_signal(|| id.is_some());

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let Some(id) = id else { return };
                match api::services::comunicados::show(&client, id).await {
                    Ok(c) => {
                        titulo.set(c.titulo.unwrap_or_default());
                        descripcion.set(c.descripcion.unwrap_or_default());
                        fecha.set(
                            c.fecha_publicacion
                                .map(|f| f.chars().take(10).collect())
                                .unwrap_or_default(),
                        );
                        hora.set(
                            c.hora_publicacion
                                .map(|h| h.chars().take(5).collect())
                                .unwrap_or_else(|| "08:00".to_string()),
                        );
                        publicador.set(c.publicador.unwrap_or_default());
                        entidad.set(c.entidad.unwrap_or_default());
                        estado.set(c.estado);
                        existing_image.set(c.imagen.map(|path| client.storage_url(&path)));
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
                loading.set(false);
            }
        }
    });

    let field_error = move |field: &str| {
        field_errors()
            .get(field)
            .and_then(|msgs| msgs.first().cloned())
    };

    let handle_file = move |evt: FormEvent| {
        spawn(async move {
            let Some(engine) = evt.files() else { return };
            let Some(name) = engine.files().first().cloned() else {
                imagen.set(None);
                return;
            };
            let Some(mime) = mime_for(&name) else {
                error.set(Some("La imagen debe ser JPG o PNG".to_string()));
                return;
            };
            if let Some(bytes) = engine.read_file(&name).await {
                imagen.set(Some(ImageUpload {
                    file_name: name,
                    mime: mime.to_string(),
                    bytes,
                }));
            }
        });
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            field_errors.set(HashMap::new());

            if titulo().trim().is_empty() {
                error.set(Some("Título requerido".to_string()));
                return;
            }
            if descripcion().trim().is_empty() {
                error.set(Some("Descripción requerida".to_string()));
                return;
            }
            if !valid_date(&fecha()) {
                error.set(Some("Fecha en formato YYYY-MM-DD".to_string()));
                return;
            }
            if !valid_time(&hora()) {
                error.set(Some("Hora en formato HH:MM".to_string()));
                return;
            }
            if publicador().trim().is_empty() || entidad().trim().is_empty() {
                error.set(Some("Publicador y entidad son requeridos".to_string()));
                return;
            }

            let draft = ComunicadoDraft {
                titulo: titulo().trim().to_string(),
                descripcion: descripcion().trim().to_string(),
                fecha_publicacion: fecha(),
                hora_publicacion: hora(),
                publicador: publicador().trim().to_string(),
                entidad: entidad().trim().to_string(),
                estado: estado(),
                imagen: imagen(),
            };

            saving.set(true);
            let result = match id {
                Some(id) => api::services::comunicados::update(&client, id, &draft).await,
                None => api::services::comunicados::create(&client, &draft).await,
            };
            saving.set(false);

            match result {
                Ok(ack) => {
                    let fallback = if id.is_some() {
                        "Comunicado actualizado"
                    } else {
                        "Comunicado creado"
                    };
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        ack.message.unwrap_or_else(|| fallback.to_string()),
                    );
                    nav.push(Route::ComunicadosList {});
                }
                Err(err) => {
                    if let Some(errors) = err.field_errors() {
                        field_errors.set(errors.clone());
                    }
                    error.set(Some(err.user_message()));
                    push_toast(&mut toasts, ToastLevel::Error, err.user_message());
                }
            }
        });
    };

    let heading = if id.is_some() { "Editar Comunicado" } else { "Crear Comunicado" };

    rsx! {
        div {
            class: "comunicado-page",
            div {
                class: "comunicado-card",
                div {
                    class: "comunicado-card-header",
                    h2 { class: "comunicado-title", "{heading}" }
                    p { class: "comunicado-subtitle", "Registra la publicación que desees compartir" }
                }

                if loading() {
                    div { class: "list-loading", "Cargando..." }
                } else {
                    form {
                        class: "comunicado-body",
                        onsubmit: handle_submit,

                        if let Some(err) = error() {
                            div { class: "form-alert", "{err}" }
                        }

                        div {
                            class: "form-field form-field-full",
                            label { class: "form-label", "Título" }
                            input {
                                class: "form-input",
                                maxlength: "255",
                                value: titulo(),
                                oninput: move |evt| titulo.set(evt.value()),
                            }
                            if let Some(msg) = field_error("titulo") {
                                small { class: "form-error", "{msg}" }
                            }
                        }

                        div {
                            class: "form-field",
                            label { class: "form-label", "Imagen (JPG/PNG, opcional)" }
                            input {
                                class: "form-file",
                                r#type: "file",
                                accept: "image/jpeg,image/png",
                                onchange: handle_file,
                            }
                            if let Some(img) = imagen() {
                                small { class: "form-hint", "Archivo seleccionado: {img.file_name}" }
                            } else if let Some(url) = existing_image() {
                                div {
                                    class: "comunicado-image-preview",
                                    img { src: "{url}", alt: "Imagen actual" }
                                }
                            }
                            if let Some(msg) = field_error("imagen") {
                                small { class: "form-error", "{msg}" }
                            }
                        }

                        div {
                            class: "form-field form-field-full",
                            label { class: "form-label", "Descripción" }
                            textarea {
                                class: "form-input",
                                rows: "5",
                                value: descripcion(),
                                oninput: move |evt| descripcion.set(evt.value()),
                            }
                            if let Some(msg) = field_error("descripcion") {
                                small { class: "form-error", "{msg}" }
                            }
                        }

                        div {
                            class: "form-field",
                            label { class: "form-label", "Fecha de publicación (YYYY-MM-DD)" }
                            input {
                                class: "form-input",
                                placeholder: "2025-09-20",
                                value: fecha(),
                                oninput: move |evt| fecha.set(evt.value()),
                            }
                            if let Some(msg) = field_error("fecha_publicacion") {
                                small { class: "form-error", "{msg}" }
                            }
                        }

                        div {
                            class: "form-field",
                            label { class: "form-label", "Hora (HH:MM)" }
                            input {
                                class: "form-input",
                                placeholder: "08:00",
                                value: hora(),
                                oninput: move |evt| hora.set(evt.value()),
                            }
                            if let Some(msg) = field_error("hora_publicacion") {
                                small { class: "form-error", "{msg}" }
                            }
                        }

                        div {
                            class: "form-field",
                            label { class: "form-label", "Publicador" }
                            input {
                                class: "form-input",
                                maxlength: "255",
                                value: publicador(),
                                oninput: move |evt| publicador.set(evt.value()),
                            }
                            if let Some(msg) = field_error("publicador") {
                                small { class: "form-error", "{msg}" }
                            }
                        }

                        div {
                            class: "form-field",
                            label { class: "form-label", "Entidad" }
                            input {
                                class: "form-input",
                                maxlength: "255",
                                value: entidad(),
                                oninput: move |evt| entidad.set(evt.value()),
                            }
                            if let Some(msg) = field_error("entidad") {
                                small { class: "form-error", "{msg}" }
                            }
                        }

                        div {
                            class: "form-field",
                            label { class: "form-label", "Estado" }
                            select {
                                class: "form-input",
                                value: "{estado}",
                                onchange: move |evt| estado.set(estado_from(&evt.value())),
                                option { value: "activo", "activo" }
                                option { value: "inactivo", "inactivo" }
                            }
                        }

                        div {
                            class: "form-actions",
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: saving(),
                                if saving() { "Guardando..." } else { "Guardar" }
                            }
                            Link { to: Route::ComunicadosList {}, class: "btn btn-outline", "Cancelar" }
                        }
                    }
                }
            }
        }
    }
}
