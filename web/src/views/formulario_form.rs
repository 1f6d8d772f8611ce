use std::collections::HashMap;

use dioxus::prelude::*;

use api::{Charla, FormularioDraft};
use ui::{push_toast, use_api, use_toasts, ToastLevel};

use super::Protected;
use crate::Route;

/// Public submission form; the backend associates the record with the
/// session when the citizen is signed in.
#[component]
pub fn FormularioCreate() -> Element {
    rsx! {
        FormularioForm { id: None }
    }
}

/// Owner or admin edit; the backend enforces ownership, the route only
/// requires a session.
#[component]
pub fn FormularioEdit(id: i64) -> Element {
    rsx! {
        Protected {
            required_role: None,
            FormularioForm { id: Some(id) }
        }
    }
}

fn charla_from(value: &str) -> Charla {
    match value {
        "virtual" => Charla::Virtual,
        "presencial" => Charla::Presencial,
        _ => Charla::Ninguno,
    }
}

#[component]
fn FormularioForm(#[props(!optional)] id: Option<i64>) -> Element {
    let client = use_api();
    let nav = use_navigator();
    let mut toasts = use_toasts();

    let mut nombres = use_signal(String::new);
    let mut dni = use_signal(String::new);
    let mut ruc = use_signal(String::new);
    let mut celular = use_signal(String::new);
    let mut direccion = use_signal(String::new);
    let mut asociacion = use_signal(String::new);
    let mut propiedad = use_signal(|| false);
    let mut titulo = use_signal(|| false);
    let mut reg_publico = use_signal(|| false);
    let mut charlas = use_signal(|| Charla::Ninguno);
    let mut adicional = use_signal(String::new);

    let mut field_errors = use_signal(HashMap::<String, Vec<String>>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut loading = use_signal(|| id.is_some());

    // Edit mode: prefill from the existing record.
    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let Some(id) = id else { return };
                match api::services::formularios::show(&client, id).await {
                    Ok(f) => {
                        nombres.set(f.nombres_apellidos);
                        dni.set(f.dni);
                        ruc.set(f.ruc.unwrap_or_default());
                        celular.set(f.celular);
                        direccion.set(f.direccion);
                        asociacion.set(f.asociacion.unwrap_or_default());
                        propiedad.set(f.propiedad);
                        titulo.set(f.titulo);
                        reg_publico.set(f.reg_publico);
                        charlas.set(f.charlas);
                        adicional.set(f.adicional.unwrap_or_default());
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

    let validate = move || -> Result<(), String> {
        if nombres().trim().is_empty() {
            return Err("Nombre obligatorio".into());
        }
        let d = dni();
        if d.len() != 8 || !d.chars().all(|c| c.is_ascii_digit()) {
            return Err("DNI debe tener 8 dígitos".into());
        }
        let c = celular();
        if c.len() != 9 || !c.chars().all(|ch| ch.is_ascii_digit()) {
            return Err("Celular debe tener 9 dígitos".into());
        }
        if direccion().trim().is_empty() {
            return Err("Dirección obligatoria".into());
        }
        Ok(())
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            field_errors.set(HashMap::new());

            if let Err(msg) = validate() {
                error.set(Some(msg));
                return;
            }

            let optional = |s: String| {
                let s = s.trim().to_string();
                (!s.is_empty()).then_some(s)
            };
            let draft = FormularioDraft {
                nombres_apellidos: nombres().trim().to_string(),
                dni: dni(),
                ruc: optional(ruc()),
                celular: celular(),
                direccion: direccion().trim().to_string(),
                asociacion: optional(asociacion()),
                propiedad: propiedad(),
                titulo: titulo(),
                reg_publico: reg_publico(),
                charlas: charlas(),
                adicional: optional(adicional()),
            };

            saving.set(true);
            let result = match id {
                Some(id) => api::services::formularios::update(&client, id, &draft).await,
                None => api::services::formularios::create(&client, &draft).await,
            };
            saving.set(false);

            match result {
                Ok(ack) => {
                    let fallback = if id.is_some() {
                        "Formulario actualizado"
                    } else {
                        "Formulario creado con éxito"
                    };
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        ack.message.unwrap_or_else(|| fallback.to_string()),
                    );
                    nav.push(Route::FormulariosList {});
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

    let heading = if id.is_some() { "Editar Formulario" } else { "Crear Formulario" };

    rsx! {
        div {
            class: "form-page",
            div {
                class: "form-card",
                div {
                    class: "form-card-header",
                    h2 { class: "form-title", "{heading}" }
                    p { class: "form-subtitle", "Registra la solicitud con los datos solicitados" }
                }

                if loading() {
                    div { class: "list-loading", "Cargando..." }
                } else {
                    form {
                        class: "form-body",
                        onsubmit: handle_submit,

                        if let Some(err) = error() {
                            div { class: "form-alert", "{err}" }
                        }

                        div {
                            class: "form-grid",
                            div {
                                class: "form-field",
                                label { class: "form-label", "Nombres y apellidos" }
                                input {
                                    class: "form-input",
                                    value: nombres(),
                                    oninput: move |evt| nombres.set(evt.value()),
                                }
                                if let Some(msg) = field_error("nombres_apellidos") {
                                    small { class: "form-error", "{msg}" }
                                }
                            }

                            div {
                                class: "form-field",
                                label { class: "form-label", "DNI" }
                                input {
                                    class: "form-input",
                                    maxlength: "8",
                                    value: dni(),
                                    oninput: move |evt| dni.set(evt.value()),
                                }
                                if let Some(msg) = field_error("dni") {
                                    small { class: "form-error", "{msg}" }
                                }
                            }

                            div {
                                class: "form-field",
                                label { class: "form-label", "RUC (opcional)" }
                                input {
                                    class: "form-input",
                                    value: ruc(),
                                    oninput: move |evt| ruc.set(evt.value()),
                                }
                                if let Some(msg) = field_error("ruc") {
                                    small { class: "form-error", "{msg}" }
                                }
                            }

                            div {
                                class: "form-field",
                                label { class: "form-label", "Celular" }
                                input {
                                    class: "form-input",
                                    maxlength: "9",
                                    value: celular(),
                                    oninput: move |evt| celular.set(evt.value()),
                                }
                                if let Some(msg) = field_error("celular") {
                                    small { class: "form-error", "{msg}" }
                                }
                            }

                            div {
                                class: "form-field form-field-full",
                                label { class: "form-label", "Dirección" }
                                input {
                                    class: "form-input",
                                    value: direccion(),
                                    oninput: move |evt| direccion.set(evt.value()),
                                }
                                if let Some(msg) = field_error("direccion") {
                                    small { class: "form-error", "{msg}" }
                                }
                            }

                            div {
                                class: "form-field",
                                label { class: "form-label", "Asociación (opcional)" }
                                input {
                                    class: "form-input",
                                    value: asociacion(),
                                    oninput: move |evt| asociacion.set(evt.value()),
                                }
                            }

                            div {
                                class: "form-field",
                                label { class: "form-label", "Charlas informativas" }
                                select {
                                    class: "form-input",
                                    value: "{charlas}",
                                    onchange: move |evt| charlas.set(charla_from(&evt.value())),
                                    for option_value in Charla::ALL {
                                        option { value: "{option_value}", "{option_value}" }
                                    }
                                }
                            }

                            div {
                                class: "form-field form-field-full checkbox-row",
                                label {
                                    input {
                                        r#type: "checkbox",
                                        checked: propiedad(),
                                        oninput: move |evt| propiedad.set(evt.value() == "true"),
                                    }
                                    "Cuenta con propiedad"
                                }
                                label {
                                    input {
                                        r#type: "checkbox",
                                        checked: titulo(),
                                        oninput: move |evt| titulo.set(evt.value() == "true"),
                                    }
                                    "Cuenta con título"
                                }
                                label {
                                    input {
                                        r#type: "checkbox",
                                        checked: reg_publico(),
                                        oninput: move |evt| reg_publico.set(evt.value() == "true"),
                                    }
                                    "Inscrito en registro público"
                                }
                            }

                            div {
                                class: "form-field form-field-full",
                                label { class: "form-label", "Información adicional (opcional)" }
                                textarea {
                                    class: "form-input",
                                    rows: "4",
                                    value: adicional(),
                                    oninput: move |evt| adicional.set(evt.value()),
                                }
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
                            Link { to: Route::FormulariosList {}, class: "btn btn-outline", "Cancelar" }
                        }
                    }
                }
            }
        }
    }
}
