use dioxus::prelude::*;

use api::{ApiError, Formulario};
use ui::{use_api, use_session};

use crate::Route;

#[component]
pub fn FormularioDetail(id: i64) -> Element {
    let client = use_api();
    let session = use_session();

    let mut record = use_signal(|| Option::<Formulario>::None);
    let mut not_found = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                loading.set(true);
                match api::services::formularios::show(&client, id).await {
                    Ok(f) => record.set(Some(f)),
                    Err(ApiError::NotFound) => not_found.set(true),
                    Err(err) => error.set(Some(err.user_message())),
                }
                loading.set(false);
            }
        }
    });

    let is_admin = session().user().map(|u| u.is_admin()).unwrap_or(false);

    rsx! {
        div {
            class: "form-page",
            div {
                class: "form-card",
                div {
                    class: "form-card-header",
                    h2 { class: "form-title", "Detalle del formulario" }
                    Link { to: Route::FormulariosList {}, class: "btn", "Volver" }
                }

                div {
                    class: "form-body",
                    if loading() {
                        div { class: "list-loading", "Cargando..." }
                    } else if not_found() {
                        div { class: "list-empty", "El formulario solicitado no existe." }
                    } else if let Some(err) = error() {
                        div { class: "list-error", "{err}" }
                    } else if let Some(f) = record() {
                        dl {
                            class: "detail-grid",
                            dt { "Nombres y apellidos" }
                            dd { "{f.nombres_apellidos}" }
                            dt { "DNI" }
                            dd { "{f.dni}" }
                            dt { "RUC" }
                            dd { {f.ruc.clone().unwrap_or_else(|| "-".into())} }
                            dt { "Celular" }
                            dd { "{f.celular}" }
                            dt { "Dirección" }
                            dd { "{f.direccion}" }
                            dt { "Asociación" }
                            dd { {f.asociacion.clone().unwrap_or_else(|| "-".into())} }
                            dt { "Cuenta con propiedad" }
                            dd { if f.propiedad { "Sí" } else { "No" } }
                            dt { "Cuenta con título" }
                            dd { if f.titulo { "Sí" } else { "No" } }
                            dt { "Registro público" }
                            dd { if f.reg_publico { "Sí" } else { "No" } }
                            dt { "Charlas" }
                            dd { "{f.charlas}" }
                            dt { "Información adicional" }
                            dd { {f.adicional.clone().unwrap_or_else(|| "-".into())} }
                        }

                        if is_admin {
                            div {
                                class: "detail-actions",
                                Link {
                                    to: Route::FormularioEdit { id },
                                    class: "btn btn-primary",
                                    "Editar"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
