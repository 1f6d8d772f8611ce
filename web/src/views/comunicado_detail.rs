use dioxus::prelude::*;

use api::{ApiError, Comunicado};
use ui::use_api;

use crate::Route;

#[component]
pub fn ComunicadoDetail(id: i64) -> Element {
    let client = use_api();

    let mut record = use_signal(|| Option::<Comunicado>::None);
    let mut not_found = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                loading.set(true);
                match api::services::comunicados::show(&client, id).await {
                    Ok(c) => record.set(Some(c)),
                    Err(ApiError::NotFound) => not_found.set(true),
                    Err(err) => error.set(Some(err.user_message())),
                }
                loading.set(false);
            }
        }
    });

    let image_url = record()
        .as_ref()
        .and_then(|c| c.imagen.as_deref().map(|path| client.storage_url(path)));

    rsx! {
        div {
            class: "comunicado-page",
            div {
                class: "comunicado-card",
                div {
                    class: "comunicado-card-header",
                    h2 { class: "comunicado-title", "Comunicado" }
                    Link { to: Route::ComunicadosList {}, class: "btn", "Volver" }
                }

                div {
                    class: "comunicado-body",
                    if loading() {
                        div { class: "list-loading", "Cargando..." }
                    } else if not_found() {
                        div { class: "list-empty", "El comunicado solicitado no existe." }
                    } else if let Some(err) = error() {
                        div { class: "list-error", "{err}" }
                    } else if let Some(c) = record() {
                        if let Some(url) = image_url {
                            div {
                                class: "comunicado-image",
                                img { src: "{url}", alt: "Imagen del comunicado" }
                            }
                        }

                        h3 { {c.titulo.clone().unwrap_or_default()} }
                        p {
                            class: "comunicado-meta",
                            {c.entidad.clone().unwrap_or_default()}
                            " · "
                            {c.fecha_publicacion.clone().unwrap_or_default()}
                            " "
                            {c.hora_publicacion.clone().unwrap_or_default()}
                        }
                        p {
                            class: "comunicado-meta",
                            "Publicado por: "
                            {c.publicador.clone().unwrap_or_else(|| "-".into())}
                        }
                        p {
                            class: "comunicado-text",
                            {c.descripcion.clone().unwrap_or_default()}
                        }
                    }
                }
            }
        }
    }
}
