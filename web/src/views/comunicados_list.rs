use dioxus::prelude::*;

use api::{Comunicado, Debouncer, Paginated};
use ui::{push_toast, use_api, use_session, use_toasts, ConfirmDialog, PaginationRow, ToastLevel};

use crate::Route;

#[component]
pub fn ComunicadosList() -> Element {
    let client = use_api();
    let session = use_session();
    let mut toasts = use_toasts();

    let mut page = use_signal(|| 1u32);
    let mut search_input = use_signal(String::new);
    let mut query = use_signal(String::new);
    let mut listing = use_signal(Paginated::<Comunicado>::default);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut pending_delete = use_signal(|| Option::<i64>::None);
    let debouncer = use_hook(Debouncer::new);

    let is_admin = session().user().map(|u| u.is_admin()).unwrap_or(false);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let p = page();
            let q = query();
            async move {
                loading.set(true);
                error.set(None);
                match api::services::comunicados::list(&client, p, &q).await {
                    Ok(data) => listing.set(data),
                    Err(err) => {
                        let msg = err.user_message();
                        error.set(Some(msg.clone()));
                        push_toast(&mut toasts, ToastLevel::Error, msg);
                    }
                }
                loading.set(false);
            }
        }
    });

    let handle_search = move |evt: FormEvent| {
        let value = evt.value();
        search_input.set(value.clone());
        let debouncer = debouncer.clone();
        spawn(async move {
            if let Some(q) = debouncer.debounce(value.trim().to_string()).await {
                page.set(1);
                query.set(q);
            }
        });
    };

    let handle_confirm_delete = move |_| {
        let Some(id) = pending_delete() else { return };
        pending_delete.set(None);
        let client = client.clone();
        spawn(async move {
            match api::services::comunicados::destroy(&client, id).await {
                Ok(()) => {
                    listing.write().remove_where(|c| c.id == Some(id));
                    push_toast(&mut toasts, ToastLevel::Success, "Comunicado eliminado");
                }
                Err(err) => {
                    push_toast(&mut toasts, ToastLevel::Error, err.user_message());
                }
            }
        });
    };

    let data = listing();

    rsx! {
        div {
            class: "form-page list-page",
            div {
                class: "form-card",
                div {
                    class: "form-card-header",
                    div {
                        h2 { class: "form-title", "Comunicados" }
                        p { class: "form-subtitle", "Publicaciones oficiales de la municipalidad" }
                    }
                    if is_admin {
                        Link {
                            to: Route::ComunicadoCreate {},
                            class: "btn btn-primary",
                            "Nuevo comunicado"
                        }
                    }
                }

                div {
                    class: "form-body",
                    div {
                        class: "list-toolbar",
                        input {
                            class: "form-input",
                            placeholder: "Buscar por título o entidad...",
                            value: search_input(),
                            oninput: handle_search,
                        }
                    }

                    if loading() {
                        div { class: "list-loading", "Cargando..." }
                    } else if let Some(err) = error() {
                        div { class: "list-error", "{err}" }
                    } else {
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "Título" }
                                    th { "Fecha" }
                                    th { "Hora" }
                                    th { "Publicador" }
                                    th { "Entidad" }
                                    th { "Estado" }
                                    th { "Acciones" }
                                }
                            }
                            tbody {
                                if data.data.is_empty() {
                                    tr {
                                        td { colspan: "7", class: "list-empty", "No hay comunicados" }
                                    }
                                } else {
                                    for item in data.data.iter().cloned() {
                                        ComunicadoRow {
                                            key: "{item.id:?}",
                                            item,
                                            is_admin,
                                            on_delete: move |id: i64| pending_delete.set(Some(id)),
                                        }
                                    }
                                }
                            }
                        }

                        PaginationRow {
                            page: data.current_page,
                            last_page: data.last_page,
                            total: data.total,
                            on_prev: move |_| page.set(page().saturating_sub(1).max(1)),
                            on_next: move |_| page.set(page() + 1),
                        }
                    }
                }
            }
        }

        if pending_delete().is_some() {
            ConfirmDialog {
                title: "Eliminar comunicado",
                message: "¿Eliminar este comunicado? Los lectores dejarán de verlo.",
                on_confirm: handle_confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

#[component]
fn ComunicadoRow(item: Comunicado, is_admin: bool, on_delete: EventHandler<i64>) -> Element {
    let id = item.id.unwrap_or_default();

    rsx! {
        tr {
            td { {item.titulo.clone().unwrap_or_else(|| "-".into())} }
            td { {item.fecha_publicacion.clone().unwrap_or_else(|| "-".into())} }
            td { {item.hora_publicacion.clone().unwrap_or_else(|| "-".into())} }
            td { {item.publicador.clone().unwrap_or_else(|| "-".into())} }
            td { {item.entidad.clone().unwrap_or_else(|| "-".into())} }
            td { "{item.estado}" }
            td {
                div {
                    class: "row-actions",
                    Link { to: Route::ComunicadoDetail { id }, class: "btn", "Ver" }
                    if is_admin {
                        Link { to: Route::ComunicadoEdit { id }, class: "btn", "Editar" }
                        button {
                            class: "btn btn-danger",
                            onclick: move |_| on_delete.call(id),
                            "Eliminar"
                        }
                    }
                }
            }
        }
    }
}
