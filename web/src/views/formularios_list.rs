use dioxus::prelude::*;

use api::{Debouncer, Formulario, Paginated};
use ui::{push_toast, use_api, use_session, use_toasts, ConfirmDialog, PaginationRow, ToastLevel};

use crate::Route;

#[component]
pub fn FormulariosList() -> Element {
    let client = use_api();
    let session = use_session();
    let mut toasts = use_toasts();

    let mut page = use_signal(|| 1u32);
    let mut per_page = use_signal(|| 10u32);
    let mut search_input = use_signal(String::new);
    let mut query = use_signal(String::new);
    let mut listing = use_signal(Paginated::<Formulario>::default);
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
            let pp = per_page();
            // Citizens only see their own submissions; the session signal is
            // read here so a login/logout reloads the list.
            let state = session();
            let mine = state.user().map(|u| !u.is_admin()).unwrap_or(false);
            async move {
                loading.set(true);
                error.set(None);
                match api::services::formularios::list(&client, p, &q, Some(pp), mine).await {
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
            match api::services::formularios::destroy(&client, id).await {
                Ok(()) => {
                    // Optimistic removal: the short page is not backfilled
                    // until the next navigation.
                    listing.write().remove_where(|f| f.id == Some(id));
                    push_toast(&mut toasts, ToastLevel::Success, "Formulario eliminado");
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
                        h2 { class: "form-title", "Formularios" }
                        p { class: "form-subtitle", "Listado formal de solicitudes" }
                    }
                    Link {
                        to: Route::FormularioCreate {},
                        class: "btn btn-primary",
                        "Nuevo formulario"
                    }
                }

                div {
                    class: "form-body",
                    div {
                        class: "list-toolbar",
                        input {
                            class: "form-input",
                            placeholder: "Buscar por nombre, DNI, celular o dirección...",
                            value: search_input(),
                            oninput: handle_search,
                        }
                        select {
                            class: "form-input per-page-select",
                            value: "{per_page}",
                            onchange: move |evt| {
                                if let Ok(pp) = evt.value().parse::<u32>() {
                                    per_page.set(pp);
                                    page.set(1);
                                }
                            },
                            option { value: "5", "5 / pág" }
                            option { value: "10", "10 / pág" }
                            option { value: "25", "25 / pág" }
                        }
                        button {
                            class: "btn",
                            onclick: move |_| {
                                search_input.set(String::new());
                                page.set(1);
                                query.set(String::new());
                            },
                            "Limpiar"
                        }
                    }

                    if loading() {
                        div { class: "list-loading", "Cargando..." }
                    } else if let Some(err) = error() {
                        div { class: "list-error", "{err}" }
                    } else {
                        table {
                            class: "table form-list-table",
                            thead {
                                tr {
                                    th { "Nombres" }
                                    th { "DNI" }
                                    th { "RUC" }
                                    th { "Celular" }
                                    th { "Dirección" }
                                    th { "Asociación" }
                                    th { "Charlas" }
                                    th { "Acciones" }
                                }
                            }
                            tbody {
                                if data.data.is_empty() {
                                    tr {
                                        td { colspan: "8", class: "list-empty", "No hay formularios" }
                                    }
                                } else {
                                    for item in data.data.iter().cloned() {
                                        FormularioRow {
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
                title: "Eliminar formulario",
                message: "¿Eliminar este formulario? Esta acción es irreversible.",
                on_confirm: handle_confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

#[component]
fn FormularioRow(item: Formulario, is_admin: bool, on_delete: EventHandler<i64>) -> Element {
    let id = item.id.unwrap_or_default();

    rsx! {
        tr {
            td { "{item.nombres_apellidos}" }
            td { "{item.dni}" }
            td { {item.ruc.clone().unwrap_or_else(|| "-".into())} }
            td { "{item.celular}" }
            td { "{item.direccion}" }
            td { {item.asociacion.clone().unwrap_or_else(|| "-".into())} }
            td { "{item.charlas}" }
            td {
                div {
                    class: "row-actions",
                    Link { to: Route::FormularioDetail { id }, class: "btn", "Ver" }
                    if is_admin {
                        Link { to: Route::FormularioEdit { id }, class: "btn", "Editar" }
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
