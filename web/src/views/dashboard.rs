use chrono::Utc;
use dioxus::prelude::*;

use api::stats::{fetch_size, latest, DashboardStats};
use api::Formulario;
use ui::{push_toast, use_api, use_toasts, ToastLevel};

use super::Protected;
use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        Protected {
            required_role: Some("admin".to_string()),
            DashboardInner {}
        }
    }
}

/// Admin panel with client-aggregated statistics. Counts are computed over
/// a bounded sample of the dataset, so they understate large datasets; the
/// note under the chart says as much to the operator.
#[component]
fn DashboardInner() -> Element {
    let client = use_api();
    let mut toasts = use_toasts();

    let mut items = use_signal(Vec::<Formulario>::new);
    let mut total = use_signal(|| 0u64);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                loading.set(true);
                error.set(None);

                // One-record head request to learn the total cheaply, then a
                // single fetch sized by the sampling policy.
                let head = api::services::formularios::list(&client, 1, "", Some(1), false).await;
                match head {
                    Ok(envelope) => {
                        total.set(envelope.total);
                        let sample = fetch_size(envelope.total);
                        if sample == 0 {
                            items.set(Vec::new());
                        } else {
                            let per_page = sample.clamp(10, 2000) as u32;
                            match api::services::formularios::list(
                                &client,
                                1,
                                "",
                                Some(per_page),
                                false,
                            )
                            .await
                            {
                                Ok(data) => items.set(data.data),
                                Err(err) => error.set(Some(err.user_message())),
                            }
                        }
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
                loading.set(false);
            }
        }
    });

    let handle_export = move |_| {
        let loaded = items();
        match api::export::formularios_csv(&loaded) {
            Some(csv) => api::export::download_csv("formularios_export.csv", &csv),
            None => push_toast(
                &mut toasts,
                ToastLevel::Info,
                "No hay registros descargados para exportar.",
            ),
        }
    };

    let stats = DashboardStats::compute(&items(), Utc::now());
    let sampled = stats.charlas.total();
    let recent = latest(&items(), 6);

    rsx! {
        div {
            class: "form-page dashboard-page",
            div {
                class: "form-card form-card-wide",
                div {
                    class: "form-card-header",
                    div {
                        h2 { class: "form-title", "Panel de administración" }
                        p { class: "form-subtitle", "Resumen con datos agregados en el cliente" }
                    }
                    div {
                        class: "row-actions",
                        Link { to: Route::FormulariosList {}, class: "btn btn-secondary", "Ir a formularios" }
                        Link { to: Route::ComunicadosList {}, class: "btn btn-secondary", "Ir a comunicados" }
                    }
                }

                div {
                    class: "form-body",
                    if loading() {
                        div { class: "list-loading", "Cargando panel..." }
                    } else if let Some(err) = error() {
                        div { class: "list-error", "{err}" }
                    } else {
                        div {
                            class: "kpi-grid",
                            div {
                                class: "kpi-card",
                                span { class: "kpi-label", "Total formularios" }
                                span { class: "kpi-value", "{total}" }
                            }
                            div {
                                class: "kpi-card",
                                span { class: "kpi-label", "Este mes" }
                                span { class: "kpi-value", "{stats.this_month}" }
                            }
                            div {
                                class: "kpi-card",
                                span { class: "kpi-label", "Con RUC" }
                                span { class: "kpi-value", "{stats.with_ruc}" }
                            }
                            div {
                                class: "kpi-card",
                                span { class: "kpi-label", "Con propiedad" }
                                span { class: "kpi-value", "{stats.with_propiedad}" }
                            }
                        }

                        div {
                            class: "dashboard-columns",
                            div {
                                class: "service-card chart-card",
                                div {
                                    class: "chart-header",
                                    span { class: "chart-title", "Charlas (por tipo)" }
                                    span { class: "chart-count", "{sampled} registros" }
                                }
                                for row in stats.charlas.rows() {
                                    div {
                                        key: "{row.label}",
                                        class: "chart-row",
                                        span { class: "chart-label", "{row.label}" }
                                        div {
                                            class: "chart-track",
                                            div {
                                                class: "chart-fill",
                                                style: "width: {row.pct}%",
                                            }
                                        }
                                        span { class: "chart-pct", "{row.pct}% ({row.count})" }
                                    }
                                }
                                p {
                                    class: "chart-note",
                                    "Estadísticas calculadas en el cliente con los registros descargados; con un padrón muy grande la muestra queda limitada."
                                }
                            }

                            div {
                                class: "service-card",
                                span { class: "chart-title", "Últimos envíos" }
                                if recent.is_empty() {
                                    p { class: "list-empty", "No hay envíos recientes." }
                                } else {
                                    ul {
                                        class: "recent-list",
                                        for item in recent {
                                            li {
                                                key: "{item.id:?}",
                                                div {
                                                    span { class: "recent-name", "{item.nombres_apellidos}" }
                                                    span {
                                                        class: "recent-meta",
                                                        "{item.dni} · {item.celular}"
                                                    }
                                                }
                                                Link {
                                                    to: Route::FormularioDetail { id: item.id.unwrap_or_default() },
                                                    class: "btn",
                                                    "Ver"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        div {
                            class: "dashboard-actions",
                            button {
                                class: "btn btn-primary",
                                onclick: handle_export,
                                "Exportar CSV"
                            }
                        }
                    }
                }
            }
        }
    }
}
