use dioxus::prelude::*;

use ui::HeroSection;

use crate::Route;

/// Public landing page.
#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        HeroSection {
            on_navigate: move |path: String| {
                nav.push(path);
            },
        }

        section {
            class: "service-cards",
            div {
                class: "service-card",
                h3 { "Comunicados" }
                p { "Avisos oficiales de la municipalidad: cortes programados, campañas y convocatorias." }
                Link { to: Route::ComunicadosList {}, class: "btn btn-secondary", "Ver comunicados" }
            }
            div {
                class: "service-card",
                h3 { "Formularios" }
                p { "Registra tu solicitud de empadronamiento y consulta su estado." }
                Link { to: Route::FormulariosList {}, class: "btn btn-secondary", "Ver formularios" }
            }
        }
    }
}

/// Unknown paths fall back to the public home.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("unknown route /{}", segments.join("/"));
    nav.replace(Route::Home {});
    rsx! {}
}
