use dioxus::prelude::*;

/// Landing banner for the public home page.
#[component]
pub fn HeroSection(on_navigate: EventHandler<String>) -> Element {
    rsx! {
        section {
            class: "hero",
            h1 { class: "hero-title", "Portal Ciudadano" }
            p {
                class: "hero-subtitle",
                "Consulta los comunicados oficiales y registra tus solicitudes en línea."
            }
            div {
                class: "hero-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_navigate.call("/formularios/create".to_string()),
                    "Registrar solicitud"
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_navigate.call("/comunicados".to_string()),
                    "Ver comunicados"
                }
            }
        }
    }
}
