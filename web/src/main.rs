use dioxus::prelude::*;

use ui::{AuthProvider, ToastProvider};
use views::{
    AppShell, ComunicadoCreate, ComunicadoDetail, ComunicadoEdit, ComunicadosList, Dashboard,
    FormularioCreate, FormularioDetail, FormularioEdit, FormulariosList, Home, Login, NotFound,
    Profile, Register,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    // Auth pages render outside the shell.
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},

    #[layout(AppShell)]
        #[route("/")]
        Home {},

        #[route("/comunicados")]
        ComunicadosList {},
        #[route("/comunicados/create")]
        ComunicadoCreate {},
        #[route("/comunicados/:id")]
        ComunicadoDetail { id: i64 },
        #[route("/comunicados/:id/edit")]
        ComunicadoEdit { id: i64 },

        #[route("/formularios")]
        FormulariosList {},
        #[route("/formularios/create")]
        FormularioCreate {},
        #[route("/formularios/:id")]
        FormularioDetail { id: i64 },
        #[route("/formularios/:id/edit")]
        FormularioEdit { id: i64 },

        #[route("/profile")]
        Profile {},
        #[route("/admin/dashboard")]
        Dashboard {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
