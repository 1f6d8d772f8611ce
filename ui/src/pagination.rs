use dioxus::prelude::*;

/// Pager row under a list table, driven by the page envelope fields.
#[component]
pub fn PaginationRow(
    page: u32,
    last_page: u32,
    total: u64,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "pagination-row",
            button {
                class: "btn",
                disabled: page <= 1,
                onclick: move |_| on_prev.call(()),
                "Anterior"
            }
            span { "Página {page} de {last_page} · total: {total}" }
            button {
                class: "btn",
                disabled: page >= last_page,
                onclick: move |_| on_next.call(()),
                "Siguiente"
            }
        }
    }
}
