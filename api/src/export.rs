//! # Client-generated CSV export
//!
//! Serializes the formularios currently loaded by the dashboard — and only
//! those — into a spreadsheet-friendly CSV: fixed header row, UTF-8 with a
//! byte-order mark so Excel detects the encoding, comma separators,
//! double-quote escaping, and localized `Sí`/`No` for the boolean flags.

use crate::models::Formulario;

/// Column order of the export, matching the submission form.
pub const CSV_HEADERS: [&str; 11] = [
    "nombres_apellidos",
    "dni",
    "ruc",
    "celular",
    "direccion",
    "asociacion",
    "propiedad",
    "titulo",
    "reg_publico",
    "charlas",
    "adicional",
];

const BOM: &str = "\u{FEFF}";

fn escape(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Sí"
    } else {
        "No"
    }
}

/// Build the CSV document for the loaded records. Returns `None` when there
/// is nothing loaded — the caller warns the user and writes no file.
pub fn formularios_csv(items: &[Formulario]) -> Option<String> {
    if items.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for item in items {
        let fields = [
            escape(&item.nombres_apellidos),
            escape(&item.dni),
            escape(item.ruc.as_deref().unwrap_or("")),
            escape(&item.celular),
            escape(&item.direccion),
            escape(item.asociacion.as_deref().unwrap_or("")),
            escape(yes_no(item.propiedad)),
            escape(yes_no(item.titulo)),
            escape(yes_no(item.reg_publico)),
            escape(item.charlas.as_str()),
            escape(item.adicional.as_deref().unwrap_or("")),
        ];
        lines.push(fields.join(","));
    }

    Some(format!("{BOM}{}", lines.join("\n")))
}

/// Hand the document to the browser as a file download.
#[cfg(target_arch = "wasm32")]
pub fn download_csv(file_name: &str, content: &str) {
    use wasm_bindgen::JsCast;

    let result = (|| -> Result<(), wasm_bindgen::JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv;charset=utf-8;");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")?
            .dyn_into()
            .map_err(|_| "anchor cast")?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        web_sys::Url::revoke_object_url(&url)?;
        Ok(())
    })();

    if let Err(err) = result {
        tracing::error!("CSV download failed: {err:?}");
    }
}

/// Native builds have no download target; the export stays in memory.
#[cfg(not(target_arch = "wasm32"))]
pub fn download_csv(file_name: &str, _content: &str) {
    tracing::info!("CSV export '{file_name}' is only downloadable in the browser");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Charla;

    fn sample() -> Formulario {
        Formulario {
            id: Some(1),
            user_id: None,
            session_id: None,
            nombres_apellidos: "Juan \"Chino\" Pérez".into(),
            dni: "12345678".into(),
            ruc: None,
            celular: "999888777".into(),
            direccion: "Av. Lima 123, Mz. B".into(),
            asociacion: Some("Asoc. Los Olivos".into()),
            propiedad: true,
            titulo: false,
            reg_publico: true,
            charlas: Charla::Virtual,
            adicional: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_export_produces_no_document() {
        assert_eq!(formularios_csv(&[]), None);
    }

    #[test]
    fn test_document_shape() {
        let csv = formularios_csv(&[sample()]).unwrap();
        assert!(csv.starts_with('\u{FEFF}'));

        let mut lines = csv.trim_start_matches('\u{FEFF}').lines();
        assert_eq!(lines.next().unwrap(), CSV_HEADERS.join(","));

        let row = lines.next().unwrap();
        // Embedded quotes are doubled, booleans localized.
        assert!(row.starts_with("\"Juan \"\"Chino\"\" Pérez\",\"12345678\""));
        assert!(row.contains("\"Sí\",\"No\",\"Sí\",\"virtual\""));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_commas_stay_inside_quotes() {
        let csv = formularios_csv(&[sample()]).unwrap();
        assert!(csv.contains("\"Av. Lima 123, Mz. B\""));
    }
}
