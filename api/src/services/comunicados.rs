//! Comunicado CRUD endpoints.
//!
//! Create and update carry an optional image, in which case the payload
//! goes out as multipart form data. Updates with an image POST with a
//! `_method=PUT` override field — the backend's multipart parser does not
//! read bodies on real PUT requests. The soft-delete administration calls
//! (`restore`, `force_delete`) are also exposed here.

use reqwest::multipart::{Form, Part};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{ApiMessage, Comunicado, ComunicadoDraft, Paginated};

pub async fn list(
    client: &ApiClient,
    page: u32,
    q: &str,
) -> Result<Paginated<Comunicado>, ApiError> {
    let mut params: Vec<(&str, String)> = vec![("page", page.to_string())];
    if !q.is_empty() {
        params.push(("q", q.to_string()));
    }
    client.get_json("/comunicados", &params).await
}

pub async fn show(client: &ApiClient, id: i64) -> Result<Comunicado, ApiError> {
    client.get_json(&format!("/comunicados/{id}"), &[]).await
}

pub async fn create(client: &ApiClient, draft: &ComunicadoDraft) -> Result<ApiMessage, ApiError> {
    let form = multipart_form(draft, false)?;
    client.post_multipart("/comunicados", form).await
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    draft: &ComunicadoDraft,
) -> Result<ApiMessage, ApiError> {
    if draft.imagen.is_some() {
        let form = multipart_form(draft, true)?;
        client
            .post_multipart(&format!("/comunicados/{id}"), form)
            .await
    } else {
        client
            .put_json(&format!("/comunicados/{id}"), &draft_fields(draft))
            .await
    }
}

pub async fn destroy(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/comunicados/{id}")).await
}

/// Undo a soft delete.
pub async fn restore(client: &ApiClient, id: i64) -> Result<ApiMessage, ApiError> {
    client.post_empty(&format!("/comunicados/{id}/restore")).await
}

/// Permanently remove a soft-deleted record.
pub async fn force_delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/comunicados/{id}/force")).await
}

fn draft_fields(draft: &ComunicadoDraft) -> serde_json::Value {
    serde_json::json!({
        "titulo": draft.titulo,
        "descripcion": draft.descripcion,
        "fecha_publicacion": draft.fecha_publicacion,
        "hora_publicacion": draft.hora_publicacion,
        "publicador": draft.publicador,
        "entidad": draft.entidad,
        "estado": draft.estado.as_str(),
    })
}

fn multipart_form(draft: &ComunicadoDraft, method_put: bool) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("titulo", draft.titulo.clone())
        .text("descripcion", draft.descripcion.clone())
        .text("fecha_publicacion", draft.fecha_publicacion.clone())
        .text("hora_publicacion", draft.hora_publicacion.clone())
        .text("publicador", draft.publicador.clone())
        .text("entidad", draft.entidad.clone())
        .text("estado", draft.estado.as_str());

    if method_put {
        form = form.text("_method", "PUT");
    }

    if let Some(image) = &draft.imagen {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        form = form.part("imagen", part);
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EstadoComunicado, ImageUpload};

    fn draft(with_image: bool) -> ComunicadoDraft {
        ComunicadoDraft {
            titulo: "Corte de agua programado".into(),
            descripcion: "Mantenimiento de redes en el sector 3.".into(),
            fecha_publicacion: "2025-09-20".into(),
            hora_publicacion: "08:00".into(),
            publicador: "Oficina de Imagen".into(),
            entidad: "Municipalidad Distrital".into(),
            estado: EstadoComunicado::Activo,
            imagen: with_image.then(|| ImageUpload {
                file_name: "aviso.png".into(),
                mime: "image/png".into(),
                bytes: vec![0x89, 0x50, 0x4E, 0x47],
            }),
        }
    }

    #[test]
    fn test_multipart_form_builds_with_override() {
        // Building the form must not reject a well-formed draft; the
        // override field only exists on the edit path.
        assert!(multipart_form(&draft(true), true).is_ok());
        assert!(multipart_form(&draft(false), false).is_ok());
    }

    #[test]
    fn test_json_fields_carry_estado_as_string() {
        let value = draft_fields(&draft(false));
        assert_eq!(value["estado"], "activo");
        assert_eq!(value["titulo"], "Corte de agua programado");
    }

    #[test]
    fn test_bad_mime_is_reported() {
        let mut d = draft(true);
        d.imagen.as_mut().unwrap().mime = "not a mime".into();
        assert!(multipart_form(&d, false).is_err());
    }
}
