//! Formulario CRUD endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{ApiMessage, Formulario, FormularioDraft, Paginated};

/// One page of formularios. `q` filters server-side over name, DNI, phone
/// and address; `mine` restricts the listing to the caller's own records.
pub async fn list(
    client: &ApiClient,
    page: u32,
    q: &str,
    per_page: Option<u32>,
    mine: bool,
) -> Result<Paginated<Formulario>, ApiError> {
    let mut params: Vec<(&str, String)> = vec![("page", page.to_string())];
    if !q.is_empty() {
        params.push(("q", q.to_string()));
    }
    if let Some(per_page) = per_page {
        params.push(("per_page", per_page.to_string()));
    }
    if mine {
        params.push(("mine", "1".to_string()));
    }
    client.get_json("/formularios", &params).await
}

pub async fn show(client: &ApiClient, id: i64) -> Result<Formulario, ApiError> {
    client.get_json(&format!("/formularios/{id}"), &[]).await
}

pub async fn create(client: &ApiClient, draft: &FormularioDraft) -> Result<ApiMessage, ApiError> {
    client.post_json("/formularios", draft).await
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    draft: &FormularioDraft,
) -> Result<ApiMessage, ApiError> {
    client.put_json(&format!("/formularios/{id}"), draft).await
}

pub async fn destroy(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/formularios/{id}")).await
}
