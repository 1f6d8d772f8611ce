//! # Wire models for the portal backend
//!
//! Records mirrored from the municipal REST API. The backend owns these rows;
//! the client only holds them in memory and performs optimistic list edits
//! after a successful remote call.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | The authenticated account returned by `GET /profile`. |
//! | [`Formulario`] | A citizen submission (identity, address, document flags, attendance preference). |
//! | [`Comunicado`] | An announcement authored by an administrator. |
//! | [`Paginated`] | The page envelope every list endpoint returns. |
//!
//! Draft types ([`FormularioDraft`], [`ComunicadoDraft`]) carry the payloads
//! for create/update calls and never include server-assigned fields.

use serde::{Deserialize, Serialize};

/// Authenticated user as returned by the profile endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Backend role string; `"admin"` gates the administrative surface.
    #[serde(default)]
    pub rol: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.rol.as_deref() == Some("admin")
    }

    /// Human label for the role, used by the header chrome.
    pub fn role_label(&self) -> &'static str {
        if self.is_admin() {
            "Administrador"
        } else {
            "Ciudadano"
        }
    }
}

/// Attendance preference recorded on a formulario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charla {
    Virtual,
    Presencial,
    Ninguno,
}

impl Default for Charla {
    fn default() -> Self {
        Charla::Ninguno
    }
}

impl Charla {
    pub fn as_str(&self) -> &'static str {
        match self {
            Charla::Virtual => "virtual",
            Charla::Presencial => "presencial",
            Charla::Ninguno => "ninguno",
        }
    }

    pub const ALL: [Charla; 3] = [Charla::Virtual, Charla::Presencial, Charla::Ninguno];
}

impl std::fmt::Display for Charla {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Citizen submission record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formulario {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub session_id: Option<String>,
    pub nombres_apellidos: String,
    pub dni: String,
    #[serde(default)]
    pub ruc: Option<String>,
    pub celular: String,
    pub direccion: String,
    #[serde(default)]
    pub asociacion: Option<String>,
    #[serde(default)]
    pub propiedad: bool,
    #[serde(default)]
    pub titulo: bool,
    #[serde(default)]
    pub reg_publico: bool,
    #[serde(default)]
    pub charlas: Charla,
    #[serde(default)]
    pub adicional: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Create/update payload for a formulario.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormularioDraft {
    pub nombres_apellidos: String,
    pub dni: String,
    pub ruc: Option<String>,
    pub celular: String,
    pub direccion: String,
    pub asociacion: Option<String>,
    pub propiedad: bool,
    pub titulo: bool,
    pub reg_publico: bool,
    pub charlas: Charla,
    pub adicional: Option<String>,
}

/// Publication status of a comunicado. The backend occasionally emits values
/// outside the known set; those deserialize as [`EstadoComunicado::Desconocido`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstadoComunicado {
    Activo,
    Inactivo,
    #[serde(other)]
    Desconocido,
}

impl Default for EstadoComunicado {
    fn default() -> Self {
        EstadoComunicado::Activo
    }
}

impl EstadoComunicado {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoComunicado::Activo => "activo",
            EstadoComunicado::Inactivo => "inactivo",
            EstadoComunicado::Desconocido => "desconocido",
        }
    }
}

impl std::fmt::Display for EstadoComunicado {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Announcement record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comunicado {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub titulo: Option<String>,
    /// Backend storage path of the attached image, if any.
    #[serde(default)]
    pub imagen: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    /// YYYY-MM-DD
    #[serde(default)]
    pub fecha_publicacion: Option<String>,
    /// HH:MM
    #[serde(default)]
    pub hora_publicacion: Option<String>,
    #[serde(default)]
    pub publicador: Option<String>,
    #[serde(default)]
    pub entidad: Option<String>,
    #[serde(default)]
    pub estado: EstadoComunicado,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

/// An image selected for upload alongside a comunicado.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Create/update payload for a comunicado. When `imagen` is set the request
/// goes out as multipart form data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComunicadoDraft {
    pub titulo: String,
    pub descripcion: String,
    pub fecha_publicacion: String,
    pub hora_publicacion: String,
    pub publicador: String,
    pub entidad: String,
    pub estado: EstadoComunicado,
    pub imagen: Option<ImageUpload>,
}

/// Paginated list envelope. The backend sends more bookkeeping fields than
/// these; anything the client does not consume is ignored on deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default = "first_page")]
    pub last_page: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub per_page: Option<u32>,
}

fn first_page() -> u32 {
    1
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            current_page: 1,
            data: Vec::new(),
            last_page: 1,
            total: 0,
            per_page: None,
        }
    }
}

impl<T> Paginated<T> {
    /// Optimistically drop the first row matching `pred` and decrement the
    /// total. The page is deliberately not backfilled from the next one; a
    /// now-short page stays short until the next navigation.
    pub fn remove_where(&mut self, pred: impl Fn(&T) -> bool) -> bool {
        match self.data.iter().position(|item| pred(item)) {
            Some(pos) => {
                self.data.remove(pos);
                self.total = self.total.saturating_sub(1);
                true
            }
            None => false,
        }
    }
}

/// Minimal `{ message: … }` acknowledgement body used by mutating endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Login response: the bearer credential plus, on some backends, the user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Registration payload; the confirmation field mirrors the password.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rol: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_tolerates_extra_fields() {
        let body = r#"{
            "current_page": 2,
            "data": [{"id": 7, "titulo": "Corte de agua", "estado": "activo"}],
            "first_page_url": "http://x/api/comunicados?page=1",
            "last_page": 5,
            "per_page": 10,
            "total": 42,
            "links": []
        }"#;
        let page: Paginated<Comunicado> = serde_json::from_str(body).unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.last_page, 5);
        assert_eq!(page.total, 42);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].estado, EstadoComunicado::Activo);
    }

    #[test]
    fn test_remove_where_decrements_total_once() {
        let mut page = Paginated {
            current_page: 1,
            data: vec![1, 2, 3],
            last_page: 1,
            total: 9,
            per_page: Some(10),
        };
        assert!(page.remove_where(|n| *n == 2));
        assert_eq!(page.data, vec![1, 3]);
        assert_eq!(page.total, 8);

        // Removing something that is not on the page changes nothing.
        assert!(!page.remove_where(|n| *n == 99));
        assert_eq!(page.total, 8);
    }

    #[test]
    fn test_formulario_defaults() {
        let body = r#"{"nombres_apellidos": "Juan Pérez", "dni": "12345678",
                       "celular": "999888777", "direccion": "Av. Lima 123"}"#;
        let f: Formulario = serde_json::from_str(body).unwrap();
        assert!(!f.propiedad);
        assert_eq!(f.charlas, Charla::Ninguno);
        assert!(f.ruc.is_none());
    }

    #[test]
    fn test_estado_unknown_value() {
        let c: Comunicado = serde_json::from_str(r#"{"estado": "archivado"}"#).unwrap();
        assert_eq!(c.estado, EstadoComunicado::Desconocido);
    }

    #[test]
    fn test_user_role_gate() {
        let admin: User = serde_json::from_str(
            r#"{"id": 1, "name": "Ana", "email": "ana@municipio.gob.pe", "rol": "admin"}"#,
        )
        .unwrap();
        let citizen: User = serde_json::from_str(
            r#"{"id": 2, "name": "Luis", "email": "luis@mail.com"}"#,
        )
        .unwrap();
        assert!(admin.is_admin());
        assert!(!citizen.is_admin());
        assert_eq!(citizen.role_label(), "Ciudadano");
    }
}
