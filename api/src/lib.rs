//! # API crate — backend access and session logic for the citizen portal
//!
//! Everything in this crate is platform-agnostic: the same code drives the
//! web bundle (via `reqwest`'s wasm backend) and native test runs. The UI
//! crates own rendering; this crate owns the wire.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | HTTP adapter: bearer injection, error mapping, 401 observer broadcast |
//! | [`credentials`] | Persisted bearer token (local storage / in-memory) |
//! | [`debounce`] | Search debouncing and the platform sleep |
//! | [`error`] | Error taxonomy for every backend call |
//! | [`export`] | Client-generated CSV export of the loaded sample |
//! | [`guard`] | Pure route-guard decision function |
//! | [`models`] | Wire models and the page envelope |
//! | [`services`] | Per-resource request builders (auth, formularios, comunicados) |
//! | [`session`] | Session state machine and its async orchestration |
//! | [`settings`] | Base-URL configuration (defaults, file, environment) |
//! | [`stats`] | In-memory dashboard aggregation over a bounded sample |

pub mod client;
pub mod credentials;
pub mod debounce;
pub mod error;
pub mod export;
pub mod guard;
pub mod models;
pub mod services;
pub mod session;
pub mod settings;
pub mod stats;

pub use client::ApiClient;
pub use credentials::{CredentialStore, MemoryCredentials, SharedCredentials, TOKEN_KEY};
pub use debounce::{sleep, Debouncer, SEARCH_DEBOUNCE};
pub use error::ApiError;
pub use guard::{check_access, Access};
pub use models::{
    ApiMessage, Charla, Comunicado, ComunicadoDraft, EstadoComunicado, Formulario,
    FormularioDraft, ImageUpload, LoginResponse, Paginated, RegisterPayload, User,
};
pub use session::{SessionEvent, SessionState};
pub use settings::Settings;
