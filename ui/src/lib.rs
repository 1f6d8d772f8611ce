//! This crate contains all shared UI for the workspace: the session
//! provider, the toast context, and the presentational chrome the platform
//! crate composes around its views.

mod auth;
pub use auth::{use_api, use_session, AuthProvider};

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastLevel, ToastProvider, Toasts};

mod header;
pub use header::Header;

mod hero;
pub use hero::HeroSection;

mod pagination;
pub use pagination::PaginationRow;

mod confirm;
pub use confirm::{ConfirmDialog, ModalOverlay};
