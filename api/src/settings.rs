use config::{Config, ConfigError};
#[cfg(not(target_arch = "wasm32"))]
use config::{Environment, File, FileFormat};
use serde::Deserialize;

const DEFAULT_PORTAL_URL: &str = "http://127.0.0.1:8000/api";

#[derive(Debug, Deserialize)]
pub struct Portal {
    /// Base URL of the municipal REST API, including the `/api` prefix.
    pub url: String,
}

impl Default for Portal {
    fn default() -> Self {
        Self {
            url: DEFAULT_PORTAL_URL.into(),
        }
    }
}

impl Portal {
    /// Root of the backend host, with the `/api` suffix stripped. Uploaded
    /// images live under `<root>/storage/`.
    pub fn storage_url(&self, path: &str) -> String {
        let root = self
            .url
            .trim_end_matches('/')
            .trim_end_matches("/api")
            .trim_end_matches('/');
        format!("{root}/storage/{path}")
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    pub portal: Portal,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let mut builder =
            Config::builder().set_default("portal.url", DEFAULT_PORTAL_URL)?;

        // Browser bundles cannot read files or a process environment, so the
        // build-time value is folded in as a default.
        if let Some(url) = option_env!("PORTAL_URL") {
            builder = builder.set_default("portal.url", url)?;
        }

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default().separator("_"));

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_settings() {
        set_var("PORTAL_URL", "https://portal.munidistrito.gob.pe/api");
        let settings = Settings::new().unwrap_or_default();
        assert_eq!(
            settings.portal.url,
            "https://portal.munidistrito.gob.pe/api"
        );
    }

    #[test]
    fn test_storage_url_strips_api_suffix() {
        let portal = Portal {
            url: "https://portal.munidistrito.gob.pe/api/".into(),
        };
        assert_eq!(
            portal.storage_url("comunicados/foto.jpg"),
            "https://portal.munidistrito.gob.pe/storage/comunicados/foto.jpg"
        );
    }
}
