use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory holding the inventory page and its frontend assets.
    pub static_dir: PathBuf,
    pub firebase: FirebaseConfig,
}

/// Connection parameters handed to the Firebase JS SDK on the frontend.
///
/// Serialized field names match what `firebase.initializeApp()` expects,
/// so the frontend can pass the response object through unchanged.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            static_dir: std::env::var("STATIC_DIR")
                .unwrap_or_else(|_| "static".to_string())
                .into(),
            firebase: FirebaseConfig::from_env()?,
        })
    }
}

impl FirebaseConfig {
    /// All six values are required. A partially-configured frontend fails in
    /// confusing ways inside the SDK, so startup aborts instead of
    /// substituting empty strings.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// The lookup is injected so the required-variable behavior can be
    /// exercised without mutating process-wide environment state.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |name: &str| lookup(name).with_context(|| format!("{name} must be set"));
        Ok(Self {
            api_key: var("FIREBASE_API_KEY")?,
            auth_domain: var("FIREBASE_AUTH_DOMAIN")?,
            project_id: var("FIREBASE_PROJECT_ID")?,
            storage_bucket: var("FIREBASE_STORAGE_BUCKET")?,
            messaging_sender_id: var("FIREBASE_MESSAGING_SENDER_ID")?,
            app_id: var("FIREBASE_APP_ID")?,
        })
    }
}
