use serde::Deserialize;

use crate::services::strictness::{StrictnessError, StrictnessPolicy};

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Process-wide strictness overrides, `field=level,field=level`.
    #[serde(default)]
    pub strictness_overrides: Option<String>,

    /// Request body limit in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            strictness_overrides: None,
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Strictness defaults with the configured overrides applied.
    pub fn strictness_policy(&self) -> Result<StrictnessPolicy, StrictnessError> {
        match self.strictness_overrides.as_deref() {
            Some(raw) => StrictnessPolicy::from_override_str(raw),
            None => Ok(StrictnessPolicy::default()),
        }
    }
}
