//! Application configuration. Project and database identity.

use crate::domain::DatabaseId;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Google Cloud project hosting the database. Read from FIREEATS_PROJECT_ID.
    pub project_id: Option<String>,

    /// Database id within the project. Read from FIREEATS_DATABASE_ID.
    /// Defaults to "(default)".
    #[serde(default)]
    pub database_id: Option<String>,

    /// Firestore emulator host:port, e.g. "localhost:8080". Advisory: logged
    /// at startup and handed to the backend SDK by the embedding app.
    /// Read from FIREEATS_EMULATOR_HOST.
    #[serde(default)]
    pub emulator_host: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("FIREEATS"));
        if let Ok(path) = std::env::var("FIREEATS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the configured project id, if any.
    pub fn project_id(&self) -> Option<String> {
        self.project_id.clone()
    }

    /// Returns the database id. Defaults to "(default)" if unset.
    pub fn database_id_or_default(&self) -> String {
        self.database_id
            .clone()
            .unwrap_or_else(|| DatabaseId::DEFAULT_DATABASE.to_string())
    }

    /// Returns the emulator host if configured.
    pub fn emulator_host(&self) -> Option<String> {
        self.emulator_host.clone()
    }
}
