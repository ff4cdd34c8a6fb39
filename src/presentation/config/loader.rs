use config::{Config, ConfigError, File};

use super::{Environment, Settings};

/// Layers built-in defaults, `appsettings.toml`, `appsettings.{env}.toml` and
/// `APP_*` environment variables, later sources winning. Nested keys use a
/// double underscore, e.g. `APP_DATABASE__URL`.
pub fn load_settings(environment: Environment) -> Result<Settings, ConfigError> {
    Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("server.request_timeout_secs", 120)?
        .set_default("server.max_upload_mb", 512)?
        .set_default("database.max_connections", 10)?
        .set_default("storage.provider", "local")?
        .set_default("storage.container", "campaign-scribe")?
        .set_default("storage.local_path", "./data/blobs")?
        .set_default("transcription.provider", "scaffold")?
        .set_default("transcription.language_code", "en-US")?
        .set_default("transcription.media_uri_scheme", "s3")?
        .set_default("logging.level", "info")?
        .set_default("logging.json", environment == Environment::Prod)?
        .add_source(File::with_name("appsettings").required(false))
        .add_source(
            File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}
