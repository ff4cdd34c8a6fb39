mod environment;
mod loader;
mod settings;

pub use environment::Environment;
pub use loader::load_settings;
pub use settings::{
    DatabaseSettings, LoggingSettings, ServerSettings, Settings, StorageProviderSetting,
    StorageSettings, TranscriptionProviderSetting, TranscriptionSettings,
};
