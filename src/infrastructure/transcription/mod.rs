mod http_provider;
mod provider_factory;
mod scaffold_provider;

pub use http_provider::HttpTranscriptionProvider;
pub use provider_factory::TranscriptionProviderFactory;
pub use scaffold_provider::ScaffoldTranscriptionProvider;
