use std::sync::Arc;

use crate::application::ports::{ProviderError, TranscriptionProvider};
use crate::presentation::config::{TranscriptionProviderSetting, TranscriptionSettings};

use super::http_provider::HttpTranscriptionProvider;
use super::scaffold_provider::ScaffoldTranscriptionProvider;

pub struct TranscriptionProviderFactory;

impl TranscriptionProviderFactory {
    /// `bucket` is the blob container the provider reads audio from and writes transcripts to.
    pub fn create(
        settings: &TranscriptionSettings,
        bucket: &str,
    ) -> Result<Arc<dyn TranscriptionProvider>, ProviderError> {
        match settings.provider {
            TranscriptionProviderSetting::Http => {
                let base_url = settings.base_url.as_deref().ok_or_else(|| {
                    ProviderError::ApiRequestFailed(
                        "transcription.base_url required for http provider".to_string(),
                    )
                })?;
                Ok(Arc::new(HttpTranscriptionProvider::new(
                    base_url,
                    settings.api_key.clone(),
                    bucket,
                    &settings.media_uri_scheme,
                    &settings.language_code,
                )))
            }
            TranscriptionProviderSetting::Scaffold => {
                Ok(Arc::new(ScaffoldTranscriptionProvider::new()))
            }
        }
    }
}
