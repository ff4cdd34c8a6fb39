use super::{InvalidValue, JobId, StorageLocation};

/// The user/campaign/session triple a recording was uploaded under.
///
/// Owns the naming policy for everything a submission creates: job ids are
/// prefixed with the session, and blob keys are laid out hierarchically as
/// `{user}/{campaign}/{session}/{artifact}-{unique}`. Each artifact takes its
/// own unique suffix so repeated submissions for one session never collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionScope {
    user_id: String,
    campaign_id: String,
    session_id: String,
}

impl SessionScope {
    /// Each id becomes one segment of the blob keys and job id, so it must be
    /// non-empty, free of `/` and not a `.` or `..` path component.
    pub fn new(
        user_id: impl Into<String>,
        campaign_id: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Result<Self, InvalidValue> {
        Ok(Self {
            user_id: segment("user id", user_id.into())?,
            campaign_id: segment("campaign id", campaign_id.into())?,
            session_id: segment("session id", session_id.into())?,
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn campaign_id(&self) -> &str {
        &self.campaign_id
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn job_id(&self, unique: &str) -> JobId {
        JobId::from_raw(format!("{}-{}", self.session_id, unique))
    }

    pub fn audio_location(&self, unique: &str) -> StorageLocation {
        self.artifact_location("audio", unique)
    }

    pub fn transcript_location(&self, unique: &str) -> StorageLocation {
        self.artifact_location("transcript", unique)
    }

    fn artifact_location(&self, artifact: &str, unique: &str) -> StorageLocation {
        StorageLocation::from_raw(format!(
            "{}/{}/{}/{}-{}",
            self.user_id, self.campaign_id, self.session_id, artifact, unique
        ))
    }
}

fn segment(kind: &'static str, value: String) -> Result<String, InvalidValue> {
    if value.is_empty() || value == "." || value == ".." || value.contains('/') {
        return Err(InvalidValue::new(kind, value));
    }
    Ok(value)
}
