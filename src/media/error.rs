use super::types::SourceId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("Media source not found: {0}")]
    SourceNotFound(SourceId),
    #[error("Play requested with no source loaded")]
    NotLoaded,
}
