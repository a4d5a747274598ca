use std::path::PathBuf;
use super::types::SourceId;

pub const CHANNEL_PLACEHOLDER: &str = "{n}";

/// Resolves the media source for a channel from a filename template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceTemplate {
    directory: Option<PathBuf>,
    template: String,
}

impl SourceTemplate {
    /// Returns `None` when `template` has no `{n}` placeholder, since every
    /// channel would then resolve to the same source.
    pub fn new(directory: Option<&str>, template: impl Into<String>) -> Option<Self> {
        let template = template.into();
        if !template.contains(CHANNEL_PLACEHOLDER) {
            return None;
        }
        let directory = directory.map(|d| PathBuf::from(shellexpand::tilde(d).into_owned()));
        Some(Self { directory, template })
    }

    pub fn resolve(&self, channel: i32) -> SourceId {
        let name = self.template.replace(CHANNEL_PLACEHOLDER, &channel.to_string());
        match &self.directory {
            Some(dir) => SourceId(dir.join(name).to_string_lossy().into_owned()),
            None => SourceId(name),
        }
    }
}

impl Default for SourceTemplate {
    fn default() -> Self {
        Self {
            directory: None,
            template: "channel{n}.mp4".to_string(),
        }
    }
}
