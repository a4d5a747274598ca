use std::fmt;
use super::error::MediaError;

/// Identifier of a playable source, as resolved from a channel number.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceId(pub String);

impl SourceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

/// Status notifications a sink publishes on its own channel.
#[derive(Clone, Debug, PartialEq)]
pub enum MediaEvent {
    Loaded(SourceId),
    Playing(SourceId),
    Stopped,
    VolumeChanged(f32),
    Failed(MediaError),
}

/// The playback engine behind the screen.
///
/// Every call is fire-and-forget: a sink reports problems such as a
/// missing source through its own status channel, never back to the caller.
pub trait MediaSink {
    fn load(&mut self, source: &SourceId);
    fn play(&mut self);
    fn stop(&mut self);
    /// `level` is in 0.0..=1.0, where 0.0 is silent.
    fn set_volume(&mut self, level: f32);
}
