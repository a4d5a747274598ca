use std::path::Path;
use tokio::sync::mpsc;
use super::error::MediaError;
use super::types::{MediaEvent, MediaSink, PlaybackState, SourceId};

/// Sink that stands in for a decoding engine: it keeps playback state,
/// logs every call and publishes status on an unbounded channel.
#[derive(Debug)]
pub struct TracingSink {
    state: PlaybackState,
    source: Option<SourceId>,
    volume: f32,
    check_sources: bool,
    event_tx: mpsc::UnboundedSender<MediaEvent>,
}

impl TracingSink {
    /// With `check_sources` set, loading a source that is not an existing
    /// file fails with [`MediaError::SourceNotFound`].
    pub fn new(check_sources: bool) -> (Self, mpsc::UnboundedReceiver<MediaEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        (
            Self {
                state: PlaybackState::Stopped,
                source: None,
                volume: 1.0,
                check_sources,
                event_tx,
            },
            event_rx,
        )
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn source(&self) -> Option<&SourceId> {
        self.source.as_ref()
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    fn publish(&self, event: MediaEvent) {
        // Nobody listening is fine.
        let _ = self.event_tx.send(event);
    }
}

impl MediaSink for TracingSink {
    fn load(&mut self, source: &SourceId) {
        if self.check_sources && !Path::new(source.as_str()).is_file() {
            tracing::warn!("Cannot load {}: no such file", source);
            self.source = None;
            self.publish(MediaEvent::Failed(MediaError::SourceNotFound(source.clone())));
            return;
        }
        tracing::debug!("Loaded {}", source);
        self.source = Some(source.clone());
        self.publish(MediaEvent::Loaded(source.clone()));
    }

    fn play(&mut self) {
        match &self.source {
            Some(source) => {
                tracing::info!("Playing {} at volume {:.2}", source, self.volume);
                self.state = PlaybackState::Playing;
                self.publish(MediaEvent::Playing(source.clone()));
            }
            None => {
                tracing::warn!("Play requested with nothing loaded");
                self.publish(MediaEvent::Failed(MediaError::NotLoaded));
            }
        }
    }

    fn stop(&mut self) {
        if self.state == PlaybackState::Playing {
            tracing::info!("Playback stopped");
        }
        self.state = PlaybackState::Stopped;
        self.publish(MediaEvent::Stopped);
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level.clamp(0.0, 1.0);
        tracing::debug!("Sink volume set to {:.2}", self.volume);
        self.publish(MediaEvent::VolumeChanged(self.volume));
    }
}
