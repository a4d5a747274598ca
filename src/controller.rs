use crate::curves::{Curve, LinearCurve};
use crate::media::{MediaSink, SourceTemplate};
use crate::panel::{Button, Display};
use crate::tuning::{ChannelRange, TuningError, VolumeRange};

/// Everything a controller needs besides its collaborators.
pub struct ControllerSettings {
    pub channels: ChannelRange,
    pub volumes: VolumeRange,
    pub initial_volume: i32,
    pub curve: Box<dyn Curve>,
    pub sources: SourceTemplate,
}

impl ControllerSettings {
    pub fn new(
        channels: ChannelRange,
        volumes: VolumeRange,
        initial_volume: i32,
    ) -> Result<Self, TuningError> {
        if !volumes.contains(initial_volume) {
            return Err(TuningError::InitialVolumeOutOfRange {
                initial: initial_volume,
                min: volumes.min(),
                max: volumes.max(),
            });
        }
        Ok(Self {
            channels,
            volumes,
            initial_volume,
            curve: Box::new(LinearCurve),
            sources: SourceTemplate::default(),
        })
    }

    pub fn with_curve(mut self, curve: Box<dyn Curve>) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_sources(mut self, sources: SourceTemplate) -> Self {
        self.sources = sources;
        self
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            channels: ChannelRange::default(),
            volumes: VolumeRange::default(),
            initial_volume: 5,
            curve: Box::new(LinearCurve),
            sources: SourceTemplate::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TelevisionState {
    pub powered: bool,
    pub muted: bool,
    pub channel: i32,
    pub volume: i32,
}

/// Front-panel logic of the set. Owns the media sink and stops it when
/// dropped, whatever the power state.
pub struct TelevisionController<S: MediaSink, D: Display> {
    sink: S,
    display: D,
    channels: ChannelRange,
    volumes: VolumeRange,
    curve: Box<dyn Curve>,
    sources: SourceTemplate,
    state: TelevisionState,
    stop_on_teardown: bool,
}

impl<S: MediaSink, D: Display> TelevisionController<S, D> {
    pub fn new(sink: S, display: D, settings: ControllerSettings) -> Self {
        let state = TelevisionState {
            powered: false,
            muted: false,
            channel: settings.channels.min(),
            volume: settings.initial_volume,
        };
        Self {
            sink,
            display,
            channels: settings.channels,
            volumes: settings.volumes,
            curve: settings.curve,
            sources: settings.sources,
            state,
            stop_on_teardown: true,
        }
    }

    pub fn state(&self) -> TelevisionState {
        self.state
    }

    pub fn is_powered(&self) -> bool {
        self.state.powered
    }

    /// Volume as the readout shows it: 0 while muted.
    pub fn effective_volume(&self) -> i32 {
        if self.state.muted {
            0
        } else {
            self.state.volume
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn handle(&mut self, button: Button) {
        match button {
            Button::Power => self.power(),
            Button::Mute => self.mute(),
            Button::ChannelUp => self.channel_up(),
            Button::ChannelDown => self.channel_down(),
            Button::VolumeUp => self.volume_up(),
            Button::VolumeDown => self.volume_down(),
        }
    }

    pub fn power(&mut self) {
        self.state.powered = !self.state.powered;
        if self.state.powered {
            tracing::info!("Powered on, channel {}", self.state.channel);
            self.sink.set_volume(self.sink_level());
            self.load_channel_media();
        } else {
            tracing::info!("Powered off");
            self.sink.stop();
        }
    }

    pub fn mute(&mut self) {
        if !self.accepts(Button::Mute) {
            return;
        }
        self.state.muted = !self.state.muted;
        tracing::info!("Mute {}", if self.state.muted { "on" } else { "off" });
        self.push_volume();
    }

    pub fn channel_up(&mut self) {
        if !self.accepts(Button::ChannelUp) {
            return;
        }
        self.tune(self.channels.next(self.state.channel));
    }

    pub fn channel_down(&mut self) {
        if !self.accepts(Button::ChannelDown) {
            return;
        }
        self.tune(self.channels.prev(self.state.channel));
    }

    pub fn volume_up(&mut self) {
        if !self.accepts(Button::VolumeUp) {
            return;
        }
        self.set_volume(self.volumes.raise(self.state.volume));
    }

    pub fn volume_down(&mut self) {
        if !self.accepts(Button::VolumeDown) {
            return;
        }
        self.set_volume(self.volumes.lower(self.state.volume));
    }

    /// Stops the sink regardless of power state. Dropping the controller
    /// calls this too; the sink is stopped once unless playback restarts
    /// in between.
    pub fn shutdown(&mut self) {
        if !self.stop_on_teardown {
            return;
        }
        tracing::debug!("Shutting down media sink");
        self.stop_on_teardown = false;
        self.sink.stop();
    }

    fn accepts(&self, button: Button) -> bool {
        if !self.state.powered {
            tracing::debug!("Ignoring {} while powered off", button);
        }
        self.state.powered
    }

    fn tune(&mut self, channel: i32) {
        tracing::info!("Channel {} -> {}", self.state.channel, channel);
        self.state.channel = channel;
        self.display.show_channel(channel);
        self.load_channel_media();
    }

    fn set_volume(&mut self, volume: i32) {
        self.state.muted = false;
        self.state.volume = volume;
        tracing::info!("Volume {}", volume);
        self.push_volume();
    }

    fn push_volume(&mut self) {
        self.display.show_volume(self.effective_volume());
        self.sink.set_volume(self.sink_level());
    }

    fn sink_level(&self) -> f32 {
        if self.state.muted {
            0.0
        } else {
            self.curve.apply(self.volumes.fraction(self.state.volume))
        }
    }

    fn load_channel_media(&mut self) {
        let source = self.sources.resolve(self.state.channel);
        tracing::debug!("Loading {} for channel {}", source, self.state.channel);
        self.sink.stop();
        self.sink.load(&source);
        self.sink.play();
        self.stop_on_teardown = true;
    }
}

impl<S: MediaSink, D: Display> Drop for TelevisionController<S, D> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::GammaCurve;
    use crate::media::SourceId;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Load(String),
        Play,
        Stop,
        SetVolume(f32),
        ShowChannel(i32),
        ShowVolume(i32),
    }

    type Journal = Rc<RefCell<Vec<Call>>>;

    struct RecordingSink(Journal);

    impl MediaSink for RecordingSink {
        fn load(&mut self, source: &SourceId) {
            self.0.borrow_mut().push(Call::Load(source.0.clone()));
        }

        fn play(&mut self) {
            self.0.borrow_mut().push(Call::Play);
        }

        fn stop(&mut self) {
            self.0.borrow_mut().push(Call::Stop);
        }

        fn set_volume(&mut self, level: f32) {
            self.0.borrow_mut().push(Call::SetVolume(level));
        }
    }

    struct RecordingDisplay(Journal);

    impl Display for RecordingDisplay {
        fn show_channel(&mut self, channel: i32) {
            self.0.borrow_mut().push(Call::ShowChannel(channel));
        }

        fn show_volume(&mut self, volume: i32) {
            self.0.borrow_mut().push(Call::ShowVolume(volume));
        }
    }

    type TestController = TelevisionController<RecordingSink, RecordingDisplay>;

    fn settings(max_channel: i32, max_volume: i32, initial: i32) -> ControllerSettings {
        ControllerSettings::new(
            ChannelRange::new(0, max_channel).unwrap(),
            VolumeRange::new(0, max_volume).unwrap(),
            initial,
        )
        .unwrap()
        .with_sources(SourceTemplate::new(None, "channel{n}").unwrap())
    }

    fn controller(settings: ControllerSettings) -> (TestController, Journal) {
        let journal: Journal = Rc::new(RefCell::new(Vec::new()));
        let tv = TelevisionController::new(
            RecordingSink(journal.clone()),
            RecordingDisplay(journal.clone()),
            settings,
        );
        (tv, journal)
    }

    fn powered_on(settings: ControllerSettings) -> (TestController, Journal) {
        let (mut tv, journal) = controller(settings);
        tv.power();
        journal.borrow_mut().clear();
        (tv, journal)
    }

    fn take(journal: &Journal) -> Vec<Call> {
        journal.borrow_mut().drain(..).collect()
    }

    #[test]
    fn test_initial_state() {
        let (tv, journal) = controller(settings(3, 5, 2));
        assert_eq!(
            tv.state(),
            TelevisionState { powered: false, muted: false, channel: 0, volume: 2 }
        );
        assert!(journal.borrow().is_empty());
    }

    #[test]
    fn test_settings_reject_initial_volume_outside_range() {
        let result = ControllerSettings::new(
            ChannelRange::new(0, 3).unwrap(),
            VolumeRange::new(0, 5).unwrap(),
            6,
        );
        assert!(matches!(
            result,
            Err(TuningError::InitialVolumeOutOfRange { initial: 6, min: 0, max: 5 })
        ));
    }

    #[test]
    fn test_power_on_loads_current_channel() {
        let (mut tv, journal) = controller(settings(3, 5, 2));
        tv.power();

        assert!(tv.is_powered());
        assert_eq!(
            take(&journal),
            vec![
                Call::SetVolume(0.4),
                Call::Stop,
                Call::Load("channel0".to_string()),
                Call::Play,
            ]
        );
    }

    #[test]
    fn test_power_off_stops_without_display() {
        let (mut tv, journal) = powered_on(settings(3, 5, 2));
        tv.power();

        assert!(!tv.is_powered());
        assert_eq!(take(&journal), vec![Call::Stop]);
    }

    #[test]
    fn test_handlers_ignored_while_off() {
        let (mut tv, journal) = controller(settings(3, 5, 2));
        let before = tv.state();

        for button in [
            Button::Mute,
            Button::ChannelUp,
            Button::ChannelDown,
            Button::VolumeUp,
            Button::VolumeDown,
        ] {
            tv.handle(button);
        }

        assert_eq!(tv.state(), before);
        assert!(journal.borrow().is_empty());
    }

    #[test]
    fn test_handlers_ignored_after_power_off() {
        let (mut tv, journal) = powered_on(settings(3, 5, 2));
        tv.channel_up();
        tv.power();
        journal.borrow_mut().clear();
        let before = tv.state();

        tv.channel_up();
        tv.volume_down();
        tv.mute();

        assert_eq!(tv.state(), before);
        assert!(journal.borrow().is_empty());
    }

    #[test]
    fn test_channel_up_wraps() {
        let (mut tv, journal) = powered_on(settings(3, 5, 2));
        let mut seen = Vec::new();
        for _ in 0..4 {
            tv.channel_up();
            seen.push(tv.state().channel);
        }
        assert_eq!(seen, vec![1, 2, 3, 0]);

        let calls = take(&journal);
        assert_eq!(calls.iter().filter(|c| **c == Call::Play).count(), 4);
        assert_eq!(calls.last(), Some(&Call::Play));
        assert!(calls.contains(&Call::Load("channel0".to_string())));
    }

    #[test]
    fn test_channel_down_wraps_and_reloads() {
        let (mut tv, journal) = powered_on(settings(3, 5, 2));
        tv.channel_down();

        assert_eq!(tv.state().channel, 3);
        assert_eq!(
            take(&journal),
            vec![
                Call::ShowChannel(3),
                Call::Stop,
                Call::Load("channel3".to_string()),
                Call::Play,
            ]
        );
    }

    #[test]
    fn test_channel_up_n_times_is_modular() {
        let (mut tv, _journal) = powered_on(settings(4, 5, 2));
        for n in 1..=23 {
            tv.channel_up();
            assert_eq!(tv.state().channel, n % 5);
        }
    }

    #[test]
    fn test_volume_up_clamps() {
        let (mut tv, journal) = powered_on(settings(3, 5, 2));
        let mut seen = Vec::new();
        for _ in 0..5 {
            tv.volume_up();
            seen.push(tv.state().volume);
        }
        assert_eq!(seen, vec![3, 4, 5, 5, 5]);
        assert_eq!(take(&journal).last(), Some(&Call::SetVolume(1.0)));
    }

    #[test]
    fn test_volume_down_clamps() {
        let (mut tv, _journal) = powered_on(settings(3, 5, 2));
        for expected in [1, 0, 0, 0] {
            tv.volume_down();
            assert_eq!(tv.state().volume, expected);
        }
    }

    #[test]
    fn test_mute_toggles_readout() {
        let (mut tv, journal) = powered_on(settings(3, 5, 2));

        tv.mute();
        assert!(tv.state().muted);
        assert_eq!(tv.effective_volume(), 0);
        assert_eq!(take(&journal), vec![Call::ShowVolume(0), Call::SetVolume(0.0)]);

        tv.mute();
        assert!(!tv.state().muted);
        assert_eq!(tv.effective_volume(), 2);
        assert_eq!(take(&journal), vec![Call::ShowVolume(2), Call::SetVolume(0.4)]);
    }

    #[test]
    fn test_volume_change_clears_mute() {
        let (mut tv, journal) = powered_on(settings(3, 5, 5));
        tv.mute();
        journal.borrow_mut().clear();

        tv.volume_up();

        assert!(!tv.state().muted);
        assert_eq!(tv.state().volume, 5);
        assert_eq!(take(&journal), vec![Call::ShowVolume(5), Call::SetVolume(1.0)]);
    }

    #[test]
    fn test_mute_survives_power_cycle() {
        let (mut tv, _journal) = powered_on(settings(3, 5, 2));
        tv.mute();
        tv.power();
        tv.power();
        assert!(tv.state().muted);
    }

    #[test]
    fn test_curve_shapes_sink_level() {
        let settings = settings(3, 4, 2).with_curve(Box::new(GammaCurve { gamma: 2.0 }));
        let (mut tv, journal) = powered_on(settings);

        tv.volume_up();

        assert_eq!(take(&journal), vec![Call::ShowVolume(3), Call::SetVolume(0.5625)]);
    }

    #[test]
    fn test_shutdown_stops_once_when_off() {
        let (tv, journal) = controller(settings(3, 5, 2));
        drop(tv);
        assert_eq!(take(&journal), vec![Call::Stop]);
    }

    #[test]
    fn test_drop_after_shutdown_does_not_stop_again() {
        let (mut tv, journal) = powered_on(settings(3, 5, 2));
        tv.shutdown();
        drop(tv);
        assert_eq!(take(&journal), vec![Call::Stop]);
    }

    #[test]
    fn test_drop_while_playing_stops() {
        let (mut tv, journal) = controller(settings(3, 5, 2));
        tv.shutdown();
        tv.power();
        journal.borrow_mut().clear();

        drop(tv);

        assert_eq!(take(&journal), vec![Call::Stop]);
    }

    #[test]
    fn test_documented_scenario() {
        let (mut tv, journal) = controller(settings(3, 5, 2));

        tv.power();
        assert!(tv.is_powered());
        assert_eq!(tv.state().channel, 0);
        assert!(take(&journal).contains(&Call::Load("channel0".to_string())));

        let channels: Vec<i32> = (0..4)
            .map(|_| {
                tv.channel_up();
                tv.state().channel
            })
            .collect();
        assert_eq!(channels, vec![1, 2, 3, 0]);

        let volumes: Vec<i32> = (0..5)
            .map(|_| {
                tv.volume_up();
                tv.state().volume
            })
            .collect();
        assert_eq!(volumes, vec![3, 4, 5, 5, 5]);
        take(&journal);

        tv.mute();
        assert_eq!(take(&journal), vec![Call::ShowVolume(0), Call::SetVolume(0.0)]);

        tv.volume_down();
        assert!(!tv.state().muted);
        assert_eq!(tv.state().volume, 4);
        assert_eq!(take(&journal), vec![Call::ShowVolume(4), Call::SetVolume(0.8)]);

        tv.power();
        assert!(!tv.is_powered());
        assert_eq!(take(&journal), vec![Call::Stop]);
    }
}
