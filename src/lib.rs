pub mod config;
pub mod controller;
pub mod curves;
pub mod media;
pub mod panel;
pub mod tuning;

pub use config::{ChannelsConfig, Config, ConfigError, MediaConfig, VolumeConfig};
pub use controller::{ControllerSettings, TelevisionController, TelevisionState};
pub use curves::{Curve, CurveConfig, GammaCurve, LinearCurve, PerceptualCurve};
pub use media::{MediaError, MediaEvent, MediaSink, PlaybackState, SourceId, SourceTemplate, TracingSink};
pub use panel::{Bindings, Button, ConsoleDisplay, Display, EventSource, LineSource, PanelError, ScriptSource};
pub use tuning::{ChannelRange, TuningError, VolumeRange};
