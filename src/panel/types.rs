use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PanelError {
    #[error("Unknown button: {0}")]
    UnknownButton(String),
    #[error("No handler bound to {0}")]
    Unbound(Button),
    #[error("Failed to read events: {0}")]
    Input(String),
}

/// The two numeric readouts on the front of the set.
pub trait Display {
    fn show_channel(&mut self, channel: i32);
    fn show_volume(&mut self, volume: i32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Power,
    Mute,
    ChannelUp,
    ChannelDown,
    VolumeUp,
    VolumeDown,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::Power,
        Button::Mute,
        Button::ChannelUp,
        Button::ChannelDown,
        Button::VolumeUp,
        Button::VolumeDown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Button::Power => "power",
            Button::Mute => "mute",
            Button::ChannelUp => "channel_up",
            Button::ChannelDown => "channel_down",
            Button::VolumeUp => "volume_up",
            Button::VolumeDown => "volume_down",
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Button {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "c+" => return Ok(Button::ChannelUp),
            "c-" => return Ok(Button::ChannelDown),
            "v+" => return Ok(Button::VolumeUp),
            "v-" => return Ok(Button::VolumeDown),
            _ => {}
        }
        let normalized = trimmed.to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "power" | "p" => Ok(Button::Power),
            "mute" | "m" => Ok(Button::Mute),
            "channel_up" => Ok(Button::ChannelUp),
            "channel_down" => Ok(Button::ChannelDown),
            "volume_up" => Ok(Button::VolumeUp),
            "volume_down" => Ok(Button::VolumeDown),
            _ => Err(PanelError::UnknownButton(trimmed.to_string())),
        }
    }
}
