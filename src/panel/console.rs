use super::types::Display;

/// Prints each readout change to stdout, remembering both values so every
/// line shows the whole panel.
#[derive(Debug, Default)]
pub struct ConsoleDisplay {
    channel: Option<i32>,
    volume: Option<i32>,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> String {
        let channel = self.channel.map_or("--".to_string(), |c| format!("{:02}", c));
        let volume = self.volume.map_or("--".to_string(), |v| format!("{:02}", v));
        format!("CH {} | VOL {}", channel, volume)
    }
}

impl Display for ConsoleDisplay {
    fn show_channel(&mut self, channel: i32) {
        self.channel = Some(channel);
        println!("{}", self.render());
    }

    fn show_volume(&mut self, volume: i32) {
        self.volume = Some(volume);
        println!("{}", self.render());
    }
}
