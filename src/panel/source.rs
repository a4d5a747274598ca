use std::collections::VecDeque;
use async_trait::async_trait;
use std::io::{self, BufRead};
use std::thread;
use tokio::sync::mpsc;
use super::types::{Button, PanelError};

/// Where button presses come from. `None` means the source is exhausted.
#[async_trait]
pub trait EventSource: Send {
    async fn next_event(&mut self) -> Option<Result<Button, PanelError>>;
}

/// One button name per line. Blank lines and `#` comments are skipped.
///
/// Lines are read on a detached thread, so a blocked read never holds up
/// runtime shutdown.
pub struct LineSource {
    lines: mpsc::UnboundedReceiver<io::Result<String>>,
}

impl LineSource {
    pub fn new<R: BufRead + Send + 'static>(reader: R) -> Self {
        let (line_tx, lines) = mpsc::unbounded_channel();
        thread::spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if line_tx.send(line).is_err() || failed {
                    break;
                }
            }
        });
        Self { lines }
    }

    pub fn stdin() -> Self {
        Self::new(io::BufReader::new(io::stdin()))
    }
}

#[async_trait]
impl EventSource for LineSource {
    async fn next_event(&mut self) -> Option<Result<Button, PanelError>> {
        loop {
            match self.lines.recv().await? {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    return Some(line.parse());
                }
                Err(e) => return Some(Err(PanelError::Input(e.to_string()))),
            }
        }
    }
}

/// A fixed sequence of button names, replayed in order.
#[derive(Debug, Default)]
pub struct ScriptSource {
    events: VecDeque<String>,
}

impl ScriptSource {
    pub fn new<I, T>(events: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            events: events.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

#[async_trait]
impl EventSource for ScriptSource {
    async fn next_event(&mut self) -> Option<Result<Button, PanelError>> {
        self.events.pop_front().map(|name| name.parse())
    }
}
