use std::collections::HashMap;
use crate::controller::TelevisionController;
use crate::media::MediaSink;
use super::types::{Button, Display, PanelError};

pub type Handler<S, D> = fn(&mut TelevisionController<S, D>);

/// Maps front-panel buttons to controller handlers. Front-ends deliver
/// events here by name without knowing which handler runs.
pub struct Bindings<S: MediaSink, D: Display> {
    handlers: HashMap<Button, Handler<S, D>>,
}

impl<S: MediaSink, D: Display> Bindings<S, D> {
    pub fn new() -> Self {
        Self { handlers: HashMap::new() }
    }

    /// Each button bound to the handler of the same name.
    pub fn standard() -> Self {
        let mut bindings = Self::new();
        bindings.bind(Button::Power, TelevisionController::power);
        bindings.bind(Button::Mute, TelevisionController::mute);
        bindings.bind(Button::ChannelUp, TelevisionController::channel_up);
        bindings.bind(Button::ChannelDown, TelevisionController::channel_down);
        bindings.bind(Button::VolumeUp, TelevisionController::volume_up);
        bindings.bind(Button::VolumeDown, TelevisionController::volume_down);
        bindings
    }

    pub fn bind(&mut self, button: Button, handler: Handler<S, D>) {
        if self.handlers.insert(button, handler).is_some() {
            tracing::warn!("Button '{}' already bound, replacing", button);
        }
    }

    pub fn unbind(&mut self, button: Button) -> bool {
        self.handlers.remove(&button).is_some()
    }

    pub fn is_bound(&self, button: Button) -> bool {
        self.handlers.contains_key(&button)
    }

    pub fn dispatch(&self, tv: &mut TelevisionController<S, D>, button: Button) -> Result<(), PanelError> {
        match self.handlers.get(&button) {
            Some(handler) => {
                tracing::trace!("Dispatching {}", button);
                handler(tv);
                Ok(())
            }
            None => Err(PanelError::Unbound(button)),
        }
    }

    pub fn dispatch_name(&self, tv: &mut TelevisionController<S, D>, name: &str) -> Result<Button, PanelError> {
        let button: Button = name.parse()?;
        self.dispatch(tv, button)?;
        Ok(button)
    }

    pub fn buttons(&self) -> Vec<Button> {
        Button::ALL.into_iter().filter(|b| self.is_bound(*b)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn count(&self) -> usize {
        self.handlers.len()
    }
}

impl<S: MediaSink, D: Display> Default for Bindings<S, D> {
    fn default() -> Self {
        Self::new()
    }
}
