pub mod bindings;
pub mod console;
pub mod source;
pub mod types;

pub use bindings::{Bindings, Handler};
pub use console::ConsoleDisplay;
pub use source::{EventSource, LineSource, ScriptSource};
pub use types::{Button, Display, PanelError};
