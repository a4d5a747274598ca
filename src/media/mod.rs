pub mod error;
pub mod source;
pub mod tracing_sink;
pub mod types;

pub use error::MediaError;
pub use source::SourceTemplate;
pub use tracing_sink::TracingSink;
pub use types::{MediaEvent, MediaSink, PlaybackState, SourceId};
